//! Module spec and generation context
//!
//! The resolve phase runs five ordered steps against a [`ContextBuilder`];
//! `finalize` seals the result into a read-only [`GenerationContext`] that
//! the emit phase consumes. Sealing fails if any step was skipped, so an
//! emit step can never observe an unresolved entry.

use std::str::FromStr;

use tracing::debug;

use super::resolver::{resolve, ArtifactKind, ResolvedArtifact};
use crate::error::{Result, ScaffoldError};

/// The inputs for one generator run. Constructed once, never mutated.
#[derive(Debug, Clone)]
pub struct ModuleSpec {
    /// Module name the default artifact names derive from.
    pub module: String,
    /// Override path for the controller.
    pub controller: Option<String>,
    /// Controller kind as supplied (`setter`, `getter`, `admin`).
    ///
    /// Kept raw here; the resolve phase validates it so that an invalid
    /// value aborts the run before anything is written.
    pub controller_kind: String,
    /// Parent path segment prepended to the controller's directory.
    pub parent_path: Option<String>,
    /// Override path for the model.
    pub model: Option<String>,
    /// Override path for the resource.
    pub resource: Option<String>,
    /// Override path for the repository.
    pub repository: Option<String>,
    /// Raw comma-separated field names.
    pub data: Option<String>,
}

impl ModuleSpec {
    /// A spec with defaults: getter controller, no overrides, no fields.
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            controller: None,
            controller_kind: "getter".to_string(),
            parent_path: None,
            model: None,
            resource: None,
            repository: None,
            data: None,
        }
    }
}

/// Which site-controller template a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    /// Write-oriented public controller.
    Setter,
    /// Read-oriented public controller (the default).
    Getter,
    /// Admin-style public controller.
    Admin,
}

impl ControllerKind {
    /// The template stub name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setter => "setter",
            Self::Getter => "getter",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for ControllerKind {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "setter" => Ok(Self::Setter),
            "getter" => Ok(Self::Getter),
            "admin" => Ok(Self::Admin),
            other => Err(ScaffoldError::UnknownControllerKind {
                given: other.to_string(),
            }),
        }
    }
}

/// Accumulates the resolve phase's entries. Each step writes exactly one
/// entry; no step reads an entry a later step writes.
#[derive(Debug, Default)]
pub struct ContextBuilder {
    controller: Option<ResolvedArtifact>,
    controller_kind: Option<ControllerKind>,
    model: Option<ResolvedArtifact>,
    resource: Option<ResolvedArtifact>,
    repository: Option<ResolvedArtifact>,
    repository_short: Option<String>,
    fields: Option<Vec<String>>,
}

impl ContextBuilder {
    /// An empty builder; created at pipeline start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Step 1: validate the controller kind, then resolve the controller
    /// name and apply the optional parent path.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::UnknownControllerKind`] for a kind outside
    /// {setter, getter, admin}; raised before steps 2-5 run and before any
    /// filesystem access.
    pub fn init_controller(&mut self, spec: &ModuleSpec) -> Result<()> {
        let kind = spec.controller_kind.parse::<ControllerKind>()?;

        let mut controller = resolve(
            &spec.module,
            spec.controller.as_deref(),
            ArtifactKind::Controller,
        );
        if let Some(parent) = spec.parent_path.as_deref() {
            controller = controller.prefixed(parent);
        }

        debug!(controller = %controller.qualified(), kind = kind.as_str(), "resolved controller");
        self.controller_kind = Some(kind);
        self.controller = Some(controller);
        Ok(())
    }

    /// Step 2: resolve the model name (segments and leaf singularized).
    pub fn init_model(&mut self, spec: &ModuleSpec) {
        let model = resolve(&spec.module, spec.model.as_deref(), ArtifactKind::Model);
        debug!(model = %model.qualified(), "resolved model");
        self.model = Some(model);
    }

    /// Step 3: resolve the resource name (leaf singularized). Its qualified
    /// path is the exact string the repository template embeds.
    pub fn init_resource(&mut self, spec: &ModuleSpec) {
        let resource = resolve(&spec.module, spec.resource.as_deref(), ArtifactKind::Resource);
        debug!(resource = %resource.qualified(), "resolved resource");
        self.resource = Some(resource);
    }

    /// Step 4: resolve the repository name and derive its short name
    /// (lowercased leaf), used as a distinct template token.
    pub fn init_repository(&mut self, spec: &ModuleSpec) {
        let repository = resolve(
            &spec.module,
            spec.repository.as_deref(),
            ArtifactKind::Repository,
        );
        debug!(repository = %repository.qualified(), "resolved repository");
        self.repository_short = Some(repository.name().to_lowercase());
        self.repository = Some(repository);
    }

    /// Step 5: split the raw field list on commas, preserving order and
    /// duplicates. Absent or empty input yields an empty list.
    pub fn init_fields(&mut self, spec: &ModuleSpec) {
        let fields = spec
            .data
            .as_deref()
            .filter(|data| !data.is_empty())
            .map_or_else(Vec::new, |data| {
                data.split(',').map(str::to_string).collect()
            });
        debug!(count = fields.len(), "parsed field list");
        self.fields = Some(fields);
    }

    /// Seal the builder into a read-only context.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::IncompleteContext`] naming the first entry whose
    /// resolve step did not run. Emission is only reachable through a
    /// sealed context, which is what guarantees the repository template's
    /// model/resource paths exist before it renders.
    pub fn finalize(self) -> Result<GenerationContext> {
        fn missing(missing: &'static str) -> ScaffoldError {
            ScaffoldError::IncompleteContext { missing }
        }
        Ok(GenerationContext {
            controller: self.controller.ok_or_else(|| missing("controller"))?,
            controller_kind: self
                .controller_kind
                .ok_or_else(|| missing("controller kind"))?,
            model: self.model.ok_or_else(|| missing("model"))?,
            resource: self.resource.ok_or_else(|| missing("resource"))?,
            repository: self.repository.ok_or_else(|| missing("repository"))?,
            repository_short: self
                .repository_short
                .ok_or_else(|| missing("repository short name"))?,
            fields: self.fields.ok_or_else(|| missing("field list"))?,
        })
    }
}

/// Every resolved entry the emit phase reads. Fully populated by
/// construction; read-only thereafter.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    controller: ResolvedArtifact,
    controller_kind: ControllerKind,
    model: ResolvedArtifact,
    resource: ResolvedArtifact,
    repository: ResolvedArtifact,
    repository_short: String,
    fields: Vec<String>,
}

impl GenerationContext {
    /// The resolved controller (shared by the site and admin files).
    #[must_use]
    pub const fn controller(&self) -> &ResolvedArtifact {
        &self.controller
    }

    /// The validated controller kind.
    #[must_use]
    pub const fn controller_kind(&self) -> ControllerKind {
        self.controller_kind
    }

    /// The resolved model.
    #[must_use]
    pub const fn model(&self) -> &ResolvedArtifact {
        &self.model
    }

    /// The resolved resource.
    #[must_use]
    pub const fn resource(&self) -> &ResolvedArtifact {
        &self.resource
    }

    /// The resolved repository.
    #[must_use]
    pub const fn repository(&self) -> &ResolvedArtifact {
        &self.repository
    }

    /// Lowercased repository leaf, a template token distinct from the
    /// qualified name.
    #[must_use]
    pub fn repository_short(&self) -> &str {
        &self.repository_short
    }

    /// The qualified model path the repository template embeds.
    #[must_use]
    pub fn model_path(&self) -> String {
        self.model.qualified()
    }

    /// The qualified resource path the repository template embeds.
    #[must_use]
    pub fn resource_path(&self) -> String {
        self.resource.qualified()
    }

    /// Ordered field names, duplicates preserved.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}
