//! Artifact name resolution
//!
//! Every artifact name is derived from the module name unless an explicit
//! override path was given. Overrides use `/` as their segment separator
//! (backslashes are normalised). Model and resource names additionally go
//! through singularization.

use super::helpers::{capitalize_first, singularize, singularize_segments};

/// The artifact roles whose names the resolver derives.
///
/// The admin controller is not listed: it shares the controller's resolved
/// name and differs only in which subtree it is emitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Site and admin controllers.
    Controller,
    /// Data model.
    Model,
    /// Response resource.
    Resource,
    /// Persistence repository.
    Repository,
}

/// A fully resolved artifact name, split into its directory portion and
/// leaf name. Never mutated once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    dir: String,
    name: String,
}

impl ResolvedArtifact {
    /// Directory portion: all path segments but the last. Empty for a
    /// single-segment override.
    #[must_use]
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Leaf name: the last path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The qualified name, `dir/name`, or just the leaf when the directory
    /// portion is empty.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.dir.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.dir, self.name)
        }
    }

    /// Return a copy with `parent` prepended to the directory portion.
    ///
    /// Used for the controller's optional parent path segment.
    #[must_use]
    pub fn prefixed(&self, parent: &str) -> Self {
        let dir = if self.dir.is_empty() {
            parent.to_string()
        } else {
            format!("{parent}/{}", self.dir)
        };
        Self {
            dir,
            name: self.name.clone(),
        }
    }
}

/// Resolve one artifact's qualified name from the module name, an optional
/// override path, and the kind's normalization rules.
///
/// Absence of an override always falls back to the module-name default
/// (`Module/Module`), so resolution never fails.
#[must_use]
pub fn resolve(module: &str, override_path: Option<&str>, kind: ArtifactKind) -> ResolvedArtifact {
    let raw = override_path.map_or_else(
        || {
            let module = capitalize_first(module);
            format!("{module}/{module}")
        },
        |path| path.replace('\\', "/"),
    );

    let (dir, name) = match raw.rsplit_once('/') {
        Some((dir, name)) => (dir.to_string(), name.to_string()),
        None => (String::new(), raw),
    };

    let (dir, name) = match kind {
        ArtifactKind::Model => (singularize_segments(&dir), singularize(&name)),
        ArtifactKind::Resource => (dir, singularize(&name)),
        ArtifactKind::Controller | ArtifactKind::Repository => (dir, name),
    };

    ResolvedArtifact { dir, name }
}
