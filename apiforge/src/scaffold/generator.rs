//! Module generation pipeline
//!
//! Two phases, strictly ordered: resolve every artifact name into a sealed
//! [`GenerationContext`], then emit the five files. Resolution completes
//! before any emission because the repository template embeds the model and
//! resource paths, which are resolved in earlier steps than the repository
//! is emitted in. A configuration error therefore aborts the run before the
//! filesystem is touched at all.

use std::path::{Path, PathBuf};

use tracing::info;

use super::context::{ContextBuilder, GenerationContext, ModuleSpec};
use super::substitute::{render, repository_field_list, resource_field_list};
use super::templates::{TemplateKind, TemplateSource};
use super::writer::{self, OverwritePolicy, WriteOutcome};
use crate::config::ForgeConfig;
use crate::error::Result;

/// One file the emit phase produced (or deliberately skipped).
#[derive(Debug, Clone)]
pub struct EmittedFile {
    /// Artifact label ("Controller", "Admin Controller", ...).
    pub label: &'static str,
    /// Target path of the file.
    pub path: PathBuf,
    /// Whether the file was written or skipped.
    pub outcome: WriteOutcome,
}

/// Per-file outcomes of a completed run, in emission order.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// The emitted files.
    pub files: Vec<EmittedFile>,
}

/// Orchestrates the resolve and emit phases for one module.
#[derive(Debug)]
pub struct ModuleGenerator<'a> {
    config: &'a ForgeConfig,
    templates: TemplateSource,
}

impl<'a> ModuleGenerator<'a> {
    /// A generator reading templates from the configured templates root.
    #[must_use]
    pub fn new(config: &'a ForgeConfig) -> Self {
        Self {
            config,
            templates: TemplateSource::new(&config.templates_root),
        }
    }

    /// Run the full pipeline for `spec`.
    ///
    /// # Errors
    ///
    /// [`crate::ScaffoldError::UnknownControllerKind`] before anything is
    /// written; template read or filesystem errors abort the remaining emit
    /// steps, leaving files from earlier steps on disk.
    pub fn generate(
        &self,
        spec: &ModuleSpec,
        policy: &mut dyn OverwritePolicy,
    ) -> Result<GenerationReport> {
        let context = Self::resolve(spec)?;
        self.emit(&context, policy)
    }

    /// Resolve phase: the five ordered init steps, then seal.
    fn resolve(spec: &ModuleSpec) -> Result<GenerationContext> {
        info!(module = %spec.module, "preparing module data");
        let mut builder = ContextBuilder::new();
        builder.init_controller(spec)?;
        builder.init_model(spec);
        builder.init_resource(spec);
        builder.init_repository(spec);
        builder.init_fields(spec);
        builder.finalize()
    }

    /// Emit phase: controllers, resource, model, repository.
    fn emit(
        &self,
        context: &GenerationContext,
        policy: &mut dyn OverwritePolicy,
    ) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        self.emit_controllers(context, policy, &mut report)?;
        self.emit_resource(context, policy, &mut report)?;
        self.emit_model(context, policy, &mut report)?;
        self.emit_repository(context, policy, &mut report)?;
        info!(files = report.files.len(), "module generated");
        Ok(report)
    }

    /// The controller step produces two files from two templates: the
    /// kind-selected site controller and the always-generated admin
    /// controller, in separate subtrees keyed by the same resolved
    /// directory.
    fn emit_controllers(
        &self,
        context: &GenerationContext,
        policy: &mut dyn OverwritePolicy,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let controller = context.controller();
        let tokens = [
            ("ControllerName", controller.name().to_string()),
            ("ControllerPath", controller.dir().to_string()),
            ("RepoShortName", context.repository_short().to_string()),
        ];
        let file = format!("{}Controller.rs", controller.name());

        let template = self
            .templates
            .load(TemplateKind::SiteController(context.controller_kind()))?;
        self.emit_one(
            "Controller",
            &self.config.site_controllers,
            controller.dir(),
            &file,
            &render(&template, &tokens),
            policy,
            report,
        )?;

        let template = self.templates.load(TemplateKind::AdminController)?;
        self.emit_one(
            "Admin Controller",
            &self.config.admin_controllers,
            controller.dir(),
            &file,
            &render(&template, &tokens),
            policy,
            report,
        )
    }

    fn emit_resource(
        &self,
        context: &GenerationContext,
        policy: &mut dyn OverwritePolicy,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let resource = context.resource();
        let template = self.templates.load(TemplateKind::Resource)?;
        let tokens = [
            ("ResourceName", resource.name().to_string()),
            ("ResourcePath", resource.dir().to_string()),
            ("DATA_LIST", resource_field_list(context.fields())),
        ];
        self.emit_one(
            "Resource",
            &self.config.resources,
            resource.dir(),
            &format!("{}.rs", resource.name()),
            &render(&template, &tokens),
            policy,
            report,
        )
    }

    fn emit_model(
        &self,
        context: &GenerationContext,
        policy: &mut dyn OverwritePolicy,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let model = context.model();
        let template = self.templates.load(TemplateKind::Model)?;
        let tokens = [
            ("ModelName", model.name().to_string()),
            ("ModelPath", model.dir().to_string()),
        ];
        self.emit_one(
            "Model",
            &self.config.models,
            model.dir(),
            &format!("{}.rs", model.name()),
            &render(&template, &tokens),
            policy,
            report,
        )
    }

    /// The repository template embeds the model and resource qualified
    /// paths, which the sealed context guarantees are already resolved.
    fn emit_repository(
        &self,
        context: &GenerationContext,
        policy: &mut dyn OverwritePolicy,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let repository = context.repository();
        let template = self.templates.load(TemplateKind::Repository)?;
        let tokens = [
            ("RepositoryName", repository.name().to_string()),
            ("RepositoryPath", repository.dir().to_string()),
            ("ModelPath", context.model_path()),
            ("ResourcePath", context.resource_path()),
            ("RepoShortName", context.repository_short().to_string()),
            ("DATA_LIST", repository_field_list(context.fields())),
        ];
        self.emit_one(
            "Repository",
            &self.config.repositories,
            repository.dir(),
            &format!("{}Repository.rs", repository.name()),
            &render(&template, &tokens),
            policy,
            report,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_one(
        &self,
        label: &'static str,
        root: &Path,
        dir: &str,
        file: &str,
        content: &str,
        policy: &mut dyn OverwritePolicy,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let path = self.artifact_path(root, dir, file);
        let outcome = writer::write(&path, content, label, policy)?;
        report.files.push(EmittedFile {
            label,
            path,
            outcome,
        });
        Ok(())
    }

    fn artifact_path(&self, root: &Path, dir: &str, file: &str) -> PathBuf {
        let mut path = self.config.output_root.join(root);
        if !dir.is_empty() {
            path.push(dir);
        }
        path.push(file);
        path
    }
}
