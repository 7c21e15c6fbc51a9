//! `make module` command
//!
//! Builds the [`ModuleSpec`] from the parsed flags, selects the overwrite
//! policy, runs the generator, and echoes per-file results.
//!
//! # Example
//!
//! ```bash
//! apiforge make module Posts \
//!   --type getter \
//!   --data title,body,published_at \
//!   --path Content
//! ```

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use apiforge::{
    AlwaysOverwrite, AlwaysSkip, ForgeConfig, ModuleGenerator, ModuleSpec, OverwritePolicy,
    ScaffoldError, WriteOutcome,
};

static SPARKLE: Emoji = Emoji("✨", "*");

/// Generate a complete module: site and admin controllers, resource,
/// model, and repository.
#[derive(Debug, clap::Args)]
pub struct MakeModuleCommand {
    /// Module name the artifact names derive from (e.g. `Posts`)
    pub module_name: String,

    /// Controller override path (e.g. `Content/Posts`)
    #[arg(long)]
    pub controller: Option<String>,

    /// Controller type: setter, getter, or admin
    #[arg(long = "type", default_value = "getter")]
    pub controller_type: String,

    /// Model override path
    #[arg(long)]
    pub model: Option<String>,

    /// Comma-separated field names (e.g. `title,body`)
    #[arg(long)]
    pub data: Option<String>,

    /// Resource override path
    #[arg(long)]
    pub resource: Option<String>,

    /// Repository override path
    #[arg(long)]
    pub repository: Option<String>,

    /// Parent path segment for the public controller
    #[arg(long)]
    pub path: Option<String>,

    /// Overwrite existing files without prompting
    #[arg(long, conflicts_with = "skip_existing")]
    pub force: bool,

    /// Keep existing files without prompting
    #[arg(long)]
    pub skip_existing: bool,
}

impl MakeModuleCommand {
    /// Execute with configuration loaded from `apiforge.toml`.
    ///
    /// # Errors
    ///
    /// Configuration or generation failures, with context attached.
    pub fn execute(&self) -> Result<()> {
        let config = ForgeConfig::load().context("Failed to load configuration")?;
        self.execute_with(&config)
    }

    /// Execute against an explicit configuration.
    ///
    /// # Errors
    ///
    /// Generation failures, with context attached.
    pub fn execute_with(&self, config: &ForgeConfig) -> Result<()> {
        println!(
            "\n{} {} {}",
            style("Building module").cyan().bold(),
            style(&self.module_name).green().bold(),
            style("...").cyan().bold()
        );

        let spec = self.spec();
        let mut policy = self.policy();

        // No spinner when the run may stop to prompt.
        let spinner = self.non_interactive().then(|| {
            let spinner = ProgressBar::new_spinner();
            if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
            {
                spinner.set_style(template);
            }
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));
            spinner.set_message("Preparing data...");
            spinner
        });

        let result = ModuleGenerator::new(config).generate(&spec, policy.as_mut());

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let report = result.context("Failed to generate module")?;

        println!();
        for file in &report.files {
            match file.outcome {
                WriteOutcome::Written => println!(
                    "  {} {} ({})",
                    style("✓").green(),
                    style(file.path.display()).dim(),
                    style(file.label).dim()
                ),
                WriteOutcome::Skipped => println!(
                    "  {} {} ({}, kept existing)",
                    style("-").yellow(),
                    style(file.path.display()).dim(),
                    style(file.label).dim()
                ),
            }
        }

        println!(
            "\n{} Module {} has been created successfully",
            SPARKLE,
            style(&self.module_name).green().bold()
        );

        Ok(())
    }

    fn spec(&self) -> ModuleSpec {
        let mut spec = ModuleSpec::new(self.module_name.clone());
        spec.controller = self.controller.clone();
        spec.controller_kind = self.controller_type.clone();
        spec.parent_path = self.path.clone();
        spec.model = self.model.clone();
        spec.resource = self.resource.clone();
        spec.repository = self.repository.clone();
        spec.data = self.data.clone();
        spec
    }

    fn policy(&self) -> Box<dyn OverwritePolicy> {
        if self.force {
            Box::new(AlwaysOverwrite)
        } else if self.skip_existing {
            Box::new(AlwaysSkip)
        } else {
            Box::new(ConfirmOverwrite)
        }
    }

    const fn non_interactive(&self) -> bool {
        self.force || self.skip_existing
    }
}

/// Interactive overwrite policy: asks on the terminal, defaults to keeping
/// the existing file.
struct ConfirmOverwrite;

impl OverwritePolicy for ConfirmOverwrite {
    fn should_overwrite(&mut self, path: &Path, label: &str) -> apiforge::Result<bool> {
        Confirm::new()
            .with_prompt(format!("{label} exists, override it?"))
            .default(false)
            .interact()
            .map_err(|err| ScaffoldError::Prompt {
                path: path.to_path_buf(),
                source: io::Error::other(err),
            })
    }
}
