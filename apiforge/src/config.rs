//! Generator configuration
//!
//! The templates root and output layout are configurable through
//! `apiforge.toml` and `APIFORGE_`-prefixed environment variables, merged
//! over built-in defaults.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Where templates are read from and where generated files land.
///
/// All output roots are interpreted relative to `output_root`, which in turn
/// is usually the project directory the command runs in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Directory holding the module template stubs.
    pub templates_root: PathBuf,
    /// Base directory generated files are placed under.
    pub output_root: PathBuf,
    /// Root for public (site) controllers.
    pub site_controllers: PathBuf,
    /// Root for admin controllers.
    pub admin_controllers: PathBuf,
    /// Root for resources.
    pub resources: PathBuf,
    /// Root for repositories.
    pub repositories: PathBuf,
    /// Root for models.
    pub models: PathBuf,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            templates_root: PathBuf::from("templates/module"),
            output_root: PathBuf::from("."),
            site_controllers: PathBuf::from("src/controllers/site"),
            admin_controllers: PathBuf::from("src/controllers/admin"),
            resources: PathBuf::from("src/resources"),
            repositories: PathBuf::from("src/repositories"),
            models: PathBuf::from("src/models"),
        }
    }
}

impl ForgeConfig {
    /// Load configuration from `apiforge.toml` in the current directory,
    /// merged over defaults, with `APIFORGE_` environment overrides on top.
    pub fn load() -> Result<Self> {
        Self::load_from("apiforge.toml")
    }

    /// Load configuration from a specific toml file path.
    ///
    /// A missing file is not an error; defaults (and environment overrides)
    /// still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("APIFORGE_"))
            .extract()?;
        Ok(config)
    }
}
