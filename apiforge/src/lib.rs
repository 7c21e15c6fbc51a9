//! apiforge — module scaffolding engine
//!
//! Derives consistent qualified names for a module's five artifacts (site
//! controller, admin controller, resource, repository, model), renders each
//! from a template stub by literal placeholder substitution, and writes the
//! results to a conventional layout, consulting an overwrite policy before
//! replacing existing files.
//!
//! # Example
//!
//! ```no_run
//! use apiforge::{AlwaysSkip, ForgeConfig, ModuleGenerator, ModuleSpec};
//!
//! # fn main() -> Result<(), apiforge::ScaffoldError> {
//! let config = ForgeConfig::load()?;
//! let mut spec = ModuleSpec::new("Posts");
//! spec.data = Some("title,body".to_string());
//!
//! let report = ModuleGenerator::new(&config).generate(&spec, &mut AlwaysSkip)?;
//! for file in &report.files {
//!     println!("{}: {}", file.label, file.path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod scaffold;

pub use config::ForgeConfig;
pub use error::{Result, ScaffoldError};
pub use scaffold::{
    AlwaysOverwrite, AlwaysSkip, ControllerKind, GenerationReport, ModuleGenerator, ModuleSpec,
    OverwritePolicy, WriteOutcome,
};
