//! Error types for the scaffolding engine

use std::io;
use std::path::PathBuf;

/// Errors raised by the scaffolding pipeline.
///
/// Every variant is fatal to the run except where noted on the call site: a
/// declined overwrite is reported as a skipped file, not an error.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The requested controller kind is not one of the supported kinds.
    ///
    /// Raised during the resolve phase, before any directory or file is
    /// touched.
    #[error("unknown controller type '{given}', available types: setter, getter, admin")]
    UnknownControllerKind {
        /// The value that was supplied.
        given: String,
    },

    /// A template file could not be read from the templates root.
    #[error("failed to read template {path}")]
    TemplateRead {
        /// Path of the missing or unreadable template.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An output directory could not be created.
    #[error("failed to create directory {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write file {path}")]
    WriteFile {
        /// Target file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The overwrite prompt failed (e.g. no usable terminal).
    #[error("overwrite prompt failed for {path}")]
    Prompt {
        /// File the prompt was about.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A resolve step was skipped before the context was sealed.
    ///
    /// This guards the resolve-then-emit ordering: emission only ever sees a
    /// fully populated context.
    #[error("generation context is missing the resolved {missing} entry")]
    IncompleteContext {
        /// Name of the missing context entry.
        missing: &'static str,
    },

    /// Configuration could not be loaded.
    #[error("failed to load configuration")]
    Config(#[from] figment::Error),
}

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
