//! File emission with overwrite policy
//!
//! Writing a file ensures its ancestor directories exist, then consults the
//! injected overwrite policy when the target already exists. The policy is
//! a seam: the CLI installs an interactive prompt, automation installs
//! always-overwrite or always-skip.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Decides what happens when a target file already exists.
pub trait OverwritePolicy {
    /// Return `true` to overwrite `path`, `false` to skip it.
    ///
    /// `label` is the human-readable artifact name for prompting
    /// ("Controller", "Resource", ...).
    ///
    /// # Errors
    ///
    /// Interactive implementations surface prompt failures as
    /// [`ScaffoldError::Prompt`].
    fn should_overwrite(&mut self, path: &Path, label: &str) -> Result<bool>;
}

/// Non-interactive policy for automated runs: replace existing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn should_overwrite(&mut self, _path: &Path, _label: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Non-interactive policy for automated runs: keep existing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSkip;

impl OverwritePolicy for AlwaysSkip {
    fn should_overwrite(&mut self, _path: &Path, _label: &str) -> Result<bool> {
        Ok(false)
    }
}

/// What a single write step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or replaced.
    Written,
    /// The file existed and the policy declined to overwrite; not an error.
    Skipped,
}

/// Write `content` to `path`, creating missing ancestor directories and
/// consulting `policy` when the target exists.
///
/// # Errors
///
/// [`ScaffoldError::CreateDir`] or [`ScaffoldError::WriteFile`] on
/// filesystem failures; whatever the policy returns on prompt failures.
pub fn write(
    path: &Path,
    content: &str,
    label: &str,
    policy: &mut dyn OverwritePolicy,
) -> Result<WriteOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if path.exists() && !policy.should_overwrite(path, label)? {
        debug!(path = %path.display(), "kept existing file");
        return Ok(WriteOutcome::Skipped);
    }

    fs::write(path, content).map_err(|source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote file");
    Ok(WriteOutcome::Written)
}
