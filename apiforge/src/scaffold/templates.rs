//! Template loading
//!
//! Templates live under a configured root in a fixed relative layout, one
//! stub per artifact kind (one per controller kind on the site side). A
//! missing stub is a fatal read error; there are no embedded fallbacks.

use std::fs;
use std::path::{Path, PathBuf};

use super::context::ControllerKind;
use crate::error::{Result, ScaffoldError};

/// Identifies one template stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Public controller; the kind selects the stub.
    SiteController(ControllerKind),
    /// Admin controller (always generated).
    AdminController,
    /// Resource stub.
    Resource,
    /// Repository stub.
    Repository,
    /// Model stub.
    Model,
}

impl TemplateKind {
    /// Stub location relative to the templates root.
    #[must_use]
    pub fn relative_path(self) -> PathBuf {
        match self {
            Self::SiteController(kind) => {
                Path::new("controllers/site").join(format!("{}.stub", kind.as_str()))
            }
            Self::AdminController => PathBuf::from("controllers/admin/admin.stub"),
            Self::Resource => PathBuf::from("resources/resource.stub"),
            Self::Repository => PathBuf::from("repositories/repository.stub"),
            Self::Model => PathBuf::from("models/model.stub"),
        }
    }
}

/// Reads template text from the templates root.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    root: PathBuf,
}

impl TemplateSource {
    /// A source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load the stub for `kind`.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::TemplateRead`] naming the stub path when the file
    /// is missing or unreadable.
    pub fn load(&self, kind: TemplateKind) -> Result<String> {
        let path = self.root.join(kind.relative_path());
        fs::read_to_string(&path).map_err(|source| ScaffoldError::TemplateRead { path, source })
    }
}
