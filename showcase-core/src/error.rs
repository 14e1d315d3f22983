//! Error types for showcase-core.

use std::path::PathBuf;

use thiserror::Error;

/// Caller errors raised while populating a [`Registry`](crate::Registry).
///
/// Both variants are programming mistakes in the catalog definition and are
/// expected to surface during development.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `register*` was called with a name that is already taken.
    #[error("name {name} was already used")]
    DuplicateName { name: String },

    /// `description` / `add` was called before any entry was registered.
    #[error("call register method prior {}", .operation.hint())]
    NoCurrentEntry { operation: EntryOperation },
}

/// The entry-scoped operation that needed a current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOperation {
    Description,
    Add,
}

impl EntryOperation {
    fn hint(self) -> &'static str {
        match self {
            EntryOperation::Description => "setting the description",
            EntryOperation::Add => "adding elements",
        }
    }
}

/// Errors from serializing or writing a [`CatalogManifest`](crate::CatalogManifest).
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Filesystem failure while writing the manifest.
    #[error("manifest io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error.
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
