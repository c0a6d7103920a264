//! Error types for settings file operations
//!
//! The migration and coercion engine never fails; these errors only come
//! from reading or writing documents on disk.

use std::path::PathBuf;
use thiserror::Error;

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file could not be read or written
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for settings file operations
pub type Result<T> = std::result::Result<T, SettingsError>;

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error means the file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
