//! Error types for civic-render.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for civic-render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing pages.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from civic-core (loading, parsing, schema compilation).
    #[error("Core error: {0}")]
    Core(#[from] civic_core::Error),

    /// I/O error with the path involved.
    #[error("I/O error at {path}: {source}")]
    IoWithPath {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The host could not write to the clipboard.
    #[error("Clipboard error: {message}")]
    Clipboard {
        /// Reason reported by the host.
        message: String,
    },

    /// A document failed schema validation in strict mode.
    #[error("Validation failed with {count} error(s)")]
    Validation {
        /// Number of schema errors.
        count: usize,
    },
}

impl Error {
    /// Create an I/O error carrying the path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a clipboard error.
    pub fn clipboard<S: Into<String>>(message: S) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(count: usize) -> Self {
        Self::Validation { count }
    }
}
