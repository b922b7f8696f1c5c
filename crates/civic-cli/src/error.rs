//! Error types for civic-cli.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for civic-cli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in civic-cli.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from civic-core.
    #[error("Core error: {0}")]
    Core(#[from] civic_core::Error),

    /// Error from civic-render.
    #[error("Render error: {0}")]
    Render(#[from] civic_render::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document failed schema validation.
    #[error("{} has {count} schema error(s)", path.display())]
    Invalid {
        /// Document that was validated.
        path: PathBuf,
        /// Number of schema errors.
        count: usize,
    },
}

impl Error {
    /// Create a schema validation failure for `path`.
    pub fn invalid(path: impl AsRef<Path>, count: usize) -> Self {
        Self::Invalid {
            path: path.as_ref().to_path_buf(),
            count,
        }
    }
}
