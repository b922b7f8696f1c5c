//! Error types for civic-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for civic-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in civic-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file or directory
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data could not be parsed into the expected shape
    #[error("Parse error: {message}")]
    Parse {
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// The embedded JSON Schema could not be compiled
    #[error("Invalid schema: {message}")]
    Schema {
        /// Compiler message
        message: String,
    },

    /// A requested record does not exist
    #[error("Not found: {what}")]
    NotFound {
        /// Description of the missing record
        what: String,
    },
}

impl Error {
    /// Creates an I/O error annotated with the path being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new schema compilation error.
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Error::Schema {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Error::NotFound { what: what.into() }
    }
}
