//! Error types for qindex-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for qindex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while indexing a content tree.
///
/// All variants are `#[non_exhaustive]` at the enum level so new failure
/// kinds can be added without breaking callers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A document or directory could not be opened, listed, read, or decoded.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an I/O error tagged with the path being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Path associated with this error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}
