//! Error types for qindex-cli

use thiserror::Error;

/// Result type alias for qindex-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in qindex-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the indexing libraries
    #[error(transparent)]
    Core(#[from] qindex_core::Error),

    /// Diagnostic output could not be written
    #[error("Failed to write diagnostic output: {0}")]
    Output(#[source] std::io::Error),

    /// The run finished but some documents could not be read
    #[error("{count} document(s) could not be read")]
    Incomplete {
        /// Number of unreadable documents
        count: usize,
    },
}
