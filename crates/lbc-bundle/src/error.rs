//! Error types for bundle loading and checking.

use std::path::PathBuf;

/// Errors from loading locale documents and walking bundle directories.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// The document does not exist or could not be opened.
    #[error("locale file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document's content is not valid JSON.
    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O failure (directory listing, read errors).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for bundle operations.
pub type BundleResult<T> = Result<T, BundleError>;
