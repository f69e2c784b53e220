//! Per-document load failures

use std::path::PathBuf;
use thiserror::Error;

/// Why a single result document could not be used.
///
/// None of these abort a batch; the loader logs them and moves on.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a JSON object", .0.display())]
    NotAnObject(PathBuf),

    #[error("{} holds an empty document", .0.display())]
    Empty(PathBuf),
}

impl DocumentError {
    /// True when the file simply does not exist
    pub fn is_missing(&self) -> bool {
        matches!(self, DocumentError::NotFound(_))
    }
}
