//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Query execution failed: {0}")]
    Query(String),
}

/// Key/value storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage quota exceeded: {used} of {limit} bytes")]
    QuotaExceeded { used: usize, limit: usize },
}
