//! Event log error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the persisted event log.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Filesystem access failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The slot content could not be (de)serialized.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}

/// Errors from an analytics sink. Never surfaced to callers of `record`.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The sink is not reachable.
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    #[error("Sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}
