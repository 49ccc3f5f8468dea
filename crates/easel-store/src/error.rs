//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the favorites store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the storage location.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize the value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to read from the underlying storage.
    #[error("Store read failed: {0}")]
    ReadError(String),

    /// Failed to write to the underlying storage.
    #[error("Store write failed: {0}")]
    WriteError(String),
}
