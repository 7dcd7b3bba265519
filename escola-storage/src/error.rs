//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Entity/document mapping failure, surfaced as a save or load failure.
    #[error("codec error: {0}")]
    Codec(#[from] escola_codec::CodecError),

    /// A writer panicked while holding the store lock.
    #[error("document store lock poisoned")]
    LockPoisoned,
}
