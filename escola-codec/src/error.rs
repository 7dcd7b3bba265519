//! Error types for the codec layer.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while mapping between entities and documents.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A field the mapping requires is absent. `field` is the dotted
    /// document path (e.g. `contato.endereco`).
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// A field is present but holds the wrong shape of value.
    #[error("field {field}: expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// The `_id` field does not parse as a student id.
    #[error("invalid student id: {0}")]
    InvalidId(#[from] uuid::Error),

    /// The birth date field does not parse as an RFC 3339 date-time.
    #[error("invalid birth date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// `extract_id` was called on an entity that has no identity yet.
    #[error("entity has no id")]
    MissingId,

    /// Document/byte-stream conversion error from the format delegate.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
