//! The generic document tree and its byte-stream delegate.

use crate::CodecResult;

/// A schema-less nested key/value structure, the storage/wire
/// representation of every persisted record.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Lossless document/byte-stream conversion.
///
/// The entity codec does not pick the on-the-wire rendering itself; a
/// format is injected at construction time so the same field mapping can
/// ride on any self-describing encoding the store speaks.
pub trait DocumentFormat: Send + Sync {
    /// Renders a document to its byte form.
    fn to_bytes(&self, document: &Document) -> CodecResult<Vec<u8>>;

    /// Reads a document back from its byte form.
    fn from_bytes(&self, bytes: &[u8]) -> CodecResult<Document>;
}

/// The stock [`DocumentFormat`]: documents as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl DocumentFormat for JsonFormat {
    fn to_bytes(&self, document: &Document) -> CodecResult<Vec<u8>> {
        Ok(serde_json::to_vec(document)?)
    }

    fn from_bytes(&self, bytes: &[u8]) -> CodecResult<Document> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
