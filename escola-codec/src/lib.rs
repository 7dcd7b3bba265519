//! Object-document codec for student records.
//!
//! Translates between the in-memory [`Student`](escola_model::Student)
//! aggregate and the schema-less document shape the store persists:
//! - [`StudentCodec`]: encode/decode plus the identity hooks a store
//!   driver needs for upsert-by-id (`has_id`, `generate_id_if_absent`,
//!   `extract_id`)
//! - [`Document`]: the generic nested key/value tree
//! - [`DocumentFormat`]: the injected document/byte-stream delegate,
//!   with [`JsonFormat`] as the stock implementation
//!
//! The document field names are the store's legacy wire format and are
//! exact; [`StudentCodec`] documents the full field list. Decoding is
//! schema-validating: a missing required field or a mistyped value is a
//! tagged [`CodecError`], never a cast panic.

mod document;
mod error;
mod student_codec;

pub use document::{Document, DocumentFormat, JsonFormat};
pub use error::{CodecError, CodecResult};
pub use student_codec::StudentCodec;
