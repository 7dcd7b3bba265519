//! Persistence layer for student records.
//!
//! [`StudentRepository`] implements upsert-by-id save, lookup, listing and
//! name search over a keyed in-memory document store. All document shaping
//! goes through `escola-codec`; the store itself only ever sees opaque
//! bytes keyed by the canonical id string, so it stays schema-blind the
//! way an external document store would.

mod error;
mod repository;

pub use error::{StorageError, StorageResult};
pub use repository::StudentRepository;
