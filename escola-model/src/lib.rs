//! Student domain model for escola.
//!
//! Defines the aggregate that the codec and storage layers operate on:
//! - [`StudentId`]: the document-store identifier (UUID v7)
//! - [`Student`]: the aggregate root, owning all nested value objects
//! - [`Course`], [`Skill`], [`Grade`], [`Contact`]: embedded value objects
//!   with no identity or lifecycle of their own
//!
//! These types carry no document-format knowledge. The wire representation
//! (field names, flattening, optional-field rules) lives entirely in
//! `escola-codec`, which is why the aggregate does not derive serde: a
//! derived impl would be a second, divergent wire format.

mod ids;
mod student;

pub use ids::StudentId;
pub use student::{Contact, Course, Grade, Skill, Student, GEOMETRY_POINT};
