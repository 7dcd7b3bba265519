use crate::StudentId;
use chrono::{DateTime, Utc};

/// Geometry discriminator the store's geospatial indexing convention expects
/// on contact coordinates.
pub const GEOMETRY_POINT: &str = "Point";

/// A student record, the aggregate root persisted as one whole document.
///
/// `id` is absent until the first save. `skills` and `grades` are tri-state:
/// `None` means the list was never recorded, `Some(vec![])` means it was
/// recorded empty. The codec maps the two states to different documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: Option<StudentId>,
    pub name: String,
    pub birth_date: DateTime<Utc>,
    pub course: Option<Course>,
    pub skills: Option<Vec<Skill>>,
    pub grades: Option<Vec<Grade>>,
    pub contact: Option<Contact>,
}

impl Student {
    /// Creates a student with no id and no nested objects recorded.
    #[must_use]
    pub fn new(name: impl Into<String>, birth_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            course: None,
            skills: None,
            grades: None,
            contact: None,
        }
    }
}

/// The course a student is enrolled in. Embedded value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
}

impl Course {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named skill with a proficiency label. Embedded value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: String,
}

impl Skill {
    #[must_use]
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }
}

/// A single numeric grade. Stored flattened to a raw number, the wrapper
/// exists only in memory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub value: f64,
}

impl Grade {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// Contact details with a geolocated address. Embedded value object.
///
/// `coordinates` is ordered longitude, latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub address: String,
    pub coordinates: [f64; 2],
    /// Geometry shape discriminator, [`GEOMETRY_POINT`] unless a caller
    /// overrides it.
    pub geometry: String,
}

impl Contact {
    #[must_use]
    pub fn new(address: impl Into<String>, coordinates: [f64; 2]) -> Self {
        Self {
            address: address.into(),
            coordinates,
            geometry: GEOMETRY_POINT.to_string(),
        }
    }
}
