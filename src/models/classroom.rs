//! Classroom model.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::CourseKind;

/// Capacity ceiling for lab rooms.
pub const MAX_LAB_CAPACITY: u32 = 40;

/// A lecture room or lab. Identity is the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique name (identity key).
    pub name: String,
    /// Seats.
    pub capacity: u32,
    /// Whether this is a lab room.
    #[serde(default)]
    pub is_lab: bool,
}

impl Classroom {
    /// Creates a lecture room.
    pub fn lecture(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            is_lab: false,
        }
    }

    /// Creates a lab room.
    pub fn lab(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            is_lab: true,
        }
    }

    /// Whether the room type matches a course kind (lab ↔ lab room).
    #[inline]
    pub fn suits(&self, kind: CourseKind) -> bool {
        self.is_lab == (kind == CourseKind::Lab)
    }

    /// Whether the room is type-matched and large enough.
    pub fn fits(&self, kind: CourseKind, enrollment: u32) -> bool {
        self.suits(kind) && self.capacity >= enrollment
    }
}

impl PartialEq for Classroom {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Classroom {}

impl Hash for Classroom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
