//! Instructor model.
//!
//! An instructor declares, per weekday, the ranges in which they can teach,
//! and a cap on theory hours per day. Identity is the name: two values with
//! the same name are the same instructor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use super::{TimeRange, TimeSlot, Weekday, EXAM_BLOCK};

/// Default daily theory-hour cap.
pub const DEFAULT_MAX_HOURS_PER_DAY: u32 = 4;

fn default_max_hours_per_day() -> u32 {
    DEFAULT_MAX_HOURS_PER_DAY
}

/// An instructor with weekly availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique name (identity key).
    pub name: String,
    /// Permitted ranges per weekday, in declaration order.
    #[serde(default)]
    pub availability: BTreeMap<Weekday, Vec<TimeRange>>,
    /// Maximum theory hours per day.
    #[serde(default = "default_max_hours_per_day")]
    pub max_hours_per_day: u32,
}

impl Instructor {
    /// Creates an instructor with no availability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            availability: BTreeMap::new(),
            max_hours_per_day: DEFAULT_MAX_HOURS_PER_DAY,
        }
    }

    /// Adds an availability range on a weekday.
    pub fn with_availability(mut self, day: Weekday, range: TimeRange) -> Self {
        self.availability.entry(day).or_default().push(range);
        self
    }

    /// Makes the instructor available across the whole teaching week.
    ///
    /// On Friday the range is cut around the exam block, keeping only the
    /// non-empty parts before and after it.
    pub fn available_all_week(mut self, range: TimeRange) -> Self {
        for day in Weekday::ALL {
            let ranges = self.availability.entry(day).or_default();
            if day == Weekday::Friday && EXAM_BLOCK.intersects(range.start, range.end) {
                if range.start < EXAM_BLOCK.start {
                    ranges.push(TimeRange::new(range.start, EXAM_BLOCK.start));
                }
                if EXAM_BLOCK.end < range.end {
                    ranges.push(TimeRange::new(EXAM_BLOCK.end, range.end));
                }
            } else {
                ranges.push(range);
            }
        }
        self
    }

    /// Sets the daily theory-hour cap.
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = hours;
        self
    }

    /// Whether the slot falls entirely inside one declared range of its day.
    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        self.availability
            .get(&slot.day)
            .is_some_and(|ranges| ranges.iter().any(|r| r.covers(slot.start, slot.end)))
    }
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Instructor {}

impl Hash for Instructor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
