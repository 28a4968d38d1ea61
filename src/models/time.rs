//! Weekly time model.
//!
//! Times are minute-precision clock times within a teaching day. A
//! [`TimeSlot`] is a half-open interval `[start, end)` on one weekday;
//! a [`TimeRange`] is a day-less interval used for instructor availability.
//!
//! # Overlap
//! Two slots overlap iff they share a weekday and their intervals
//! intersect. Touching endpoints (`08:50` / `08:50`) do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Protected Friday exam block `[13:20, 15:10)`. No class may touch it.
pub const EXAM_BLOCK: TimeRange = TimeRange {
    start: ClockTime::from_hm(13, 20),
    end: ClockTime::from_hm(15, 10),
};

/// Teaching weekday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    #[serde(rename = "MONDAY", alias = "Monday", alias = "monday")]
    Monday,
    #[serde(rename = "TUESDAY", alias = "Tuesday", alias = "tuesday")]
    Tuesday,
    #[serde(rename = "WEDNESDAY", alias = "Wednesday", alias = "wednesday")]
    Wednesday,
    #[serde(rename = "THURSDAY", alias = "Thursday", alias = "thursday")]
    Thursday,
    #[serde(rename = "FRIDAY", alias = "Friday", alias = "friday")]
    Friday,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Display name (`"Monday"`).
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownWeekday(s.to_string()))
    }
}

/// A clock time, stored as minutes since midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Builds a clock time from hours and minutes.
    ///
    /// Callers are expected to pass `hour < 24` and `minute < 60`.
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component.
    #[inline]
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component.
    #[inline]
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidClockTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        if hour >= 24 || minute >= 60 {
            return Err(invalid());
        }
        Ok(Self::from_hm(hour, minute))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// A day-less interval `[start, end)`, e.g. one availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRange {
    /// Inclusive start.
    pub start: ClockTime,
    /// Exclusive end.
    pub end: ClockTime,
}

impl TimeRange {
    /// Creates a range. Use [`FromStr`] for validated construction.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether `[start, end)` lies entirely inside this range.
    #[inline]
    pub fn covers(&self, start: ClockTime, end: ClockTime) -> bool {
        self.start <= start && end <= self.end
    }

    /// Whether `[start, end)` intersects this range.
    #[inline]
    pub fn intersects(&self, start: ClockTime, end: ClockTime) -> bool {
        start < self.end && self.start < end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidTimeRange(s.to_string()))?;
        let start: ClockTime = a
            .parse()
            .map_err(|_| ParseError::InvalidTimeRange(s.to_string()))?;
        let end: ClockTime = b
            .parse()
            .map_err(|_| ParseError::InvalidTimeRange(s.to_string()))?;
        if start >= end {
            return Err(ParseError::EmptyTimeRange(s.to_string()));
        }
        Ok(Self { start, end })
    }
}

impl TryFrom<String> for TimeRange {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeRange> for String {
    fn from(value: TimeRange) -> Self {
        value.to_string()
    }
}

/// A placeable weekly slot: weekday plus `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Weekday.
    pub day: Weekday,
    /// Inclusive start.
    pub start: ClockTime,
    /// Exclusive end.
    pub end: ClockTime,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Self {
        Self { day, start, end }
    }

    /// Whether two slots overlap (same day, intersecting intervals).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// Whether this slot is on Friday and touches the exam block.
    #[inline]
    pub fn hits_exam_block(&self) -> bool {
        self.day == Weekday::Friday && EXAM_BLOCK.intersects(self.start, self.end)
    }

    /// The slot's interval without its day.
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: Weekday, start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(day, start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn test_clock_time_parse_and_display() {
        let t: ClockTime = "08:05".parse().unwrap();
        assert_eq!(t.minutes(), 485);
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "08:05");
    }

    #[test]
    fn test_clock_time_rejects_garbage() {
        assert!("8:00".parse::<ClockTime>().is_err());
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_time_range_parse() {
        let r: TimeRange = "08:00-12:00".parse().unwrap();
        assert_eq!(r.duration_minutes(), 240);
        assert_eq!(r.to_string(), "08:00-12:00");

        assert_eq!(
            "12:00-08:00".parse::<TimeRange>(),
            Err(ParseError::EmptyTimeRange("12:00-08:00".into()))
        );
        assert!(matches!(
            "08:00".parse::<TimeRange>(),
            Err(ParseError::InvalidTimeRange(_))
        ));
    }

    #[test]
    fn test_slot_overlap_half_open() {
        let a = slot(Weekday::Monday, "08:00", "08:50");
        let b = slot(Weekday::Monday, "08:50", "09:40");
        let c = slot(Weekday::Monday, "08:30", "09:20");
        let d = slot(Weekday::Tuesday, "08:00", "08:50");

        assert!(!a.overlaps(&b)); // touching
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
        assert!(!a.overlaps(&d)); // other day
    }

    #[test]
    fn test_exam_block_detection() {
        assert!(slot(Weekday::Friday, "13:00", "13:50").hits_exam_block());
        assert!(slot(Weekday::Friday, "15:00", "15:50").hits_exam_block());
        assert!(!slot(Weekday::Friday, "15:10", "16:00").hits_exam_block());
        assert!(!slot(Weekday::Friday, "12:00", "12:50").hits_exam_block());
        assert!(!slot(Weekday::Thursday, "14:00", "14:50").hits_exam_block());
    }

    #[test]
    fn test_range_covers() {
        let r: TimeRange = "08:00-12:00".parse().unwrap();
        let s = slot(Weekday::Monday, "11:00", "11:50");
        let t = slot(Weekday::Monday, "11:30", "12:20");
        assert!(r.covers(s.start, s.end));
        assert!(!r.covers(t.start, t.end));
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("FRIDAY".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert!("Saturday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_serde_string_forms() {
        let r: TimeRange = serde_json::from_str("\"09:00-17:00\"").unwrap();
        assert_eq!(r.start, ClockTime::from_hm(9, 0));
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"09:00-17:00\"");

        let d: Weekday = serde_json::from_str("\"Tuesday\"").unwrap();
        assert_eq!(d, Weekday::Tuesday);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"TUESDAY\"");
    }
}
