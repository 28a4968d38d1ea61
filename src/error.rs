//! Error types.
//!
//! The scheduling engine itself never fails on well-formed input; these
//! errors come from turning textual input (clock times, availability
//! ranges, weekday names) into typed models.

use thiserror::Error;

/// Failure to parse a textual time or weekday value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a valid `HH:MM` 24-hour clock time.
    #[error("invalid clock time '{0}', expected HH:MM (24-hour)")]
    InvalidClockTime(String),
    /// Not a valid `HH:MM-HH:MM` range.
    #[error("invalid time range '{0}', expected HH:MM-HH:MM (24-hour)")]
    InvalidTimeRange(String),
    /// A range whose end is not after its start.
    #[error("time range '{0}' must end after it starts")]
    EmptyTimeRange(String),
    /// A weekday outside Monday..Friday.
    #[error("unknown weekday '{0}', expected one of MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY")]
    UnknownWeekday(String),
}
