//! Timetabling domain models.
//!
//! Provides the core data types for a weekly course timetable: the
//! catalog inputs (courses, instructors, classrooms) and the solution
//! (scheduled hour-instances collected in a schedule).
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | Course | Task (N unit activities) |
//! | ScheduledCourse | Assignment |
//! | Instructor / Classroom | Resource |
//! | TimeSlot | Time window |
//!
//! Instructors and classrooms are identified by name; a course refers to
//! its instructor by that name.

mod classroom;
mod course;
mod instructor;
mod schedule;
mod time;

pub use classroom::{Classroom, MAX_LAB_CAPACITY};
pub use course::{Course, CourseKind, ELECTIVE_EXCLUSIVE_DEPARTMENTS};
pub use instructor::{Instructor, DEFAULT_MAX_HOURS_PER_DAY};
pub use schedule::{Checkpoint, Schedule, ScheduleRow, ScheduledCourse};
pub use time::{ClockTime, TimeRange, TimeSlot, Weekday, EXAM_BLOCK};
