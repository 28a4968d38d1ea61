//! Weekly course timetabling for the U-Engine ecosystem.
//!
//! Assigns every weekly hour of every course to a (day, period, room)
//! slot, honouring instructor availability and daily load, room type and
//! capacity, and non-overlap of instructors, rooms, and student cohorts.
//! The engine is best-effort: it returns a schedule that may be short of
//! hours or carry residual conflicts, and reports both.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Instructor`, `Classroom`,
//!   `TimeSlot`, `ScheduledCourse`, `Schedule`
//! - **`dispatching`**: Course orderings that seed construction attempts
//! - **`scheduler`**: Slot universe, placer, conflict detection, repair,
//!   the `Timetabler` driver, and coverage KPIs
//! - **`validation`**: Input integrity checks (duplicates, references, room fit)
//! - **`error`**: Parse errors for clock times, ranges, and weekdays
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Classroom, Course, Instructor};
//! use u_timetable::scheduler::{ScheduleKpi, TimetableRequest, Timetabler};
//! use u_timetable::validation::validate_input;
//!
//! let request = TimetableRequest::new(
//!     vec![Instructor::new("Dr. Smith").available_all_week("08:00-17:00".parse().unwrap())],
//!     vec![Classroom::lecture("A101", 50), Classroom::lab("B201", 40)],
//!     vec![
//!         Course::theory("CENG101", "Dr. Smith").with_hours(3).with_enrollment(45),
//!         Course::lab("CENG101L", "Dr. Smith", "CENG101").with_hours(2),
//!     ],
//! );
//! validate_input(&request).unwrap();
//!
//! let schedule = Timetabler::seeded(7).generate(&request);
//! let kpi = ScheduleKpi::calculate(&schedule, &request.courses);
//! assert_eq!(kpi.required_instances, 5);
//! ```
//!
//! # Logging
//!
//! Progress is reported through `tracing` events. The crate never installs
//! a subscriber.

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
