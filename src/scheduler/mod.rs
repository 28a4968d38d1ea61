//! Placement-and-repair timetabling engine.
//!
//! # Pipeline
//!
//! | Stage | Type |
//! |-------|------|
//! | Slot grid | [`TimeSlotUniverse`] |
//! | Hour/course placement | [`Placer`] |
//! | Conflict detection | [`find_conflicts`], [`validate_schedule`] |
//! | Repair (iterative, aggressive) | [`ConflictResolver`] |
//! | Driver | [`Timetabler`] |
//!
//! `Timetabler` is the entry point. The lower stages are public so callers
//! can compose their own loop or test a single step.
//!
//! # KPI
//!
//! [`ScheduleKpi`] reports how much of the catalog a schedule covers and
//! whether it is complete (every hour placed, no violations).

mod config;
mod conflicts;
mod engine;
mod kpi;
mod placer;
mod repair;
mod universe;

pub use config::SchedulerConfig;
pub use conflicts::{find_conflicts, validate_schedule, Conflict, ConflictKind};
pub use engine::{TimetableRequest, Timetabler};
pub use kpi::{CourseCoverage, ScheduleKpi};
pub use placer::{Placer, DEFAULT_MAX_ATTEMPTS};
pub use repair::ConflictResolver;
pub use universe::{TimeSlotUniverse, DAY_START, PERIODS_PER_DAY, PERIOD_MINUTES};
