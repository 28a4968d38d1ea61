//! Schedule (solution) model.
//!
//! A schedule is an ordered list of placed hour-instances plus the
//! violation messages found by the last conflict check. The engine
//! mutates it in place during one run and then hands it to the caller.
//!
//! # Rollback
//! Construction attempts are backed out with [`Schedule::checkpoint`] /
//! [`Schedule::rollback`]: a checkpoint records the instance count and the
//! removal counter, and rolling back truncates to that count. It is only
//! valid while the schedule has been append-only since the checkpoint.

use serde::{Deserialize, Serialize};

use super::{Classroom, Course, CourseKind, TimeSlot, Weekday};

/// One placed weekly occurrence of a course.
///
/// Course attributes needed by conflict checks are denormalized so the
/// schedule can be inspected without the course catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// Course code.
    pub course_code: String,
    /// Course name.
    pub course_name: String,
    /// Instructor name.
    pub instructor: String,
    /// Theory or lab.
    pub kind: CourseKind,
    /// Department of the course.
    pub department: String,
    /// Elective flag of the course.
    pub is_elective: bool,
    /// Classroom name.
    pub classroom: String,
    /// Placed slot.
    pub slot: TimeSlot,
    /// Cohort year.
    pub year: u8,
    /// Cohort semester.
    pub semester: u8,
}

impl ScheduledCourse {
    /// Places `course` at `slot` in `classroom`.
    pub fn new(course: &Course, slot: TimeSlot, classroom: &Classroom) -> Self {
        Self {
            course_code: course.code.clone(),
            course_name: course.name.clone(),
            instructor: course.instructor.clone(),
            kind: course.kind,
            department: course.department.clone(),
            is_elective: course.is_elective,
            classroom: classroom.name.clone(),
            slot,
            year: course.year,
            semester: course.semester,
        }
    }

    /// Whether this instance's slot overlaps another's.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.slot.overlaps(&other.slot)
    }
}

/// A flat export record, one per placed instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Course code.
    pub course_code: String,
    /// Course name.
    pub course_name: String,
    /// Cohort year.
    pub year: u8,
    /// Cohort semester.
    pub semester: u8,
    /// Weekday name.
    pub day: String,
    /// `HH:MM`.
    pub start_time: String,
    /// `HH:MM`.
    pub end_time: String,
    /// Classroom name.
    pub classroom: String,
    /// Instructor name.
    pub instructor: String,
}

impl From<&ScheduledCourse> for ScheduleRow {
    fn from(sc: &ScheduledCourse) -> Self {
        Self {
            course_code: sc.course_code.clone(),
            course_name: sc.course_name.clone(),
            year: sc.year,
            semester: sc.semester,
            day: sc.slot.day.to_string(),
            start_time: sc.slot.start.to_string(),
            end_time: sc.slot.end.to_string(),
            classroom: sc.classroom.clone(),
            instructor: sc.instructor.clone(),
        }
    }
}

/// Restore point for an append-only stretch of placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
    removals: u64,
}

/// A weekly timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Placed instances, in placement order.
    pub scheduled: Vec<ScheduledCourse>,
    /// Violation messages from the final conflict check.
    pub violations: Vec<String>,
    #[serde(skip)]
    removals: u64,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instance.
    pub fn add(&mut self, instance: ScheduledCourse) {
        self.scheduled.push(instance);
    }

    /// Removes every instance of a course, returning them in order.
    pub fn remove_course(&mut self, course_code: &str) -> Vec<ScheduledCourse> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.scheduled)
            .into_iter()
            .partition(|sc| sc.course_code == course_code);
        self.scheduled = kept;
        if !removed.is_empty() {
            self.removals += 1;
        }
        removed
    }

    /// Re-appends previously removed instances.
    pub fn restore(&mut self, instances: Vec<ScheduledCourse>) {
        self.scheduled.extend(instances);
    }

    /// Records a restore point.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            len: self.scheduled.len(),
            removals: self.removals,
        }
    }

    /// Discards everything appended since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        debug_assert_eq!(
            self.removals, checkpoint.removals,
            "rollback across a removal; checkpoint is stale"
        );
        debug_assert!(self.scheduled.len() >= checkpoint.len);
        self.scheduled.truncate(checkpoint.len);
    }

    /// Whether no violations are recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of placed instances.
    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    /// Whether nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }

    /// Instances of one course.
    pub fn instances_of<'a>(
        &'a self,
        course_code: &'a str,
    ) -> impl Iterator<Item = &'a ScheduledCourse> + 'a {
        self.scheduled
            .iter()
            .filter(move |sc| sc.course_code == course_code)
    }

    /// Number of placed instances of one course.
    pub fn count_of(&self, course_code: &str) -> usize {
        self.instances_of(course_code).count()
    }

    /// Instances taught by an instructor.
    pub fn for_instructor(&self, instructor: &str) -> Vec<&ScheduledCourse> {
        self.scheduled
            .iter()
            .filter(|sc| sc.instructor == instructor)
            .collect()
    }

    /// Instances held in a classroom.
    pub fn for_classroom(&self, classroom: &str) -> Vec<&ScheduledCourse> {
        self.scheduled
            .iter()
            .filter(|sc| sc.classroom == classroom)
            .collect()
    }

    /// Instances attended by a (year, semester) cohort.
    pub fn for_cohort(&self, year: u8, semester: u8) -> Vec<&ScheduledCourse> {
        self.scheduled
            .iter()
            .filter(|sc| sc.year == year && sc.semester == semester)
            .collect()
    }

    /// Instances on a weekday.
    pub fn for_day(&self, day: Weekday) -> Vec<&ScheduledCourse> {
        self.scheduled.iter().filter(|sc| sc.slot.day == day).collect()
    }

    /// Flat export records in placement order.
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.scheduled.iter().map(ScheduleRow::from).collect()
    }
}
