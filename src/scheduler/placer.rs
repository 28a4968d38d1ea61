//! Randomized placement of course hour-instances.
//!
//! # Algorithm
//!
//! 1. **Course placement**: up to `max_attempts` tries. Each try records a
//!    checkpoint and places the course's N hours one by one. If any hour
//!    fails, the try is rolled back and the slot grid reshuffled.
//! 2. **Instance placement**: shuffle the eligible rooms (type-matched,
//!    large enough) and a copy of the slot grid. Take slots in that order,
//!    skipping any that fail [`Placer::can_schedule_at`] or overlap an hour
//!    of the same course already placed in this try. On a feasible slot,
//!    try each room and accept the first passing
//!    [`Placer::is_valid_placement`]. First success wins.
//!
//! There is no backtracking beyond the per-course retry.
//!
//! # Complexity
//! O(s * r * k) per instance, for s slots, r eligible rooms, and k placed
//! instances.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

use super::TimeSlotUniverse;
use crate::models::{
    Classroom, Course, CourseKind, Instructor, Schedule, ScheduledCourse, TimeSlot,
    ELECTIVE_EXCLUSIVE_DEPARTMENTS, MAX_LAB_CAPACITY,
};

/// Default attempts per course.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Study year whose courses must not overlap any elective.
const ELECTIVE_FREE_YEAR: u8 = 3;

/// Placement engine over a fixed set of instructors and rooms.
#[derive(Debug, Clone)]
pub struct Placer<'a> {
    instructors: HashMap<&'a str, &'a Instructor>,
    classrooms: &'a [Classroom],
    max_attempts: usize,
}

impl<'a> Placer<'a> {
    /// Creates a placer. Instructors are looked up by name.
    pub fn new(instructors: &'a [Instructor], classrooms: &'a [Classroom]) -> Self {
        Self {
            instructors: instructors.iter().map(|i| (i.name.as_str(), i)).collect(),
            classrooms,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the per-course attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Resolves a course's instructor.
    pub fn instructor_of(&self, course: &Course) -> Option<&'a Instructor> {
        self.instructors.get(course.instructor.as_str()).copied()
    }

    /// Rooms a course may use: type-matched with enough seats.
    pub fn eligible_rooms(&self, course: &Course) -> Vec<&'a Classroom> {
        self.classrooms
            .iter()
            .filter(|room| room.fits(course.kind, course.enrollment))
            .collect()
    }

    /// Whether `course` may be held at `slot`, ignoring rooms and clashes.
    ///
    /// Checks, in order: the Friday exam block, instructor availability,
    /// the instructor's daily theory cap (theory courses only), and, for a
    /// lab, that it starts strictly after the earliest placed hour of its
    /// theory course on the same day. With no theory hour on that day the
    /// ordering check passes.
    pub fn can_schedule_at(&self, schedule: &Schedule, course: &Course, slot: &TimeSlot) -> bool {
        if slot.hits_exam_block() {
            return false;
        }

        let Some(instructor) = self.instructor_of(course) else {
            return false;
        };
        if !instructor.is_available(slot) {
            return false;
        }

        if course.is_theory() {
            let theory_hours = schedule
                .scheduled
                .iter()
                .filter(|sc| {
                    sc.instructor == course.instructor
                        && sc.slot.day == slot.day
                        && sc.kind == CourseKind::Theory
                })
                .count();
            if theory_hours >= instructor.max_hours_per_day as usize {
                return false;
            }
        }

        if course.is_lab() {
            if let Some(theory_code) = course.theory_course_code.as_deref() {
                let earliest_that_day = schedule
                    .instances_of(theory_code)
                    .filter(|sc| sc.slot.day == slot.day)
                    .map(|sc| sc.slot.start)
                    .min();
                if let Some(theory_start) = earliest_that_day {
                    if slot.start <= theory_start {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Whether placing `course` at (`slot`, `room`) clashes with the schedule.
    ///
    /// Rejects an overlap with any instance sharing the instructor, the
    /// room, or the study year (any semester). Also rejects a 3rd-year
    /// course overlapping any elective, an elective overlapping an
    /// elective of the other exclusive department, and a lab in a room
    /// above the lab capacity ceiling.
    pub fn is_valid_placement(
        &self,
        schedule: &Schedule,
        course: &Course,
        slot: &TimeSlot,
        room: &Classroom,
    ) -> bool {
        if course.is_lab() && room.capacity > MAX_LAB_CAPACITY {
            return false;
        }

        let exclusive = course.is_elective && course.in_exclusive_department();

        !schedule
            .scheduled
            .iter()
            .filter(|existing| existing.slot.overlaps(slot))
            .any(|existing| {
                existing.instructor == course.instructor
                    || existing.classroom == room.name
                    || existing.year == course.year
                    || (course.year == ELECTIVE_FREE_YEAR && existing.is_elective)
                    || (exclusive
                        && existing.is_elective
                        && existing.department != course.department
                        && ELECTIVE_EXCLUSIVE_DEPARTMENTS.contains(&existing.department.as_str()))
            })
    }

    /// Places one hour of `course`, avoiding the slots in `same_course`.
    ///
    /// Returns the slot used, or `None` if no (slot, room) pair works.
    pub fn place_instance<R: Rng + ?Sized>(
        &self,
        schedule: &mut Schedule,
        universe: &TimeSlotUniverse,
        course: &Course,
        same_course: &[TimeSlot],
        rng: &mut R,
    ) -> Option<TimeSlot> {
        let mut rooms = self.eligible_rooms(course);
        if rooms.is_empty() {
            return None;
        }
        let slots = universe.shuffled(rng);
        rooms.shuffle(rng);

        for slot in &slots {
            if !self.can_schedule_at(schedule, course, slot) {
                continue;
            }
            if same_course.iter().any(|placed| placed.overlaps(slot)) {
                continue;
            }
            let room = rooms
                .iter()
                .find(|room| self.is_valid_placement(schedule, course, slot, room));
            if let Some(room) = room {
                schedule.add(ScheduledCourse::new(course, *slot, room));
                return Some(*slot);
            }
        }

        None
    }

    /// Places all weekly hours of `course`.
    ///
    /// On success the schedule gains exactly `hours_per_week` instances.
    /// Failed attempts leave the schedule as it was before the attempt.
    /// A course with zero hours succeeds trivially. After the last failed
    /// attempt, returns whether the course nonetheless has its full count.
    pub fn place_course<R: Rng + ?Sized>(
        &self,
        schedule: &mut Schedule,
        universe: &mut TimeSlotUniverse,
        course: &Course,
        rng: &mut R,
    ) -> bool {
        let required = course.hours_per_week as usize;
        if required == 0 {
            return true;
        }

        for attempt in 0..self.max_attempts {
            let checkpoint = schedule.checkpoint();
            let mut placed: Vec<TimeSlot> = Vec::with_capacity(required);

            while placed.len() < required {
                match self.place_instance(schedule, universe, course, &placed, rng) {
                    Some(slot) => placed.push(slot),
                    None => break,
                }
            }

            if placed.len() == required {
                return true;
            }

            debug!(
                course = %course.code,
                attempt,
                placed = placed.len(),
                required,
                "placement attempt failed"
            );
            schedule.rollback(checkpoint);
            universe.reshuffle(rng);
        }

        schedule.count_of(&course.code) == required
    }
}
