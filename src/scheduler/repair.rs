//! Two-tier conflict repair.
//!
//! # Iterative tier
//! Each pass detects conflicts and, for the first `batch` records, pulls
//! every instance of the record's `course_code` course and re-places the
//! whole course. If re-placement fails the pulled instances go back
//! unchanged, so a pass never loses hours.
//!
//! # Aggressive tier
//! Each pass collects the distinct courses on either side of any conflict,
//! keeps the first `batch`, pulls all their instances, and re-places each.
//! Nothing is restored: a course that fails to re-place keeps fewer hours
//! than it needs. This tier runs only after the iterative tier gave up.
//!
//! Both tiers stop early on a clean pass and are bounded by their pass
//! count.

use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

use super::conflicts::find_conflicts;
use super::{Placer, TimeSlotUniverse};
use crate::models::{Course, Schedule};

/// Re-places conflicting courses.
#[derive(Debug, Clone)]
pub struct ConflictResolver<'r, 'a> {
    placer: &'r Placer<'a>,
    courses: HashMap<&'a str, &'a Course>,
}

impl<'r, 'a> ConflictResolver<'r, 'a> {
    /// Creates a resolver over the course catalog.
    pub fn new(placer: &'r Placer<'a>, courses: &'a [Course]) -> Self {
        Self {
            placer,
            courses: courses.iter().map(|c| (c.code.as_str(), c)).collect(),
        }
    }

    /// Runs the iterative tier. Returns the number of passes that found conflicts.
    pub fn resolve_iterative<R: Rng + ?Sized>(
        &self,
        schedule: &mut Schedule,
        universe: &mut TimeSlotUniverse,
        rng: &mut R,
        passes: usize,
        batch: usize,
    ) -> usize {
        for pass in 0..passes {
            let conflicts = find_conflicts(schedule);
            if conflicts.is_empty() {
                return pass;
            }
            debug!(pass, conflicts = conflicts.len(), "iterative repair pass");

            for conflict in conflicts.iter().take(batch) {
                let Some(&course) = self.courses.get(conflict.course_code.as_str()) else {
                    continue;
                };
                let removed = schedule.remove_course(&course.code);
                if removed.is_empty() {
                    continue;
                }
                if !self.placer.place_course(schedule, universe, course, rng) {
                    schedule.restore(removed);
                }
            }
        }
        passes
    }

    /// Runs the aggressive tier. Returns the number of passes that found conflicts.
    pub fn resolve_aggressive<R: Rng + ?Sized>(
        &self,
        schedule: &mut Schedule,
        universe: &mut TimeSlotUniverse,
        rng: &mut R,
        passes: usize,
        batch: usize,
    ) -> usize {
        for pass in 0..passes {
            let conflicts = find_conflicts(schedule);
            if conflicts.is_empty() {
                return pass;
            }

            let mut codes: Vec<&str> = Vec::new();
            for conflict in &conflicts {
                for code in [conflict.course_code.as_str(), conflict.other_course_code.as_str()] {
                    if !codes.contains(&code) {
                        codes.push(code);
                    }
                }
            }
            codes.truncate(batch);
            debug!(pass, conflicts = conflicts.len(), courses = ?codes, "aggressive repair pass");

            let mut pulled: Vec<&'a Course> = Vec::with_capacity(codes.len());
            for code in codes {
                if let Some(&course) = self.courses.get(code) {
                    if !schedule.remove_course(code).is_empty() {
                        pulled.push(course);
                    }
                }
            }

            for course in pulled {
                if !self.placer.place_course(schedule, universe, course, rng) {
                    debug!(course = %course.code, placed = schedule.count_of(&course.code), "course left short");
                }
            }
        }
        passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, ClockTime, Instructor, ScheduledCourse, TimeSlot, Weekday};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn slot(day: Weekday, hour: u16) -> TimeSlot {
        TimeSlot::new(day, ClockTime::from_hm(hour, 0), ClockTime::from_hm(hour, 50))
    }

    fn all_week(name: &str) -> Instructor {
        Instructor::new(name).available_all_week("08:00-17:00".parse().unwrap())
    }

    /// Two courses of one instructor forced into the same Monday slot.
    fn clashing(courses: &[Course], rooms: &[Classroom]) -> Schedule {
        let mut s = Schedule::new();
        s.add(ScheduledCourse::new(&courses[0], slot(Weekday::Monday, 8), &rooms[0]));
        s.add(ScheduledCourse::new(&courses[1], slot(Weekday::Monday, 8), &rooms[1]));
        s
    }

    #[test]
    fn test_iterative_resolves_movable_clash() {
        let instructors = vec![all_week("I")];
        let rooms = vec![Classroom::lecture("A101", 50), Classroom::lecture("A102", 50)];
        let courses = vec![
            Course::theory("A", "I").with_cohort(1, 1),
            Course::theory("B", "I").with_cohort(2, 3),
        ];
        let placer = Placer::new(&instructors, &rooms);
        let resolver = ConflictResolver::new(&placer, &courses);

        let mut s = clashing(&courses, &rooms);
        assert!(!find_conflicts(&s).is_empty());

        let mut universe = TimeSlotUniverse::standard();
        let mut rng = StdRng::seed_from_u64(9);
        resolver.resolve_iterative(&mut s, &mut universe, &mut rng, 10, 5);

        assert!(find_conflicts(&s).is_empty());
        assert_eq!(s.count_of("A"), 1);
        assert_eq!(s.count_of("B"), 1);
    }

    #[test]
    fn test_iterative_restores_unplaceable_course() {
        // Only one period of availability: neither course can move.
        let instructors = vec![Instructor::new("I")
            .with_availability(Weekday::Monday, "08:00-08:50".parse().unwrap())];
        let rooms = vec![Classroom::lecture("A101", 50), Classroom::lecture("A102", 50)];
        let courses = vec![
            Course::theory("A", "I").with_cohort(1, 1),
            Course::theory("B", "I").with_cohort(2, 3),
        ];
        let placer = Placer::new(&instructors, &rooms).with_max_attempts(2);
        let resolver = ConflictResolver::new(&placer, &courses);

        let mut s = clashing(&courses, &rooms);
        let mut universe = TimeSlotUniverse::standard();
        let mut rng = StdRng::seed_from_u64(1);
        let passes = resolver.resolve_iterative(&mut s, &mut universe, &mut rng, 3, 5);

        assert_eq!(passes, 3);
        assert_eq!(s.count_of("A"), 1);
        assert_eq!(s.count_of("B"), 1);
        assert_eq!(find_conflicts(&s).len(), 1);
    }

    #[test]
    fn test_iterative_clean_schedule_is_noop() {
        let instructors = vec![all_week("I")];
        let rooms = vec![Classroom::lecture("A101", 50)];
        let courses = vec![Course::theory("A", "I")];
        let placer = Placer::new(&instructors, &rooms);
        let resolver = ConflictResolver::new(&placer, &courses);

        let mut s = Schedule::new();
        s.add(ScheduledCourse::new(&courses[0], slot(Weekday::Monday, 8), &rooms[0]));
        let before = s.scheduled.clone();

        let mut universe = TimeSlotUniverse::standard();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(resolver.resolve_iterative(&mut s, &mut universe, &mut rng, 10, 5), 0);
        assert_eq!(s.scheduled, before);
    }

    #[test]
    fn test_aggressive_drops_unplaceable_courses() {
        let instructors = vec![Instructor::new("I")
            .with_availability(Weekday::Monday, "08:00-08:50".parse().unwrap())];
        let rooms = vec![Classroom::lecture("A101", 50), Classroom::lecture("A102", 50)];
        let courses = vec![
            Course::theory("A", "I").with_cohort(1, 1),
            Course::theory("B", "I").with_cohort(2, 3),
        ];
        let placer = Placer::new(&instructors, &rooms).with_max_attempts(2);
        let resolver = ConflictResolver::new(&placer, &courses);

        let mut s = clashing(&courses, &rooms);
        let mut universe = TimeSlotUniverse::standard();
        let mut rng = StdRng::seed_from_u64(4);
        resolver.resolve_aggressive(&mut s, &mut universe, &mut rng, 20, 3);

        // Both pulled; only one fits back into the single period.
        assert!(find_conflicts(&s).is_empty());
        assert_eq!(s.count_of("A") + s.count_of("B"), 1);
    }

    #[test]
    fn test_aggressive_respects_batch() {
        let instructors = vec![all_week("I")];
        let rooms = vec![
            Classroom::lecture("A101", 50),
            Classroom::lecture("A102", 50),
            Classroom::lecture("A103", 50),
        ];
        let courses = vec![
            Course::theory("A", "I").with_cohort(1, 1),
            Course::theory("B", "I").with_cohort(2, 3),
            Course::theory("C", "I").with_cohort(3, 5),
        ];
        let placer = Placer::new(&instructors, &rooms);
        let resolver = ConflictResolver::new(&placer, &courses);

        let mut s = Schedule::new();
        for (course, room) in courses.iter().zip(&rooms) {
            s.add(ScheduledCourse::new(course, slot(Weekday::Monday, 8), room));
        }

        let mut universe = TimeSlotUniverse::standard();
        let mut rng = StdRng::seed_from_u64(2);
        resolver.resolve_aggressive(&mut s, &mut universe, &mut rng, 1, 1);

        // One pass, one course pulled and re-placed elsewhere.
        assert_eq!(s.len(), 3);
        assert_eq!(s.count_of("A"), 1);
        assert!(s
            .instances_of("A")
            .all(|sc| sc.slot != slot(Weekday::Monday, 8)));
    }
}
