//! Conflict detection over a built schedule.
//!
//! Groups placed instances by instructor, by classroom, and by
//! (year, semester) cohort, and reports every overlapping pair inside a
//! group. Groups are visited in key order, so detection on an unchanged
//! schedule always yields the same list.
//!
//! # Complexity
//! O(k²) per group of k instances. Weekly course counts are small.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Schedule, ScheduledCourse};

/// What two overlapping instances share.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Same instructor.
    Instructor(String),
    /// Same classroom.
    Classroom(String),
    /// Same (year, semester) cohort.
    Cohort {
        /// Study year.
        year: u8,
        /// Semester.
        semester: u8,
    },
}

/// An overlapping pair of instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conflict {
    /// Shared resource or cohort.
    pub kind: ConflictKind,
    /// Course of the earlier-placed instance.
    pub course_code: String,
    /// Course of the later-placed instance.
    pub other_course_code: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.course_code, &self.other_course_code);
        match &self.kind {
            ConflictKind::Instructor(name) => {
                write!(f, "Instructor {name} has overlapping courses: {a} and {b}")
            }
            ConflictKind::Classroom(name) => {
                write!(f, "Classroom {name} has overlapping courses: {a} and {b}")
            }
            ConflictKind::Cohort { year, semester } => write!(
                f,
                "Year {year} Semester {semester} students have overlapping courses: {a} and {b}"
            ),
        }
    }
}

/// Lists every overlapping pair in the schedule.
pub fn find_conflicts(schedule: &Schedule) -> Vec<Conflict> {
    let mut by_instructor: BTreeMap<&str, Vec<&ScheduledCourse>> = BTreeMap::new();
    let mut by_classroom: BTreeMap<&str, Vec<&ScheduledCourse>> = BTreeMap::new();
    let mut by_cohort: BTreeMap<(u8, u8), Vec<&ScheduledCourse>> = BTreeMap::new();

    for sc in &schedule.scheduled {
        by_instructor.entry(&sc.instructor).or_default().push(sc);
        by_classroom.entry(&sc.classroom).or_default().push(sc);
        by_cohort.entry((sc.year, sc.semester)).or_default().push(sc);
    }

    let mut conflicts = Vec::new();
    for (name, group) in by_instructor {
        collect_overlaps(&group, || ConflictKind::Instructor(name.to_string()), &mut conflicts);
    }
    for (name, group) in by_classroom {
        collect_overlaps(&group, || ConflictKind::Classroom(name.to_string()), &mut conflicts);
    }
    for ((year, semester), group) in by_cohort {
        collect_overlaps(&group, || ConflictKind::Cohort { year, semester }, &mut conflicts);
    }
    conflicts
}

fn collect_overlaps<F>(group: &[&ScheduledCourse], kind: F, out: &mut Vec<Conflict>)
where
    F: Fn() -> ConflictKind,
{
    for (i, a) in group.iter().enumerate() {
        for b in &group[i + 1..] {
            if a.overlaps(b) {
                out.push(Conflict {
                    kind: kind(),
                    course_code: a.course_code.clone(),
                    other_course_code: b.course_code.clone(),
                });
            }
        }
    }
}

/// Violation messages for the schedule; empty means accepted.
pub fn validate_schedule(schedule: &Schedule) -> Vec<String> {
    find_conflicts(schedule)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, ClockTime, Course, TimeSlot, Weekday};

    fn slot(day: Weekday, hour: u16, minute: u16) -> TimeSlot {
        let start = hour * 60 + minute;
        TimeSlot::new(
            day,
            ClockTime::from_hm(hour, minute),
            ClockTime::from_hm((start + 50) / 60, (start + 50) % 60),
        )
    }

    fn place(s: &mut Schedule, course: &Course, at: TimeSlot, room: &str) {
        s.add(ScheduledCourse::new(course, at, &Classroom::lecture(room, 50)));
    }

    #[test]
    fn test_clean_schedule() {
        let mut s = Schedule::new();
        place(&mut s, &Course::theory("A", "I").with_cohort(1, 1), slot(Weekday::Monday, 8, 0), "R1");
        place(&mut s, &Course::theory("B", "I").with_cohort(1, 1), slot(Weekday::Monday, 9, 0), "R1");
        assert!(find_conflicts(&s).is_empty());
        assert!(validate_schedule(&s).is_empty());
    }

    #[test]
    fn test_instructor_conflict() {
        let mut s = Schedule::new();
        place(&mut s, &Course::theory("A", "I").with_cohort(1, 1), slot(Weekday::Monday, 8, 0), "R1");
        place(&mut s, &Course::theory("B", "I").with_cohort(2, 3), slot(Weekday::Monday, 8, 30), "R2");

        let conflicts = find_conflicts(&s);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Instructor("I".into()));
        assert_eq!(conflicts[0].course_code, "A");
        assert_eq!(conflicts[0].other_course_code, "B");
        assert_eq!(
            conflicts[0].to_string(),
            "Instructor I has overlapping courses: A and B"
        );
    }

    #[test]
    fn test_classroom_and_cohort_conflicts() {
        let mut s = Schedule::new();
        place(&mut s, &Course::theory("A", "I").with_cohort(2, 4), slot(Weekday::Tuesday, 10, 0), "R1");
        place(&mut s, &Course::theory("B", "J").with_cohort(2, 4), slot(Weekday::Tuesday, 10, 0), "R1");

        let kinds: Vec<_> = find_conflicts(&s).into_iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConflictKind::Classroom("R1".into()),
                ConflictKind::Cohort { year: 2, semester: 4 },
            ]
        );
        assert!(validate_schedule(&s)
            .contains(&"Year 2 Semester 4 students have overlapping courses: A and B".to_string()));
    }

    #[test]
    fn test_cohort_scoped_to_semester() {
        let mut s = Schedule::new();
        place(&mut s, &Course::theory("A", "I").with_cohort(2, 3), slot(Weekday::Tuesday, 10, 0), "R1");
        place(&mut s, &Course::theory("B", "J").with_cohort(2, 4), slot(Weekday::Tuesday, 10, 0), "R2");
        assert!(find_conflicts(&s).is_empty());
    }

    #[test]
    fn test_touching_slots_do_not_conflict() {
        let mut s = Schedule::new();
        place(&mut s, &Course::theory("A", "I"), slot(Weekday::Friday, 8, 0), "R1");
        place(&mut s, &Course::theory("B", "I"), slot(Weekday::Friday, 8, 50), "R1");
        assert!(find_conflicts(&s).is_empty());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let mut s = Schedule::new();
        for (code, who, room) in [("A", "I", "R1"), ("B", "J", "R1"), ("C", "I", "R2"), ("D", "K", "R3")] {
            place(&mut s, &Course::theory(code, who).with_cohort(1, 1), slot(Weekday::Monday, 8, 0), room);
        }
        let first = find_conflicts(&s);
        let second = find_conflicts(&s);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
