//! Construction orderings.
//!
//! Each strategy splits courses into a theory group followed by a lab
//! group and orders within each group. Placing theory first gives labs a
//! placed theory course to follow.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

use crate::models::Course;

/// A course ordering used to seed one construction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingStrategy {
    /// Year ascending, then enrollment descending.
    ByYearEnrollment,
    /// Enrollment descending.
    ByEnrollment,
    /// Department, then year ascending, then enrollment descending.
    ByDepartment,
    /// Uniform random permutation within each group.
    Random,
}

impl OrderingStrategy {
    /// The four strategies in the order the engine tries them.
    pub const ALL: [OrderingStrategy; 4] = [
        OrderingStrategy::ByYearEnrollment,
        OrderingStrategy::ByEnrollment,
        OrderingStrategy::ByDepartment,
        OrderingStrategy::Random,
    ];

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            OrderingStrategy::ByYearEnrollment => "year-enrollment",
            OrderingStrategy::ByEnrollment => "enrollment",
            OrderingStrategy::ByDepartment => "department",
            OrderingStrategy::Random => "random",
        }
    }

    /// Orders courses: all theory courses, then all labs.
    ///
    /// Sorting is stable, so ties keep input order. Only [`Random`](Self::Random)
    /// draws from `rng`.
    pub fn order<'a, I, R>(&self, courses: I, rng: &mut R) -> Vec<&'a Course>
    where
        I: IntoIterator<Item = &'a Course>,
        R: Rng + ?Sized,
    {
        let (mut theory, mut lab): (Vec<&Course>, Vec<&Course>) =
            courses.into_iter().partition(|c| c.is_theory());

        match self {
            OrderingStrategy::Random => {
                theory.shuffle(rng);
                lab.shuffle(rng);
            }
            _ => {
                theory.sort_by(|a, b| self.compare(a, b));
                lab.sort_by(|a, b| self.compare(a, b));
            }
        }

        theory.extend(lab);
        theory
    }

    fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            OrderingStrategy::ByYearEnrollment => {
                (a.year, Reverse(a.enrollment)).cmp(&(b.year, Reverse(b.enrollment)))
            }
            OrderingStrategy::ByEnrollment => b.enrollment.cmp(&a.enrollment),
            OrderingStrategy::ByDepartment => (&a.department, a.year, Reverse(a.enrollment))
                .cmp(&(&b.department, b.year, Reverse(b.enrollment))),
            OrderingStrategy::Random => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for OrderingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Vec<Course> {
        vec![
            Course::lab("L1", "I", "T1").with_cohort(1, 1).with_enrollment(20),
            Course::theory("T1", "I")
                .with_cohort(2, 3)
                .with_enrollment(40)
                .with_department("SENG"),
            Course::theory("T2", "I")
                .with_cohort(1, 1)
                .with_enrollment(30)
                .with_department("SENG"),
            Course::theory("T3", "I")
                .with_cohort(1, 1)
                .with_enrollment(60)
                .with_department("CENG"),
            Course::lab("L2", "I", "T3").with_cohort(1, 1).with_enrollment(35),
        ]
    }

    fn codes(ordered: &[&Course]) -> Vec<String> {
        ordered.iter().map(|c| c.code.clone()).collect()
    }

    #[test]
    fn test_by_year_enrollment() {
        let courses = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let ordered = OrderingStrategy::ByYearEnrollment.order(&courses, &mut rng);
        assert_eq!(codes(&ordered), ["T3", "T2", "T1", "L2", "L1"]);
    }

    #[test]
    fn test_by_enrollment() {
        let courses = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let ordered = OrderingStrategy::ByEnrollment.order(&courses, &mut rng);
        assert_eq!(codes(&ordered), ["T3", "T1", "T2", "L2", "L1"]);
    }

    #[test]
    fn test_by_department() {
        let courses = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let ordered = OrderingStrategy::ByDepartment.order(&courses, &mut rng);
        // Labs have an empty department and sort by enrollment among themselves.
        assert_eq!(codes(&ordered), ["T3", "T2", "T1", "L2", "L1"]);
    }

    #[test]
    fn test_random_keeps_theory_before_lab() {
        let courses = catalog();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ordered = OrderingStrategy::Random.order(&courses, &mut rng);
            assert_eq!(ordered.len(), courses.len());
            let first_lab = ordered.iter().position(|c| c.is_lab()).unwrap();
            assert!(ordered[..first_lab].iter().all(|c| c.is_theory()));
            assert!(ordered[first_lab..].iter().all(|c| c.is_lab()));
        }
    }

    #[test]
    fn test_random_is_reproducible_under_seed() {
        let courses = catalog();
        let a = OrderingStrategy::Random.order(&courses, &mut StdRng::seed_from_u64(7));
        let b = OrderingStrategy::Random.order(&courses, &mut StdRng::seed_from_u64(7));
        assert_eq!(codes(&a), codes(&b));
    }

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let none: Vec<Course> = Vec::new();
        for strategy in OrderingStrategy::ALL {
            assert!(strategy.order(&none, &mut rng).is_empty());
        }
    }
}
