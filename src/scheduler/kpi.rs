//! Schedule coverage metrics (KPIs).
//!
//! A generated schedule can fall short in two ways: some courses keep
//! fewer hours than they need, or conflicts remain. These metrics report
//! both.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required instances | Sum of weekly hours over schedulable courses |
//! | Placed instances | Hour-instances in the schedule |
//! | Coverage rate | placed / required |
//! | Shortfalls | Courses with fewer instances than weekly hours |
//! | Room utilization | Instances per room / slots in the standard week |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TimeSlotUniverse;
use crate::models::{Course, Schedule};

/// Placement status of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCoverage {
    /// Course code.
    pub code: String,
    /// Weekly hours required.
    pub required: usize,
    /// Hour-instances in the schedule.
    pub scheduled: usize,
}

impl CourseCoverage {
    /// Hours still missing.
    pub fn missing(&self) -> usize {
        self.required.saturating_sub(self.scheduled)
    }
}

/// Schedule coverage indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Sum of weekly hours over schedulable courses.
    pub required_instances: usize,
    /// Hour-instances in the schedule.
    pub placed_instances: usize,
    /// Fraction of required instances placed (0.0..1.0).
    pub coverage_rate: f64,
    /// Courses with zero weekly hours.
    pub skipped_courses: usize,
    /// Courses holding all their hours.
    pub fully_placed: usize,
    /// Courses short of hours, in catalog order.
    pub shortfalls: Vec<CourseCoverage>,
    /// Residual violation messages on the schedule.
    pub violation_count: usize,
    /// Per-room share of the standard week in use.
    pub utilization_by_classroom: HashMap<String, f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the course catalog it was built from.
    pub fn calculate(schedule: &Schedule, courses: &[Course]) -> Self {
        let mut required_instances = 0;
        let mut skipped_courses = 0;
        let mut fully_placed = 0;
        let mut shortfalls = Vec::new();

        for course in courses {
            if !course.is_schedulable() {
                skipped_courses += 1;
                continue;
            }
            let required = course.hours_per_week as usize;
            let scheduled = schedule.count_of(&course.code);
            required_instances += required;

            if scheduled >= required {
                fully_placed += 1;
            } else {
                shortfalls.push(CourseCoverage {
                    code: course.code.clone(),
                    required,
                    scheduled,
                });
            }
        }

        let placed_instances = schedule.len();
        let coverage_rate = if required_instances == 0 {
            1.0
        } else {
            (placed_instances as f64 / required_instances as f64).min(1.0)
        };

        let week = TimeSlotUniverse::standard().len() as f64;
        let mut utilization_by_classroom: HashMap<String, f64> = HashMap::new();
        for sc in &schedule.scheduled {
            *utilization_by_classroom.entry(sc.classroom.clone()).or_default() += 1.0 / week;
        }

        Self {
            required_instances,
            placed_instances,
            coverage_rate,
            skipped_courses,
            fully_placed,
            shortfalls,
            violation_count: schedule.violations.len(),
            utilization_by_classroom,
        }
    }

    /// Every hour placed and no violation left.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty() && self.violation_count == 0
    }

    /// Mean utilization over rooms that hold at least one instance.
    pub fn avg_utilization(&self) -> f64 {
        if self.utilization_by_classroom.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.utilization_by_classroom.values().sum();
        sum / self.utilization_by_classroom.len() as f64
    }
}
