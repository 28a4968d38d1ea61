//! Timetable generation driver.
//!
//! # Algorithm
//!
//! 1. Drop courses with zero weekly hours.
//! 2. For each ordering strategy, build a fresh schedule by placing every
//!    course in that order. Track the attempt placing the most courses.
//!    If an attempt places every course, run iterative repair and accept
//!    it at once when no conflict remains.
//! 3. Otherwise take the best attempt, run iterative repair, and, if
//!    conflicts remain, aggressive repair.
//! 4. Record the final detector's messages as the schedule's violations.
//!
//! Every stage is bounded by [`SchedulerConfig`], so a run always
//! terminates. The result may still be short of hours or carry
//! violations; callers should check both (see [`ScheduleKpi`]).
//!
//! [`ScheduleKpi`]: super::ScheduleKpi

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::conflicts::{find_conflicts, validate_schedule};
use super::{ConflictResolver, Placer, SchedulerConfig, TimeSlotUniverse};
use crate::models::{Classroom, Course, Instructor, Schedule};

/// Input container for one timetabling run.
///
/// Deserializes the `{ "instructors": [...], "classrooms": [...],
/// "courses": [...] }` document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableRequest {
    /// Instructors, referenced by name from courses.
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    /// Rooms and labs.
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    /// Course catalog.
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl TimetableRequest {
    /// Creates a request.
    pub fn new(
        instructors: Vec<Instructor>,
        classrooms: Vec<Classroom>,
        courses: Vec<Course>,
    ) -> Self {
        Self {
            instructors,
            classrooms,
            courses,
        }
    }

    /// Total hour-instances a complete schedule holds.
    pub fn required_instances(&self) -> usize {
        self.courses
            .iter()
            .map(|c| c.hours_per_week as usize)
            .sum()
    }
}

/// Randomized construct-and-repair timetabler.
///
/// Owns its random source; two timetablers built with the same seed
/// produce the same schedule from the same request.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Classroom, Course, Instructor};
/// use u_timetable::scheduler::{TimetableRequest, Timetabler};
///
/// let request = TimetableRequest::new(
///     vec![Instructor::new("Dr. Smith").available_all_week("08:00-17:00".parse().unwrap())],
///     vec![Classroom::lecture("A101", 50)],
///     vec![Course::theory("CENG101", "Dr. Smith").with_hours(2)],
/// );
///
/// let schedule = Timetabler::seeded(42).generate(&request);
/// assert_eq!(schedule.count_of("CENG101"), 2);
/// assert!(schedule.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Timetabler {
    config: SchedulerConfig,
    rng: StdRng,
}

impl Timetabler {
    /// Creates a timetabler. The RNG is seeded from `config.seed`, or from
    /// the OS when no seed is set.
    pub fn new(config: SchedulerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// Creates a timetabler with default bounds and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SchedulerConfig::default().with_seed(seed))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a schedule for a request.
    pub fn generate(&mut self, request: &TimetableRequest) -> Schedule {
        self.schedule(&request.courses, &request.instructors, &request.classrooms)
    }

    /// Generates a schedule.
    pub fn schedule(
        &mut self,
        courses: &[Course],
        instructors: &[Instructor],
        classrooms: &[Classroom],
    ) -> Schedule {
        let Self { config, rng } = self;

        let placer =
            Placer::new(instructors, classrooms).with_max_attempts(config.max_course_attempts);
        let resolver = ConflictResolver::new(&placer, courses);
        let mut universe = TimeSlotUniverse::standard();

        let schedulable: Vec<&Course> = courses.iter().filter(|c| c.is_schedulable()).collect();
        for course in &schedulable {
            if placer.instructor_of(course).is_none() {
                warn!(course = %course.code, instructor = %course.instructor, "unknown instructor; course cannot be placed");
            }
        }

        let mut schedule = Schedule::new();
        let mut best: Option<Schedule> = None;
        let mut best_placed = 0;

        for &strategy in &config.strategies {
            schedule = Schedule::new();
            let ordered = strategy.order(schedulable.iter().copied(), rng);

            let mut placed = 0;
            for course in &ordered {
                if placer.place_course(&mut schedule, &mut universe, course, rng) {
                    placed += 1;
                } else {
                    debug!(strategy = %strategy, course = %course.code, "course not placed");
                }
            }
            info!(
                strategy = %strategy,
                placed,
                total = ordered.len(),
                instances = schedule.len(),
                "construction attempt finished"
            );

            if placed == ordered.len() {
                resolver.resolve_iterative(
                    &mut schedule,
                    &mut universe,
                    rng,
                    config.iterative_passes,
                    config.iterative_batch,
                );
                if find_conflicts(&schedule).is_empty() {
                    schedule.violations.clear();
                    info!(strategy = %strategy, instances = schedule.len(), "schedule accepted");
                    return schedule;
                }
            }

            if placed > best_placed {
                best_placed = placed;
                best = Some(schedule.clone());
            }
        }

        if let Some(best) = best {
            schedule = best;
            resolver.resolve_iterative(
                &mut schedule,
                &mut universe,
                rng,
                config.iterative_passes,
                config.iterative_batch,
            );
        }

        let mut violations = validate_schedule(&schedule);
        if !violations.is_empty() {
            resolver.resolve_aggressive(
                &mut schedule,
                &mut universe,
                rng,
                config.aggressive_passes,
                config.aggressive_batch,
            );
            violations = validate_schedule(&schedule);
        }

        if violations.is_empty() {
            info!(instances = schedule.len(), best_placed, "schedule finished without conflicts");
        } else {
            warn!(
                instances = schedule.len(),
                violations = violations.len(),
                "schedule finished with residual conflicts"
            );
        }
        schedule.violations = violations;
        schedule
    }
}

impl Default for Timetabler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
