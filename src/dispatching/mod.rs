//! Course orderings for construction attempts.
//!
//! The engine runs one full construction attempt per strategy. Orderings
//! differ only in which courses get first pick of the slot grid; the random
//! ordering exists to diversify attempts.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_timetable::dispatching::OrderingStrategy;
//! use u_timetable::models::Course;
//!
//! let courses = vec![
//!     Course::lab("C1L", "Dr. Smith", "C1"),
//!     Course::theory("C1", "Dr. Smith").with_enrollment(45),
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let ordered = OrderingStrategy::ByEnrollment.order(&courses, &mut rng);
//! assert_eq!(ordered[0].code, "C1"); // theory group first
//! ```

mod strategy;

pub use strategy::OrderingStrategy;
