//! Engine configuration.
//!
//! Every loop in the engine is bounded by a value here, so a run always
//! terminates. The struct deserializes from any serde format with missing
//! fields defaulted.

use serde::{Deserialize, Serialize};

use crate::dispatching::OrderingStrategy;

/// Bounds and seed for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Attempts per course before giving up on it.
    pub max_course_attempts: usize,
    /// Passes of the iterative repair tier.
    pub iterative_passes: usize,
    /// Conflict records handled per iterative pass.
    pub iterative_batch: usize,
    /// Passes of the aggressive repair tier.
    pub aggressive_passes: usize,
    /// Courses removed per aggressive pass.
    pub aggressive_batch: usize,
    /// Construction orderings, tried in sequence.
    pub strategies: Vec<OrderingStrategy>,
    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_course_attempts: 10,
            iterative_passes: 10,
            iterative_batch: 5,
            aggressive_passes: 20,
            aggressive_batch: 3,
            strategies: OrderingStrategy::ALL.to_vec(),
            seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the per-course attempt bound.
    pub fn with_max_course_attempts(mut self, attempts: usize) -> Self {
        self.max_course_attempts = attempts;
        self
    }

    /// Sets the iterative tier bounds.
    pub fn with_iterative_repair(mut self, passes: usize, batch: usize) -> Self {
        self.iterative_passes = passes;
        self.iterative_batch = batch;
        self
    }

    /// Sets the aggressive tier bounds.
    pub fn with_aggressive_repair(mut self, passes: usize, batch: usize) -> Self {
        self.aggressive_passes = passes;
        self.aggressive_batch = batch;
        self
    }

    /// Replaces the construction orderings.
    pub fn with_strategies(mut self, strategies: Vec<OrderingStrategy>) -> Self {
        self.strategies = strategies;
        self
    }
}
