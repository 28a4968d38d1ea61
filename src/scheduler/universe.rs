//! Weekly slot grid.
//!
//! Five weekdays of nine 50-minute periods, 08:00 to 16:50, with a
//! 10-minute break between periods. On Friday every period touching the
//! exam block is dropped and a `15:10-16:00` slot is added right after it.
//!
//! The grid's membership is fixed for a run. Only its iteration order
//! changes, when a failed placement attempt reshuffles it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ClockTime, TimeSlot, Weekday, EXAM_BLOCK};

/// Period length in minutes.
pub const PERIOD_MINUTES: u16 = 50;

/// Number of periods per day.
pub const PERIODS_PER_DAY: u16 = 9;

/// First period start.
pub const DAY_START: ClockTime = ClockTime::from_hm(8, 0);

/// The set of placeable slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotUniverse {
    slots: Vec<TimeSlot>,
}

impl TimeSlotUniverse {
    /// Builds the standard weekly grid.
    pub fn standard() -> Self {
        let mut slots = Vec::with_capacity(Weekday::ALL.len() * PERIODS_PER_DAY as usize);

        for day in Weekday::ALL {
            for period in 0..PERIODS_PER_DAY {
                let start = DAY_START.minutes() + period * 60;
                let slot = TimeSlot::new(
                    day,
                    ClockTime::from_hm(start / 60, start % 60),
                    ClockTime::from_hm((start + PERIOD_MINUTES) / 60, (start + PERIOD_MINUTES) % 60),
                );
                if slot.hits_exam_block() {
                    continue;
                }
                slots.push(slot);
            }

            if day == Weekday::Friday {
                let end = EXAM_BLOCK.end.minutes() + PERIOD_MINUTES;
                slots.push(TimeSlot::new(
                    day,
                    EXAM_BLOCK.end,
                    ClockTime::from_hm(end / 60, end % 60),
                ));
            }
        }

        Self { slots }
    }

    /// Slots in current iteration order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Permutes the iteration order in place.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.slots.shuffle(rng);
    }

    /// A freshly shuffled copy of the slots.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TimeSlot> {
        let mut slots = self.slots.clone();
        slots.shuffle(rng);
        slots
    }
}

impl Default for TimeSlotUniverse {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_slot_count() {
        let u = TimeSlotUniverse::standard();
        // Mon-Thu: 9 each. Fri: 9 - 3 (13:00, 14:00, 15:00) + 1 (15:10).
        assert_eq!(u.len(), 4 * 9 + 7);
    }

    #[test]
    fn test_no_friday_slot_in_exam_block() {
        let u = TimeSlotUniverse::standard();
        for slot in u.slots() {
            assert!(!slot.hits_exam_block(), "{slot} overlaps the exam block");
        }
    }

    #[test]
    fn test_friday_compensating_slot() {
        let u = TimeSlotUniverse::standard();
        let friday: Vec<_> = u
            .slots()
            .iter()
            .filter(|s| s.day == Weekday::Friday)
            .map(|s| s.to_string())
            .collect();
        assert!(friday.contains(&"Friday 15:10-16:00".to_string()));
        assert!(friday.contains(&"Friday 12:00-12:50".to_string()));
        assert!(friday.contains(&"Friday 16:00-16:50".to_string()));
        assert!(!friday.contains(&"Friday 13:00-13:50".to_string()));
    }

    #[test]
    fn test_periods_are_fifty_minutes() {
        let u = TimeSlotUniverse::standard();
        for slot in u.slots() {
            assert_eq!(slot.range().duration_minutes(), PERIOD_MINUTES);
        }
        let monday: Vec<_> = u
            .slots()
            .iter()
            .filter(|s| s.day == Weekday::Monday)
            .collect();
        assert_eq!(monday.first().unwrap().start, ClockTime::from_hm(8, 0));
        assert_eq!(monday.last().unwrap().end, ClockTime::from_hm(16, 50));
    }

    #[test]
    fn test_reshuffle_keeps_membership() {
        let original = TimeSlotUniverse::standard();
        let mut u = original.clone();
        let mut rng = StdRng::seed_from_u64(3);
        u.reshuffle(&mut rng);

        let a: HashSet<_> = original.slots().iter().collect();
        let b: HashSet<_> = u.slots().iter().collect();
        assert_eq!(a, b);
        assert_eq!(u.len(), original.len());
    }
}
