//! Rate tier lookup.
//!
//! This module finds the tier of a [`RateSchedule`] that covers a given
//! number of worked hours.

use crate::config::{RateSchedule, RateTier};
use crate::error::{EngineError, EngineResult};

/// The tier matched for an hour count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierMatch<'a> {
    /// Position of the tier within the schedule.
    pub index: usize,
    /// The matched tier.
    pub tier: &'a RateTier,
}

/// Returns the first tier whose inclusive hour range contains `total_hours`.
///
/// # Errors
///
/// Returns `OutOfRange` when no tier matches. A validated schedule covers
/// every non-negative hour count, so callers only see this for negative
/// input that bypassed validation or a corrupted table.
///
/// # Examples
///
/// ```
/// use technician_payments::calculation::find_tier;
/// use technician_payments::config::RateSchedule;
///
/// let schedule = RateSchedule::default();
/// let matched = find_tier(&schedule, 15).unwrap();
/// assert_eq!(matched.index, 1);
/// assert_eq!(matched.tier.min_hours, 15);
/// ```
pub fn find_tier(schedule: &RateSchedule, total_hours: i64) -> EngineResult<TierMatch<'_>> {
    schedule
        .tiers()
        .iter()
        .enumerate()
        .find(|(_, tier)| tier.contains(total_hours))
        .map(|(index, tier)| TierMatch { index, tier })
        .ok_or(EngineError::OutOfRange { hours: total_hours })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_select_expected_tier() {
        let schedule = RateSchedule::default();
        let cases = [
            (0, 0),
            (14, 0),
            (15, 1),
            (28, 1),
            (29, 2),
            (47, 2),
            (48, 3),
            (100, 3),
            (i64::from(u32::MAX) + 1, 3),
        ];

        for (hours, expected_index) in cases {
            let matched = find_tier(&schedule, hours).unwrap();
            assert_eq!(matched.index, expected_index, "hours = {}", hours);
        }
    }

    #[test]
    fn test_negative_hours_match_no_tier() {
        let schedule = RateSchedule::default();
        match find_tier(&schedule, -1) {
            Err(EngineError::OutOfRange { hours }) => assert_eq!(hours, -1),
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_exactly_one_tier_matches_each_hour_count() {
        let schedule = RateSchedule::default();
        for hours in 0..200 {
            let count = schedule
                .tiers()
                .iter()
                .filter(|tier| tier.contains(hours))
                .count();
            assert_eq!(count, 1, "hours = {}", hours);
        }
    }
}
