//! Configuration types for technician payment calculation.
//!
//! This module contains the rate tier structures that are deserialized from
//! YAML configuration files, and the validated [`RateSchedule`] built from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A contiguous range of worked hours with its own hourly rate and discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// The first hour count covered by this tier (inclusive).
    pub min_hours: u32,
    /// The last hour count covered by this tier (inclusive), or `None` when unbounded.
    #[serde(default)]
    pub max_hours: Option<u32>,
    /// The rate paid per worked hour.
    pub hourly_rate: Decimal,
    /// The fraction of gross pay withheld, in `[0, 1)`.
    pub discount: Decimal,
}

impl RateTier {
    /// Returns true if `hours` falls within this tier's inclusive range.
    pub fn contains(&self, hours: i64) -> bool {
        hours >= i64::from(self.min_hours)
            && self.max_hours.is_none_or(|max| hours <= i64::from(max))
    }
}

/// Rate schedule file structure (`rate_schedule.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RateScheduleConfig {
    /// Human-readable name of the schedule.
    pub name: String,
    /// Tiers in ascending order of hours.
    pub tiers: Vec<RateTier>,
}

/// An ordered, validated set of rate tiers.
///
/// The tiers cover every non-negative hour count exactly once: the first tier
/// starts at zero, each following tier starts right after the previous one
/// ends, and only the last tier is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateSchedule {
    name: String,
    tiers: Vec<RateTier>,
}

impl RateSchedule {
    /// Name given to the built-in reference schedule.
    pub const DEFAULT_NAME: &'static str = "Standard technician rates";

    /// Builds a schedule from its tiers, rejecting tables that leave gaps,
    /// overlap, or carry out-of-range rates or discounts.
    ///
    /// # Examples
    ///
    /// ```
    /// use technician_payments::config::{RateSchedule, RateTier};
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = RateSchedule::new(
    ///     "Flat",
    ///     vec![RateTier {
    ///         min_hours: 0,
    ///         max_hours: None,
    ///         hourly_rate: Decimal::new(100, 0),
    ///         discount: Decimal::ZERO,
    ///     }],
    /// )
    /// .unwrap();
    /// assert_eq!(schedule.tiers().len(), 1);
    /// ```
    pub fn new(name: impl Into<String>, tiers: Vec<RateTier>) -> EngineResult<Self> {
        validate_tiers(&tiers)?;
        Ok(Self {
            name: name.into(),
            tiers,
        })
    }

    /// Builds a schedule from a deserialized configuration file.
    pub fn from_config(config: RateScheduleConfig) -> EngineResult<Self> {
        Self::new(config.name, config.tiers)
    }

    /// Returns the schedule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tiers in ascending order of hours.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }
}

impl Default for RateSchedule {
    /// The reference four-tier table.
    fn default() -> Self {
        let tier = |min_hours, max_hours, rate, discount_pct| RateTier {
            min_hours,
            max_hours,
            hourly_rate: Decimal::new(rate, 0),
            discount: Decimal::new(discount_pct, 2),
        };

        Self {
            name: Self::DEFAULT_NAME.to_string(),
            tiers: vec![
                tier(0, Some(14), 200, 15),
                tier(15, Some(28), 250, 16),
                tier(29, Some(47), 300, 17),
                tier(48, None, 350, 18),
            ],
        }
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidRateSchedule { message }
}

fn validate_tiers(tiers: &[RateTier]) -> EngineResult<()> {
    let Some(first) = tiers.first() else {
        return Err(invalid("schedule has no tiers".to_string()));
    };
    if first.min_hours != 0 {
        return Err(invalid(format!(
            "first tier must start at 0 hours (starts at {})",
            first.min_hours
        )));
    }

    let last_index = tiers.len() - 1;
    for (index, tier) in tiers.iter().enumerate() {
        if tier.hourly_rate < Decimal::ZERO {
            return Err(invalid(format!(
                "tier {} has a negative hourly rate ({})",
                index, tier.hourly_rate
            )));
        }
        if tier.discount < Decimal::ZERO || tier.discount >= Decimal::ONE {
            return Err(invalid(format!(
                "tier {} discount must be in [0, 1) (got {})",
                index, tier.discount
            )));
        }

        match tier.max_hours {
            None if index != last_index => {
                return Err(invalid(format!(
                    "tier {} is unbounded but is not the last tier",
                    index
                )));
            }
            None => {}
            Some(max) if index == last_index => {
                return Err(invalid(format!(
                    "last tier must be unbounded (ends at {} hours)",
                    max
                )));
            }
            Some(max) => {
                if max < tier.min_hours {
                    return Err(invalid(format!(
                        "tier {} ends ({}) before it starts ({})",
                        index, max, tier.min_hours
                    )));
                }
                let next = &tiers[index + 1];
                if u64::from(next.min_hours) != u64::from(max) + 1 {
                    return Err(invalid(format!(
                        "tier {} must start at {} hours to follow tier {} (starts at {})",
                        index + 1,
                        u64::from(max) + 1,
                        index,
                        next.min_hours
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(min_hours: u32, max_hours: Option<u32>, rate: &str, discount: &str) -> RateTier {
        RateTier {
            min_hours,
            max_hours,
            hourly_rate: dec(rate),
            discount: dec(discount),
        }
    }

    fn expect_invalid(tiers: Vec<RateTier>, fragment: &str) {
        match RateSchedule::new("test", tiers) {
            Err(EngineError::InvalidRateSchedule { message }) => {
                assert!(
                    message.contains(fragment),
                    "expected '{}' in '{}'",
                    fragment,
                    message
                );
            }
            other => panic!("Expected InvalidRateSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_default_schedule_passes_validation() {
        let schedule = RateSchedule::default();
        assert!(validate_tiers(schedule.tiers()).is_ok());
        assert_eq!(schedule.name(), RateSchedule::DEFAULT_NAME);
        assert_eq!(schedule.tiers().len(), 4);
    }

    #[test]
    fn test_default_schedule_reference_values() {
        let tiers = RateSchedule::default().tiers().to_vec();
        assert_eq!(tiers[0], tier(0, Some(14), "200", "0.15"));
        assert_eq!(tiers[1], tier(15, Some(28), "250", "0.16"));
        assert_eq!(tiers[2], tier(29, Some(47), "300", "0.17"));
        assert_eq!(tiers[3], tier(48, None, "350", "0.18"));
    }

    #[test]
    fn test_tier_contains_is_inclusive() {
        let bounded = tier(15, Some(28), "250", "0.16");
        assert!(!bounded.contains(14));
        assert!(bounded.contains(15));
        assert!(bounded.contains(28));
        assert!(!bounded.contains(29));

        let unbounded = tier(48, None, "350", "0.18");
        assert!(unbounded.contains(48));
        assert!(unbounded.contains(i64::MAX));
        assert!(!unbounded.contains(47));
    }

    #[test]
    fn test_empty_schedule_rejected() {
        expect_invalid(vec![], "no tiers");
    }

    #[test]
    fn test_first_tier_must_start_at_zero() {
        expect_invalid(vec![tier(1, None, "200", "0.1")], "start at 0");
    }

    #[test]
    fn test_gap_between_tiers_rejected() {
        expect_invalid(
            vec![tier(0, Some(10), "200", "0.1"), tier(12, None, "250", "0.1")],
            "tier 1 must start at 11",
        );
    }

    #[test]
    fn test_overlapping_tiers_rejected() {
        expect_invalid(
            vec![tier(0, Some(10), "200", "0.1"), tier(10, None, "250", "0.1")],
            "tier 1 must start at 11",
        );
    }

    #[test]
    fn test_bounded_last_tier_rejected() {
        expect_invalid(
            vec![tier(0, Some(10), "200", "0.1"), tier(11, Some(20), "250", "0.1")],
            "last tier must be unbounded",
        );
    }

    #[test]
    fn test_unbounded_middle_tier_rejected() {
        expect_invalid(
            vec![tier(0, None, "200", "0.1"), tier(11, None, "250", "0.1")],
            "tier 0 is unbounded",
        );
    }

    #[test]
    fn test_inverted_tier_rejected() {
        expect_invalid(
            vec![
                tier(0, Some(5), "200", "0.1"),
                tier(6, Some(4), "250", "0.1"),
                tier(5, None, "300", "0.1"),
            ],
            "tier 1 ends (4) before it starts (6)",
        );
    }

    #[test]
    fn test_discount_of_one_rejected() {
        expect_invalid(vec![tier(0, None, "200", "1")], "discount must be in [0, 1)");
    }

    #[test]
    fn test_negative_discount_rejected() {
        expect_invalid(vec![tier(0, None, "200", "-0.1")], "discount");
    }

    #[test]
    fn test_negative_rate_rejected() {
        expect_invalid(vec![tier(0, None, "-1", "0")], "negative hourly rate");
    }

    #[test]
    fn test_deserialize_config_from_yaml() {
        let yaml = r#"
name: Test rates
tiers:
  - min_hours: 0
    max_hours: 9
    hourly_rate: "100"
    discount: "0.05"
  - min_hours: 10
    hourly_rate: "120"
    discount: "0.10"
"#;
        let config: RateScheduleConfig = serde_yaml::from_str(yaml).unwrap();
        let schedule = RateSchedule::from_config(config).unwrap();

        assert_eq!(schedule.name(), "Test rates");
        assert_eq!(schedule.tiers()[0].max_hours, Some(9));
        assert_eq!(schedule.tiers()[1].max_hours, None);
        assert_eq!(schedule.tiers()[1].discount, dec("0.10"));
    }

    #[test]
    fn test_serialize_unbounded_tier_as_null() {
        let json = serde_json::to_value(&RateSchedule::default()).unwrap();
        assert!(json["tiers"][3]["max_hours"].is_null());
        assert_eq!(json["tiers"][0]["max_hours"], 14);
    }
}
