//! Technician payment calculation.
//!
//! A technician's payment is their worked hours multiplied by the hourly rate
//! of the matching tier, less that tier's discount:
//!
//! ```text
//! gross = hours * hourly_rate
//! net   = gross - gross * discount
//! ```
//!
//! The net amount is returned unrounded; rounding to cents happens where
//! figures are reported.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::RateSchedule;
use crate::error::{EngineError, EngineResult};

use super::tier_lookup::find_tier;

/// The intermediate figures of a payment calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentBreakdown {
    /// The hours the payment was computed for.
    pub total_hours: i64,
    /// Position of the matched tier within the schedule.
    pub tier_index: usize,
    /// The matched tier's hourly rate.
    pub hourly_rate: Decimal,
    /// The matched tier's discount fraction.
    pub discount: Decimal,
    /// `total_hours * hourly_rate`.
    pub gross_payment: Decimal,
    /// `gross_payment * discount`.
    pub discount_amount: Decimal,
    /// `gross_payment - discount_amount`.
    pub net_payment: Decimal,
}

/// Validates hours supplied as a decimal, returning them as a whole number.
///
/// # Errors
///
/// Returns `InvalidInput` if `hours` is negative, has a fractional part, or
/// does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use technician_payments::calculation::validate_total_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(validate_total_hours(Decimal::new(150, 1)).unwrap(), 15);
/// assert!(validate_total_hours(Decimal::new(155, 1)).is_err());
/// ```
pub fn validate_total_hours(hours: Decimal) -> EngineResult<i64> {
    if hours < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            message: format!("total_hours must not be negative (got {})", hours),
        });
    }
    if !hours.fract().is_zero() {
        return Err(EngineError::InvalidInput {
            message: format!("total_hours must be a whole number (got {})", hours),
        });
    }
    hours.to_i64().ok_or_else(|| EngineError::InvalidInput {
        message: format!("total_hours is too large (got {})", hours),
    })
}

/// Calculates the payment for `total_hours` along with its intermediate figures.
///
/// # Errors
///
/// - `InvalidInput` if `total_hours` is negative, or if the payment does not
///   fit in a `Decimal`.
/// - `OutOfRange` if no tier of `schedule` covers `total_hours`.
pub fn calculate_payment_breakdown(
    schedule: &RateSchedule,
    total_hours: i64,
) -> EngineResult<PaymentBreakdown> {
    if total_hours < 0 {
        return Err(EngineError::InvalidInput {
            message: format!("total_hours must not be negative (got {})", total_hours),
        });
    }

    let matched = find_tier(schedule, total_hours)?;
    let exceeds_range = || EngineError::InvalidInput {
        message: format!(
            "payment for {} hours exceeds the representable range",
            total_hours
        ),
    };
    let gross_payment = Decimal::from(total_hours)
        .checked_mul(matched.tier.hourly_rate)
        .ok_or_else(exceeds_range)?;
    let discount_amount = gross_payment
        .checked_mul(matched.tier.discount)
        .ok_or_else(exceeds_range)?;

    Ok(PaymentBreakdown {
        total_hours,
        tier_index: matched.index,
        hourly_rate: matched.tier.hourly_rate,
        discount: matched.tier.discount,
        gross_payment,
        discount_amount,
        net_payment: gross_payment - discount_amount,
    })
}

/// Calculates the net payment for `total_hours` worked.
///
/// # Errors
///
/// - `InvalidInput` if `total_hours` is negative.
/// - `OutOfRange` if no tier of `schedule` covers `total_hours`.
///
/// # Examples
///
/// ```
/// use technician_payments::calculation::calculate_payment;
/// use technician_payments::config::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::default();
/// // 14 hours * $200 = $2800, less 15% = $2380
/// assert_eq!(calculate_payment(&schedule, 14).unwrap(), Decimal::new(2380, 0));
/// ```
pub fn calculate_payment(schedule: &RateSchedule, total_hours: i64) -> EngineResult<Decimal> {
    calculate_payment_breakdown(schedule, total_hours).map(|breakdown| breakdown.net_payment)
}
