//! Currency rounding applied where figures are reported.

use rust_decimal::Decimal;

/// Number of decimal places reported figures are rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds `amount` to cents using banker's rounding.
///
/// # Examples
///
/// ```
/// use technician_payments::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(15033333, 4)), Decimal::new(150333, 2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp(CURRENCY_DECIMAL_PLACES)
}
