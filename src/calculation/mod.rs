//! Calculation logic for the technician payments engine.
//!
//! This module contains the rate tier lookup, the payment formula, the
//! conversion of hour totals into payment records, the aggregate statistics
//! used by the payment report, and currency rounding for reported figures.

mod payment;
mod payment_aggregation;
mod payment_records;
mod rounding;
mod tier_lookup;

pub use payment::{
    PaymentBreakdown, calculate_payment, calculate_payment_breakdown, validate_total_hours,
};
pub use payment_aggregation::{average_payment, below_average, highest_paid, lowest_paid};
pub use payment_records::{build_payment_listing, build_payment_record, build_payment_records};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use tier_lookup::{TierMatch, find_tier};
