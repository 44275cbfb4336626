//! Technician payment listing rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the technician payment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianPaymentLine {
    /// The technician's full name.
    pub full_name: String,
    /// Whole hours worked.
    pub total_hours: i64,
    /// The payment rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_payment: Decimal,
    /// Number of orders the hours came from.
    pub total_orders: u64,
}
