//! Per-technician payment records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_currency;

/// A technician's computed payment for a reporting request.
///
/// Created fresh for each request from the supplied hour totals and never
/// mutated afterwards. `total_payment` is unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianPaymentRecord {
    /// Identifier of the technician.
    pub technician_id: u64,
    /// The technician's full name.
    pub display_name: String,
    /// Whole hours the payment was computed from.
    pub total_hours: i64,
    /// The computed net payment.
    pub total_payment: Decimal,
}

impl TechnicianPaymentRecord {
    /// Returns the reportable view of this record, rounded to cents.
    pub fn summary(&self) -> TechnicianPaymentSummary {
        TechnicianPaymentSummary {
            technician_id: self.technician_id,
            full_name: self.display_name.clone(),
            total_payment: round_currency(self.total_payment),
        }
    }
}

/// A technician entry in a payment report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianPaymentSummary {
    /// Identifier of the technician.
    pub technician_id: u64,
    /// The technician's full name.
    pub full_name: String,
    /// The payment rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_payment: Decimal,
}
