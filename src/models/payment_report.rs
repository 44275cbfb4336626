//! Payment report model.
//!
//! A [`PaymentReport`] is derived from a set of technician payment records
//! and is recomputed on every request. [`PaymentReportSummary`] is its
//! serializable form, with figures rounded to cents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    average_payment, below_average, highest_paid, lowest_paid, round_currency,
};

use super::payment_record::{TechnicianPaymentRecord, TechnicianPaymentSummary};

/// Aggregate statistics over a set of technician payments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReport {
    /// Mean payment across all records, unrounded; zero when there are none.
    pub average_payment: Decimal,
    /// Records paid strictly less than the average, in input order.
    pub below_average: Vec<TechnicianPaymentRecord>,
    /// The lowest-paid record, ties going to the larger technician id.
    pub lowest_paid: Option<TechnicianPaymentRecord>,
    /// The highest-paid record, ties going to the larger technician id.
    pub highest_paid: Option<TechnicianPaymentRecord>,
}

impl PaymentReport {
    /// Builds a report from `records`.
    ///
    /// The below-average set is computed against the average calculated
    /// here, never a previously computed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use technician_payments::models::PaymentReport;
    ///
    /// let report = PaymentReport::from_records(&[]);
    /// assert!(report.average_payment.is_zero());
    /// assert!(report.lowest_paid.is_none());
    /// assert!(report.highest_paid.is_none());
    /// ```
    pub fn from_records(records: &[TechnicianPaymentRecord]) -> Self {
        let average = average_payment(records);
        Self {
            average_payment: average,
            below_average: below_average(records, average)
                .into_iter()
                .cloned()
                .collect(),
            lowest_paid: lowest_paid(records).cloned(),
            highest_paid: highest_paid(records).cloned(),
        }
    }

    /// Returns the serializable view of this report, rounded to cents.
    pub fn summary(&self) -> PaymentReportSummary {
        PaymentReportSummary {
            average_payment: round_currency(self.average_payment),
            below_average_technicians: self
                .below_average
                .iter()
                .map(TechnicianPaymentRecord::summary)
                .collect(),
            lowest_paid_technician: self.lowest_paid.as_ref().map(TechnicianPaymentRecord::summary),
            highest_paid_technician: self
                .highest_paid
                .as_ref()
                .map(TechnicianPaymentRecord::summary),
        }
    }
}

/// The report as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReportSummary {
    /// Mean payment rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_payment: Decimal,
    /// Technicians paid strictly less than the unrounded average.
    pub below_average_technicians: Vec<TechnicianPaymentSummary>,
    /// The lowest-paid technician, or null when there are none.
    pub lowest_paid_technician: Option<TechnicianPaymentSummary>,
    /// The highest-paid technician, or null when there are none.
    pub highest_paid_technician: Option<TechnicianPaymentSummary>,
}
