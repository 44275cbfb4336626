//! Aggregate statistics over technician payments.
//!
//! These functions derive the figures of a payment report from a collection
//! of [`TechnicianPaymentRecord`]s. None of them depend on the order of the
//! input beyond preserving it in [`below_average`]: the lowest and highest
//! technicians are chosen by payment with an explicit tie-break on the
//! technician id.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::models::TechnicianPaymentRecord;

/// Returns the arithmetic mean of `total_payment` across `records`.
///
/// Returns zero for an empty collection.
///
/// # Examples
///
/// ```
/// use technician_payments::calculation::average_payment;
/// use rust_decimal::Decimal;
///
/// assert_eq!(average_payment(&[]), Decimal::ZERO);
/// ```
pub fn average_payment(records: &[TechnicianPaymentRecord]) -> Decimal {
    if records.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = records.iter().map(|record| record.total_payment).sum();
    total / Decimal::from(records.len())
}

/// Returns the records paid strictly less than `average`, in input order.
pub fn below_average(
    records: &[TechnicianPaymentRecord],
    average: Decimal,
) -> Vec<&TechnicianPaymentRecord> {
    records
        .iter()
        .filter(|record| record.total_payment < average)
        .collect()
}

/// Orders records by payment, placing the larger technician id first among
/// equal payments so that `min_by` selects it.
fn lowest_payment_first(a: &TechnicianPaymentRecord, b: &TechnicianPaymentRecord) -> Ordering {
    a.total_payment
        .cmp(&b.total_payment)
        .then_with(|| b.technician_id.cmp(&a.technician_id))
}

/// Orders records by payment, placing the larger technician id last among
/// equal payments so that `max_by` selects it.
fn highest_payment_last(a: &TechnicianPaymentRecord, b: &TechnicianPaymentRecord) -> Ordering {
    a.total_payment
        .cmp(&b.total_payment)
        .then_with(|| a.technician_id.cmp(&b.technician_id))
}

/// Returns the record with the lowest payment.
///
/// Among equal payments the record with the larger technician id wins.
/// Returns `None` for an empty collection.
pub fn lowest_paid(records: &[TechnicianPaymentRecord]) -> Option<&TechnicianPaymentRecord> {
    records.iter().min_by(|a, b| lowest_payment_first(a, b))
}

/// Returns the record with the highest payment.
///
/// Among equal payments the record with the larger technician id wins.
/// Returns `None` for an empty collection.
pub fn highest_paid(records: &[TechnicianPaymentRecord]) -> Option<&TechnicianPaymentRecord> {
    records.iter().max_by(|a, b| highest_payment_last(a, b))
}
