//! Conversion of technician hour totals into payment records and listing rows.

use crate::config::RateSchedule;
use crate::error::EngineResult;
use crate::models::{TechnicianHours, TechnicianPaymentLine, TechnicianPaymentRecord};

use super::payment::{calculate_payment, validate_total_hours};
use super::rounding::round_currency;

/// Computes the payment record for one technician.
///
/// A missing hour total counts as zero hours.
///
/// # Errors
///
/// Returns `InvalidInput` if the hours are negative or fractional, and
/// `OutOfRange` if the schedule does not cover them.
pub fn build_payment_record(
    schedule: &RateSchedule,
    entry: &TechnicianHours,
) -> EngineResult<TechnicianPaymentRecord> {
    let total_hours = validate_total_hours(entry.hours_or_zero())?;
    let total_payment = calculate_payment(schedule, total_hours)?;

    Ok(TechnicianPaymentRecord {
        technician_id: entry.technician.id,
        display_name: entry.technician.full_name(),
        total_hours,
        total_payment,
    })
}

/// Computes payment records for every entry, preserving input order.
///
/// Fails on the first entry whose hours are rejected.
pub fn build_payment_records(
    schedule: &RateSchedule,
    entries: &[TechnicianHours],
) -> EngineResult<Vec<TechnicianPaymentRecord>> {
    entries
        .iter()
        .map(|entry| build_payment_record(schedule, entry))
        .collect()
}

/// Builds the payment listing for the entries whose first or last name
/// contains `name_filter`, ignoring case.
///
/// An empty filter lists every entry. Payments are rounded to cents.
pub fn build_payment_listing(
    schedule: &RateSchedule,
    entries: &[TechnicianHours],
    name_filter: &str,
) -> EngineResult<Vec<TechnicianPaymentLine>> {
    entries
        .iter()
        .filter(|entry| entry.technician.matches_name(name_filter))
        .map(|entry| {
            let record = build_payment_record(schedule, entry)?;
            Ok(TechnicianPaymentLine {
                full_name: record.display_name,
                total_hours: record.total_hours,
                total_payment: round_currency(record.total_payment),
                total_orders: entry.total_orders,
            })
        })
        .collect()
}
