//! Core data models for the technician payments engine.
//!
//! This module contains the technician input records, the per-technician
//! payment records, and the serializable report and listing views.

mod payment_line;
mod payment_record;
mod payment_report;
mod technician;

pub use payment_line::TechnicianPaymentLine;
pub use payment_record::{TechnicianPaymentRecord, TechnicianPaymentSummary};
pub use payment_report::{PaymentReport, PaymentReportSummary};
pub use technician::{Technician, TechnicianHours};
