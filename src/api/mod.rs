//! HTTP API module for the technician payments engine.
//!
//! This module exposes the payment listing and the payment report over HTTP.
//! Callers supply technician hour totals already aggregated by the data layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PaymentListQuery, TechnicianHoursRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
