//! Request types for the technician payments API.

use serde::{Deserialize, Serialize};

use crate::models::TechnicianHours;

/// Request body for the payment listing and report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicianHoursRequest {
    /// Technicians with their aggregated hour totals.
    pub technicians: Vec<TechnicianHours>,
}

/// Query parameters for the payment listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentListQuery {
    /// Case-insensitive substring matched against first and last names.
    #[serde(default)]
    pub name: String,
}
