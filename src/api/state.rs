//! Application state for the technician payments API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateSchedule;

/// Shared application state.
///
/// Holds the validated rate schedule. Handlers only read it, so it is shared
/// without locking.
#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RateSchedule>,
}

impl AppState {
    /// Creates a new application state with the given rate schedule.
    pub fn new(schedule: RateSchedule) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }

    /// Returns a reference to the rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RateSchedule::default())
    }
}
