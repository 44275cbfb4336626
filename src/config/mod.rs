//! Configuration loading and management for the technician payments engine.
//!
//! This module provides the validated rate schedule, loading it from a YAML
//! file when one is configured, and the environment-driven service settings.
//!
//! # Example
//!
//! ```no_run
//! use technician_payments::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rate_schedule.yaml").unwrap();
//! println!("Loaded schedule: {}", config.schedule().name());
//! ```

mod loader;
mod types;

pub use loader::{
    BIND_ADDR_VAR, ConfigLoader, DEFAULT_BIND_ADDR, RATE_SCHEDULE_PATH_VAR, ServiceSettings,
};
pub use types::{RateSchedule, RateScheduleConfig, RateTier};
