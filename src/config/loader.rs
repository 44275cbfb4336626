//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate
//! schedule from YAML, and [`ServiceSettings`] for the service's
//! environment-driven settings.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::{RateSchedule, RateScheduleConfig};

/// Loads and provides access to the rate schedule.
///
/// The schedule file has the following shape:
/// ```text
/// name: Standard technician rates
/// tiers:
///   - min_hours: 0
///     max_hours: 14
///     hourly_rate: "200"
///     discount: "0.15"
///   - min_hours: 15
///     ...
/// ```
///
/// The last tier omits `max_hours`, which makes it unbounded. The schedule is
/// validated as part of loading, so a loader that exists always holds a table
/// covering every non-negative hour count.
///
/// # Example
///
/// ```no_run
/// use technician_payments::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rate_schedule.yaml").unwrap();
/// println!("Loaded schedule: {}", loader.schedule().name());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads and validates the rate schedule at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing required fields
    /// - The tiers fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = Self::load_yaml::<RateScheduleConfig>(path.as_ref())?;
        let schedule = RateSchedule::from_config(config)?;
        Ok(Self { schedule })
    }

    /// Parses and validates a rate schedule from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: RateScheduleConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        let schedule = RateSchedule::from_config(config)?;
        Ok(Self { schedule })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Consumes the loader, returning the rate schedule.
    pub fn into_schedule(self) -> RateSchedule {
        self.schedule
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            schedule: RateSchedule::default(),
        }
    }
}

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
/// Environment variable holding the optional rate schedule path.
pub const RATE_SCHEDULE_PATH_VAR: &str = "RATE_SCHEDULE_PATH";
/// Listen address used when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings for running the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// The address the server listens on.
    pub bind_addr: SocketAddr,
    /// Path to a rate schedule file; the built-in table is used when `None`.
    pub rate_schedule_path: Option<PathBuf>,
}

impl ServiceSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| EngineError::ConfigParseError {
                path: BIND_ADDR_VAR.to_string(),
                message: format!("'{}' is not a socket address: {}", raw_addr, e),
            })?;

        let rate_schedule_path = lookup(RATE_SCHEDULE_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            rate_schedule_path,
        })
    }

    /// Loads the configured rate schedule, falling back to the built-in table.
    pub fn load_schedule(&self) -> EngineResult<RateSchedule> {
        match &self.rate_schedule_path {
            Some(path) => Ok(ConfigLoader::load(path)?.into_schedule()),
            None => Ok(RateSchedule::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_path() -> &'static str {
        "./config/rate_schedule.yaml"
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_load_shipped_schedule_matches_default() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.schedule().tiers(), RateSchedule::default().tiers());
        assert_eq!(loader.schedule().name(), RateSchedule::DEFAULT_NAME);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/rate_schedule.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rate_schedule.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_str_rejects_malformed_yaml() {
        let result = ConfigLoader::from_yaml_str("name: [unclosed");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_from_yaml_str_rejects_missing_tiers_field() {
        let result = ConfigLoader::from_yaml_str("name: No tiers\n");
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("tiers"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_str_rejects_gapped_schedule() {
        let yaml = r#"
name: Gapped
tiers:
  - min_hours: 0
    max_hours: 5
    hourly_rate: "100"
    discount: "0"
  - min_hours: 7
    hourly_rate: "100"
    discount: "0"
"#;
        let result = ConfigLoader::from_yaml_str(yaml);
        assert!(matches!(
            result,
            Err(EngineError::InvalidRateSchedule { .. })
        ));
    }

    #[test]
    fn test_default_loader_uses_reference_schedule() {
        assert_eq!(ConfigLoader::default().schedule(), &RateSchedule::default());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = ServiceSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(settings.rate_schedule_path, None);
        assert_eq!(settings.load_schedule().unwrap(), RateSchedule::default());
    }

    #[test]
    fn test_settings_read_from_environment() {
        let settings = ServiceSettings::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (RATE_SCHEDULE_PATH_VAR, config_path()),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            settings.rate_schedule_path,
            Some(PathBuf::from(config_path()))
        );
        assert!(settings.load_schedule().is_ok());
    }

    #[test]
    fn test_settings_blank_schedule_path_uses_default() {
        let settings =
            ServiceSettings::from_lookup(lookup_from(&[(RATE_SCHEDULE_PATH_VAR, "  ")])).unwrap();
        assert_eq!(settings.rate_schedule_path, None);
    }

    #[test]
    fn test_settings_invalid_bind_addr() {
        let result = ServiceSettings::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "not-an-addr")]));
        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, BIND_ADDR_VAR);
                assert!(message.contains("not-an-addr"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
