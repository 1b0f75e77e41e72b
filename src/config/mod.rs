//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MICRO_DECISION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use micro_decision::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Analysis backend at {}", config.backend.base_url);
//! ```

mod backend;
mod controller;
mod error;
mod logging;

pub use backend::BackendConfig;
pub use controller::ControllerConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration pointed at the local analysis service.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Analysis backend configuration (base URL, timeout)
    #[serde(default)]
    pub backend: BackendConfig,

    /// Form controller configuration (in-flight policy)
    #[serde(default)]
    pub controller: ControllerConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MICRO_DECISION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MICRO_DECISION__BACKEND__BASE_URL=http://localhost:5000` -> `backend.base_url`
    /// - `MICRO_DECISION__CONTROLLER__IN_FLIGHT_POLICY=reject` -> `controller.in_flight_policy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MICRO_DECISION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InFlightPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "MICRO_DECISION__BACKEND__BASE_URL",
        "MICRO_DECISION__BACKEND__REQUEST_TIMEOUT_SECS",
        "MICRO_DECISION__CONTROLLER__IN_FLIGHT_POLICY",
        "MICRO_DECISION__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.backend.request_timeout_secs, None);
        assert_eq!(config.controller.in_flight_policy, InFlightPolicy::Supersede);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MICRO_DECISION__BACKEND__BASE_URL", "http://analysis.local:8000");
        env::set_var("MICRO_DECISION__BACKEND__REQUEST_TIMEOUT_SECS", "30");
        env::set_var("MICRO_DECISION__CONTROLLER__IN_FLIGHT_POLICY", "reject");
        env::set_var("MICRO_DECISION__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.backend.base_url, "http://analysis.local:8000");
        assert_eq!(config.backend.request_timeout_secs, Some(30));
        assert_eq!(config.controller.in_flight_policy, InFlightPolicy::Reject);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_backend_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MICRO_DECISION__BACKEND__BASE_URL", "127.0.0.1:5000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }
}
