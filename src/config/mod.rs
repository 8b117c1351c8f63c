//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FBA_MATRIX` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use fba_decision_matrix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod wizard;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Wizard session limits
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FBA_MATRIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FBA_MATRIX__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FBA_MATRIX__WIZARD__SESSION_TTL_SECS=600` -> `wizard.session_ttl_secs = 600`
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
                    .prefix("FBA_MATRIX")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.wizard.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "FBA_MATRIX__SERVER__PORT",
        "FBA_MATRIX__SERVER__ENVIRONMENT",
        "FBA_MATRIX__SERVER__LOG_FORMAT",
        "FBA_MATRIX__SERVER__REQUEST_TIMEOUT_SECS",
        "FBA_MATRIX__WIZARD__SESSION_TTL_SECS",
        "FBA_MATRIX__WIZARD__MAX_SESSIONS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.wizard.session_ttl_secs, 3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FBA_MATRIX__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.environment, Environment::Production);
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FBA_MATRIX__SERVER__PORT", "3000");
        env::set_var("FBA_MATRIX__SERVER__LOG_FORMAT", "json");
        env::set_var("FBA_MATRIX__WIZARD__SESSION_TTL_SECS", "600");
        env::set_var("FBA_MATRIX__WIZARD__MAX_SESSIONS", "25");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.wizard.session_ttl_secs, 600);
        assert_eq!(config.wizard.max_sessions, 25);
    }

    #[test]
    fn test_load_validated_rejects_bad_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FBA_MATRIX__SERVER__REQUEST_TIMEOUT_SECS", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidTimeout))
        ));
    }
}
