//! Tracing subscriber setup.

use thiserror::Error;
use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Filter source chosen by [`env_filter`].
#[derive(Debug)]
pub struct FilterChoice {
    pub filter: EnvFilter,
    /// `RUST_LOG` was set but could not be parsed, so the configured level is in use.
    pub rejected_env: Option<String>,
}

/// Builds the filter, letting `RUST_LOG` override the configured level.
pub fn env_filter(server: &ServerConfig) -> Result<FilterChoice, TelemetryError> {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &server.log_level)
}

fn filter_from(env: Option<String>, configured: &str) -> Result<FilterChoice, TelemetryError> {
    let Some(raw) = env.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(FilterChoice {
            filter: EnvFilter::try_new(configured)?,
            rejected_env: None,
        });
    };
    match EnvFilter::try_new(&raw) {
        Ok(filter) => Ok(FilterChoice {
            filter,
            rejected_env: None,
        }),
        Err(err) => Ok(FilterChoice {
            filter: EnvFilter::try_new(configured)?,
            rejected_env: Some(format!("{}: {}", raw, err)),
        }),
    }
}

/// Installs the global subscriber for the server.
pub fn init(server: &ServerConfig) -> Result<(), TelemetryError> {
    let choice = env_filter(server)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(choice.filter)
        .with_target(true);

    let installed = match server.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    };
    installed.map_err(TelemetryError::Init)?;

    if let Some(rejected) = choice.rejected_env {
        warn!(
            rust_log = %rejected,
            fallback = %server.log_level,
            "ignoring malformed RUST_LOG"
        );
    }
    Ok(())
}

/// Minimal stderr logging for the one-shot CLI commands.
pub fn init_cli(verbose: bool) {
    let level = if verbose { "fba_decision_matrix=debug" } else { "warn" };
    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_log_level_parses() {
        assert!(EnvFilter::try_new(&ServerConfig::default().log_level).is_ok());
    }

    #[test]
    fn absent_env_uses_configured_level() {
        let choice = filter_from(None, "info").unwrap();
        assert!(choice.rejected_env.is_none());
        assert_eq!(choice.filter.max_level_hint(), Some(LevelFilter::INFO));

        let choice = filter_from(Some("  ".to_string()), "info").unwrap();
        assert!(choice.rejected_env.is_none());
    }

    #[test]
    fn valid_env_overrides_configured_level() {
        let choice = filter_from(Some("debug".to_string()), "info").unwrap();
        assert!(choice.rejected_env.is_none());
        assert_eq!(choice.filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn malformed_env_falls_back_and_is_reported() {
        let choice = filter_from(Some("fba_decision_matrix=loud".to_string()), "info").unwrap();
        assert_eq!(choice.filter.max_level_hint(), Some(LevelFilter::INFO));
        let rejected = choice.rejected_env.unwrap();
        assert!(rejected.starts_with("fba_decision_matrix=loud"));
    }

    #[test]
    fn malformed_configured_level_is_an_error() {
        assert!(matches!(
            filter_from(None, "fba_decision_matrix=loud"),
            Err(TelemetryError::InvalidFilter(_))
        ));
    }

    #[test]
    fn malformed_log_level_is_rejected() {
        assert!(EnvFilter::try_new("fba_decision_matrix=loud").is_err());
    }
}
