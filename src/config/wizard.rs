//! Wizard session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Limits for server-held wizard sessions
#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Idle time after which a wizard is discarded
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// How often the idle sweep runs
    #[serde(default = "default_purge_interval")]
    pub purge_interval_secs: u64,

    /// Maximum wizards held at once
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl WizardConfig {
    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs)
    }

    /// Validate wizard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.purge_interval_secs == 0 {
            return Err(ValidationError::InvalidPurgeInterval);
        }
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidMaxSessions);
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl(),
            purge_interval_secs: default_purge_interval(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_session_ttl() -> u64 {
    3600
}

fn default_purge_interval() -> u64 {
    300
}

fn default_max_sessions() -> usize {
    10_000
}
