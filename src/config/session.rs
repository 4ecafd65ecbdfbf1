//! Session lifetime configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Idle-session eviction settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds between sweeps
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,

    /// Seconds a session may sit idle before it is evicted
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
}

impl SessionConfig {
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: default_sweep_interval(),
            max_lifetime_secs: default_max_lifetime(),
        }
    }
}

fn default_sweep_interval() -> u64 {
    15 * 60
}

fn default_max_lifetime() -> u64 {
    60 * 60
}
