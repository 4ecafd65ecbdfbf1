//! SessionSweeper - Background eviction of idle sessions.
//!
//! Clients never trigger cleanup; this service wakes on a fixed interval
//! and asks the store to drop every session idle past the configured
//! lifetime.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `interval` | 15 min | How often to sweep |
//! | `max_lifetime` | 60 min | Inactivity after which a session is evicted |
//!
//! ## Graceful Shutdown
//!
//! The loop listens on a watch channel. A sweep that is already running
//! completes before `run` returns, so awaiting the task drains it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use crate::domain::foundation::Timestamp;
use crate::ports::SessionStore;

/// Configuration for the SessionSweeper service.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to sweep.
    pub interval: Duration,

    /// Inactivity after which a session is evicted.
    pub max_lifetime: Duration,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15 * 60),
            max_lifetime: Duration::from_secs(60 * 60),
        }
    }
}

impl SweeperConfig {
    /// Create config with custom sweep interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Create config with custom session lifetime.
    pub fn with_max_lifetime(mut self, max_lifetime: Duration) -> Self {
        self.max_lifetime = max_lifetime;
        self
    }
}

/// Background service that evicts idle sessions.
pub struct SessionSweeper {
    store: Arc<dyn SessionStore>,
    config: SweeperConfig,
}

impl SessionSweeper {
    /// Create a new SessionSweeper with default configuration.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_config(store, SweeperConfig::default())
    }

    /// Create a new SessionSweeper with custom configuration.
    pub fn with_config(store: Arc<dyn SessionStore>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run the sweep loop until shutdown signal is received.
    ///
    /// # Arguments
    ///
    /// * `shutdown` - Watch channel that signals when to stop
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; nothing can be idle yet.
        interval.tick().await;

        tracing::info!(
            interval_secs = self.config.interval.as_secs(),
            max_lifetime_secs = self.config.max_lifetime.as_secs(),
            "Session sweeper started"
        );

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    // A dropped sender also means shutdown.
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Session sweeper stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.sweep_once();
                }
            }
        }
    }

    /// Run exactly one sweep against the current time.
    pub fn sweep_once(&self) -> usize {
        let evicted = self.store.sweep(Timestamp::now(), self.config.max_lifetime);
        tracing::debug!(evicted, live = self.store.len(), "Sweep finished");
        evicted
    }
}
