//! Shared application state.
//!
//! Holidays are recomputed on every request, so the state only carries
//! configuration, the process start time and the rate limiter.

use std::{sync::Arc, time::Instant};

use crate::{config::Config, rate_limit::RateLimiter};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Per-client request budget.
    pub rate_limiter: RateLimiter,
    started_at: Instant,
}

impl AppState {
    /// Creates a new AppState from the given configuration.
    pub fn new(config: Config) -> Self {
        let rate_limiter = RateLimiter::new(
            config.rate_limit_max_requests,
            config.rate_limit_window(),
            config.rate_limit_max_clients,
        );

        Self {
            config: Arc::new(config),
            rate_limiter,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
