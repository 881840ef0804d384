use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment name (default: "development")
    pub environment: String,
    /// Requests allowed per client within one window (default: 100)
    pub rate_limit_max_requests: u32,
    /// Rate-limit window length in seconds (default: 600)
    pub rate_limit_window_seconds: u64,
    /// Maximum number of clients tracked by the rate limiter (default: 10,000)
    pub rate_limit_max_clients: usize,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `APP_ENV` - Deployment environment (default: "development")
    /// - `RATE_LIMIT_MAX_REQUESTS` - Requests per window (default: 100)
    /// - `RATE_LIMIT_WINDOW_SECONDS` - Window length (default: 600)
    /// - `RATE_LIMIT_MAX_CLIENTS` - Tracked clients (default: 10,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            rate_limit_max_requests: parse_env("RATE_LIMIT_MAX_REQUESTS").unwrap_or(100),
            rate_limit_window_seconds: parse_env("RATE_LIMIT_WINDOW_SECONDS").unwrap_or(600),
            rate_limit_max_clients: parse_env("RATE_LIMIT_MAX_CLIENTS")
                .filter(|&n| n > 0)
                .unwrap_or(10_000),
            request_timeout_seconds: parse_env("REQUEST_TIMEOUT_SECONDS").unwrap_or(10),
        }
    }

    /// Get the rate-limit window as a Duration.
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns true when internal error details may be exposed to clients.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            rate_limit_max_requests: 100,
            rate_limit_window_seconds: 600,
            rate_limit_max_clients: 10_000,
            request_timeout_seconds: 10,
        }
    }
}
