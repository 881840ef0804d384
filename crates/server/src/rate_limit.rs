//! Fixed-window rate limiting keyed by client address.
//!
//! Windows live in an LRU map so the number of tracked clients stays bounded;
//! an evicted client simply starts a fresh window.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use lru::LruCache;
use serde::Serialize;

use angola_holidays_core::i18n::Message;

use crate::{context::language_from_uri, state::AppState};

/// Headers inspected, in order, to identify the calling client.
const CLIENT_KEY_HEADERS: [&str; 3] = ["x-forwarded-for", "x-real-ip", "cf-connecting-ip"];

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Outcome of counting one request against a client's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: u32, reset_after: Duration },
    Limited { reset_after: Duration },
}

/// Thread-safe fixed-window rate limiter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    windows: Arc<Mutex<LruCache<String, Window>>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `window` for each client.
    ///
    /// # Panics
    ///
    /// Panics if `max_clients` is 0.
    pub fn new(max_requests: u32, window: Duration, max_clients: usize) -> Self {
        let capacity = NonZeroUsize::new(max_clients).expect("max_clients must be > 0");
        Self {
            windows: Arc::new(Mutex::new(LruCache::new(capacity))),
            max_requests,
            window,
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Counts a request from `key` made at `now`.
    pub fn check(&self, key: &str, now: Instant) -> RateLimitDecision {
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        let expired = windows
            .peek(key)
            .is_none_or(|w| now.saturating_duration_since(w.started_at) >= self.window);
        if expired {
            windows.put(
                key.to_string(),
                Window {
                    started_at: now,
                    count: 0,
                },
            );
        }

        let Some(window) = windows.get_mut(key) else {
            return RateLimitDecision::Allowed {
                remaining: self.max_requests,
                reset_after: self.window,
            };
        };

        let reset_after = self
            .window
            .saturating_sub(now.saturating_duration_since(window.started_at));

        if window.count >= self.max_requests {
            return RateLimitDecision::Limited { reset_after };
        }

        window.count += 1;
        RateLimitDecision::Allowed {
            remaining: self.max_requests - window.count,
            reset_after,
        }
    }
}

/// Identifies the client from proxy headers, falling back to "anonymous".
pub fn client_key(headers: &HeaderMap) -> String {
    CLIENT_KEY_HEADERS
        .iter()
        .filter_map(|name| headers.get(*name))
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(',').next())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or("anonymous")
        .to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LimitedBody {
    status: &'static str,
    message: &'static str,
    retry_after: String,
}

fn ceil_secs(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

pub(crate) fn describe_window(window: Duration) -> String {
    let secs = window.as_secs();
    match secs {
        s if s >= 60 && s % 60 == 0 => format!("{} minutes", s / 60),
        s => format!("{s} seconds"),
    }
}

fn set_header(headers: &mut HeaderMap, name: &'static str, value: impl ToString) {
    if let Ok(value) = HeaderValue::from_str(&value.to_string()) {
        headers.insert(HeaderName::from_static(name), value);
    }
}

/// Draft-6 `RateLimit-*` headers.
fn apply_headers(headers: &mut HeaderMap, limiter: &RateLimiter, remaining: u32, reset: Duration) {
    set_header(
        headers,
        "ratelimit-policy",
        format!("{};w={}", limiter.max_requests(), limiter.window().as_secs()),
    );
    set_header(headers, "ratelimit-limit", limiter.max_requests());
    set_header(headers, "ratelimit-remaining", remaining);
    set_header(headers, "ratelimit-reset", ceil_secs(reset));
}

/// Middleware enforcing the per-client request budget.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let key = client_key(request.headers());
    let limiter = &state.rate_limiter;

    match limiter.check(&key, Instant::now()) {
        RateLimitDecision::Allowed {
            remaining,
            reset_after,
        } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), limiter, remaining, reset_after);
            response
        }
        RateLimitDecision::Limited { reset_after } => {
            let lang = language_from_uri(request.uri());
            tracing::warn!(client = %key, "Rate limit exceeded");

            let body = LimitedBody {
                status: "error",
                message: Message::TooManyRequests.text(lang),
                retry_after: describe_window(limiter.window()),
            };
            let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
            let headers = response.headers_mut();
            apply_headers(headers, limiter, 0, reset_after);
            set_header(headers, "retry-after", ceil_secs(reset_after));
            response
        }
    }
}
