//! Health check endpoints.
//!
//! - `/livez` - Basic liveness check (immediate 200, no checks)
//! - `/health` - Service metadata and uptime

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;

use angola_holidays_core::envelope::format_timestamp;

use crate::state::AppState;

/// Service name reported by `/health` and `/`.
pub const SERVICE_NAME: &str = "Angola Holidays API";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// Seconds since the process started.
    pub uptime: f64,
    pub environment: String,
}

/// GET /livez - Basic liveness check.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /health - Service metadata.
///
/// Not wrapped in the response envelope.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: format_timestamp(Utc::now()),
        uptime: state.uptime_seconds(),
        environment: state.config.environment.clone(),
    })
}
