//! Health check operations.

use serde::{Deserialize, Serialize};

use super::HolidaysClient;
use crate::error::Result;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub uptime: f64,
    pub environment: String,
}

impl HolidaysClient {
    /// Fetch service health. The body is not enveloped.
    pub async fn health(&self) -> Result<ServiceHealth> {
        let body = self.get_text("/health", &[]).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
