//! The `{status, timestamp, message?, data}` envelope wrapped around every
//! API response.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Outcome reported in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response envelope shared by the server and the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Builds a success envelope stamped with `now`.
    pub fn success_at(data: T, now: DateTime<Utc>) -> Self {
        Self {
            status: ResponseStatus::Success,
            timestamp: format_timestamp(now),
            message: None,
            data,
        }
    }

    /// Builds an error envelope stamped with `now`.
    pub fn error_at(message: impl Into<String>, data: T, now: DateTime<Utc>) -> Self {
        Self {
            status: ResponseStatus::Error,
            timestamp: format_timestamp(now),
            message: Some(message.into()),
            data,
        }
    }

    /// Builds a success envelope stamped with the current time.
    pub fn success(data: T) -> Self {
        Self::success_at(data, Utc::now())
    }

    /// Builds an error envelope stamped with the current time.
    pub fn error(message: impl Into<String>, data: T) -> Self {
        Self::error_at(message, data, Utc::now())
    }
}

/// Formats an instant as `YYYY-MM-DDTHH:mm:ss.sssZ`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
