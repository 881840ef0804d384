//! HTTP client for the Angola Holidays API.

pub mod health;
pub mod holidays;

use serde::{de::DeserializeOwned, Deserialize};

use angola_holidays_core::{
    envelope::{ApiResponse, ResponseStatus},
    i18n::Language,
};

use crate::error::{ClientError, Result};

/// Fields shared by every error body the server sends, envelope or not.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the Angola Holidays API.
#[derive(Debug, Clone)]
pub struct HolidaysClient {
    client: reqwest::Client,
    base_url: String,
    lang: Language,
}

impl HolidaysClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            lang: Language::default(),
        }
    }

    /// Ask the server to answer in `lang`.
    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and returns the response body, or a `ServerError` for any
    /// non-2xx status.
    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .query(&[("lang", self.lang.code())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(server_error(status.as_u16(), &body))
        }
    }

    /// GETs an enveloped endpoint and unwraps its `data`.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self.get_text(path, query).await?;
        unwrap_envelope(&body)
    }
}

fn server_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.to_string());

    ClientError::ServerError { status, message }
}

fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: ApiResponse<T> = serde_json::from_str(body)?;

    match envelope.status {
        ResponseStatus::Success => Ok(envelope.data),
        ResponseStatus::Error => Err(ClientError::InvalidResponse(
            envelope
                .message
                .unwrap_or_else(|| "error envelope without message".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angola_holidays_core::calendar::HolidayCheck;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = HolidaysClient::new("http://localhost:3000/");
        assert_eq!(client.url("/holidays"), "http://localhost:3000/holidays");
        assert_eq!(client.lang, Language::Pt);

        let client = client.with_lang(Language::En);
        assert_eq!(client.lang, Language::En);
    }

    #[test]
    fn test_unwrap_envelope() {
        let body = r#"{
            "status": "success",
            "timestamp": "2025-04-20T10:00:00.000Z",
            "data": {"date": "2025-04-20T01:00:00.000Z", "isHoliday": true}
        }"#;

        let check: HolidayCheck = unwrap_envelope(body).unwrap();
        assert!(check.is_holiday);
        assert_eq!(check.date.to_string(), "2025-04-20T01:00:00.000Z");
    }

    #[test]
    fn test_error_envelope_is_invalid_response() {
        let body = r#"{
            "status": "error",
            "timestamp": "2025-04-20T10:00:00.000Z",
            "message": "Recurso não encontrado",
            "data": null
        }"#;

        let err = unwrap_envelope::<Option<HolidayCheck>>(body).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(m) if m == "Recurso não encontrado"));
    }

    #[test]
    fn test_server_error_prefers_message() {
        let err = server_error(
            429,
            r#"{"status":"error","message":"Too many requests","retryAfter":"10 minutes"}"#,
        );
        assert!(matches!(
            err,
            ClientError::ServerError { status: 429, ref message } if message == "Too many requests"
        ));

        let err = server_error(502, "Bad Gateway");
        assert!(matches!(
            err,
            ClientError::ServerError { status: 502, ref message } if message == "Bad Gateway"
        ));
    }
}
