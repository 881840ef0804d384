use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use angola_holidays_core::{
    calendar::RangeOrderError,
    envelope::ApiResponse,
    i18n::{Language, Message},
};

use crate::{context::RequestContext, models::FieldError};

/// Errors returned by the API handlers, rendered as error envelopes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more query parameters failed validation.
    #[error("{}", .message.text(Language::En))]
    Validation {
        message: Message,
        lang: Language,
        errors: Vec<FieldError>,
    },

    /// `startDate` is after `endDate`.
    #[error("{source}")]
    RangeOrder {
        lang: Language,
        #[source]
        source: RangeOrderError,
    },

    /// No route matched.
    #[error("Resource not found")]
    NotFound { lang: Language },

    /// The request ran past the configured timeout.
    #[error("Request timed out")]
    Timeout { lang: Language },

    /// Anything unexpected. Details are only shown when `expose_details` is set.
    #[error("Internal error: {source}")]
    Internal {
        context: RequestContext,
        expose_details: bool,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Serialize)]
struct ValidationData<'a> {
    errors: &'a [FieldError],
}

#[derive(Serialize)]
struct InternalData {
    details: String,
}

impl ApiError {
    pub fn validation(message: Message, lang: Language, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message,
            lang,
            errors,
        }
    }

    /// Maps an axum query rejection onto a validation error for `message`.
    pub fn rejected(message: Message, lang: Language, rejection: QueryRejection) -> Self {
        Self::validation(
            message,
            lang,
            vec![FieldError {
                field: "query",
                message: rejection.body_text(),
            }],
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::RangeOrder { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation {
                message,
                lang,
                errors,
            } => {
                tracing::warn!(status = %status, errors = ?errors, "Validation failed");
                let data = (!errors.is_empty()).then_some(ValidationData { errors });
                Json(ApiResponse::error(message.text(*lang), data)).into_response()
            }
            ApiError::RangeOrder { lang, source } => {
                tracing::warn!(status = %status, error = %source, "Invalid date range");
                Json(ApiResponse::error(Message::InvalidRange.text(*lang), ())).into_response()
            }
            ApiError::NotFound { lang } => {
                Json(ApiResponse::error(Message::NotFound.text(*lang), ())).into_response()
            }
            ApiError::Timeout { lang } => {
                tracing::warn!(status = %status, "Request timed out");
                Json(ApiResponse::error(Message::RequestTimeout.text(*lang), ())).into_response()
            }
            ApiError::Internal {
                context,
                expose_details,
                source,
            } => {
                tracing::error!(
                    request_id = %context.request_id,
                    path = %context.path,
                    error = %source,
                    "Internal server error"
                );
                let data = expose_details.then(|| InternalData {
                    details: format!("{source:#}"),
                });
                Json(ApiResponse::error(
                    Message::InternalError.text(context.lang),
                    data,
                ))
                .into_response()
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angola_holidays_core::calendar::DateRange;
    use axum::http::{HeaderMap, Uri};
    use chrono::NaiveDate;
    use http_body_util::BodyExt;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_lists_errors() {
        let error = ApiError::validation(
            Message::InvalidDate,
            Language::En,
            vec![FieldError {
                field: "date",
                message: "Invalid date".to_string(),
            }],
        );

        let (status, json) = body_json(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Invalid date. Use YYYY-MM-DD format");
        assert_eq!(json["data"]["errors"][0]["field"], "date");
        assert_eq!(json["data"]["errors"][0]["message"], "Invalid date");
    }

    #[tokio::test]
    async fn test_validation_without_errors_has_null_data() {
        let error = ApiError::validation(Message::InvalidDays, Language::Pt, Vec::new());

        let (_, json) = body_json(error).await;

        assert_eq!(
            json["message"],
            "Número de dias inválido. Use um valor entre 1 e 365"
        );
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_range_order_is_bad_request() {
        let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let source = DateRange::new(start, end).unwrap_err();

        let (status, json) = body_json(ApiError::RangeOrder {
            lang: Language::En,
            source,
        })
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["message"],
            "Start date must be before or equal to end date"
        );
    }

    fn context(lang: Language) -> RequestContext {
        let uri: Uri = format!("/holidays?lang={lang}").parse().unwrap();
        RequestContext::from_request(&HeaderMap::new(), &uri)
    }

    #[tokio::test]
    async fn test_internal_hides_details_outside_development() {
        let hidden = ApiError::Internal {
            context: context(Language::En),
            expose_details: false,
            source: anyhow::anyhow!("boom"),
        };
        let (status, json) = body_json(hidden).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "Internal server error");
        assert!(json["data"].is_null());

        let shown = ApiError::Internal {
            context: context(Language::En),
            expose_details: true,
            source: anyhow::anyhow!("boom"),
        };
        let (_, json) = body_json(shown).await;

        assert_eq!(json["data"]["details"], "boom");
    }

    #[tokio::test]
    async fn test_internal_uses_request_language() {
        let error = ApiError::Internal {
            context: context(Language::Pt),
            expose_details: false,
            source: anyhow::anyhow!("boom"),
        };

        let (_, json) = body_json(error).await;

        assert_eq!(json["message"], "Erro interno do servidor");
    }

    #[tokio::test]
    async fn test_timeout_envelope() {
        let (status, json) = body_json(ApiError::Timeout { lang: Language::Pt }).await;

        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(json["message"], "Tempo limite da requisição excedido");
    }
}
