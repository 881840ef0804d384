//! Middleware that establishes the request context for everything below it.
//!
//! The context is stored in request extensions (for extractors), in a
//! task-local (for the panic handler, which never sees the request) and in a
//! tracing span (for every log line emitted while serving the request).

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Instrument;

use super::types::RequestContext;
use crate::handlers::ApiError;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

tokio::task_local! {
    static CURRENT: RequestContext;
}

/// Context of the request being served on this task, if any.
pub fn current_context() -> Option<RequestContext> {
    CURRENT.try_with(RequestContext::clone).ok()
}

/// Attaches a `RequestContext` to the request and echoes its id back.
///
/// Bare `408` responses from the timeout layer are rewritten into the error
/// envelope here, since this is the first layer that knows the language.
pub async fn request_context(mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::from_request(request.headers(), request.uri());
    request.extensions_mut().insert(ctx.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id,
        method = %request.method(),
        path = %ctx.path,
    );

    let mut response = CURRENT
        .scope(ctx.clone(), next.run(request))
        .instrument(span.clone())
        .await;

    let timed_out = response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE);
    if timed_out {
        let _entered = span.enter();
        response = ApiError::Timeout { lang: ctx.lang }.into_response();
    }

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{body::Body, middleware, routing::get, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use tower_http::timeout::TimeoutLayer;

    use super::*;

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "late"
    }

    async fn lang_of_current() -> String {
        current_context()
            .map(|ctx| ctx.lang.code().to_string())
            .unwrap_or_default()
    }

    fn app() -> Router {
        Router::new()
            .route("/slow", get(slow))
            .route("/current", get(lang_of_current))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_millis(20),
            ))
            .layer(middleware::from_fn(request_context))
    }

    #[tokio::test]
    async fn test_echoes_given_request_id() {
        let id = "550e8400-e29b-41d4-a716-446655440000";
        let request = Request::builder()
            .uri("/current")
            .header("x-request-id", id)
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], id);
    }

    #[tokio::test]
    async fn test_context_is_visible_to_the_task() {
        let request = Request::builder()
            .uri("/current?lang=en")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        assert_eq!(&body[..], b"en");
        assert!(current_context().is_none());
    }

    #[tokio::test]
    async fn test_timeout_becomes_error_envelope() {
        let request = Request::builder()
            .uri("/slow?lang=en")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(response.headers().contains_key("x-request-id"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Request timed out");
        assert!(json["data"].is_null());
    }
}
