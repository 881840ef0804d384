//! Axum extractor for RequestContext.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, HeaderMap, Uri},
};
use serde::Deserialize;
use uuid::Uuid;

use angola_holidays_core::i18n::Language;

use super::types::{RequestContext, RequestId};

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

/// Reads `?lang=` from a request URI; anything unsupported means Portuguese.
pub fn language_from_uri(uri: &Uri) -> Language {
    let lang = Query::<LangQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(query)| query.lang);
    Language::from_code_or_default(lang.as_deref())
}

impl RequestContext {
    /// Builds the context for a request from its headers and URI.
    pub fn from_request(headers: &HeaderMap, uri: &Uri) -> Self {
        RequestContext {
            request_id: extract_request_id(headers),
            lang: language_from_uri(uri),
            path: uri.path().to_string(),
        }
    }
}

/// Reuses the context stored by the `request_context` middleware, so handlers
/// log the same request id; builds a fresh one otherwise.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| RequestContext::from_request(&parts.headers, &parts.uri)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_request_id_from_header() {
        let mut headers = HeaderMap::new();
        let id = "550e8400-e29b-41d4-a716-446655440000";
        headers.insert("x-request-id", id.parse().unwrap());

        let request_id = extract_request_id(&headers);
        assert_eq!(request_id.to_string(), id);
    }

    #[test]
    fn test_extract_request_id_generates_when_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "not-a-uuid".parse().unwrap());

        let request_id = extract_request_id(&headers);

        Uuid::parse_str(&request_id.to_string()).expect("Should be valid UUID");
    }

    #[test]
    fn test_language_from_uri() {
        let uri: Uri = "/holidays?year=2025&lang=en".parse().unwrap();
        assert_eq!(language_from_uri(&uri), Language::En);

        let uri: Uri = "/holidays?lang=pt".parse().unwrap();
        assert_eq!(language_from_uri(&uri), Language::Pt);
    }

    #[tokio::test]
    async fn test_extractor_prefers_stored_context() {
        let stored = RequestContext {
            request_id: RequestId::new(),
            lang: Language::En,
            path: "/holidays".to_string(),
        };
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/holidays?lang=pt")
            .body(())
            .unwrap()
            .into_parts();
        parts.extensions.insert(stored.clone());

        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(ctx.request_id, stored.request_id);
        assert_eq!(ctx.lang, Language::En);
    }

    #[test]
    fn test_language_defaults_to_portuguese() {
        for uri in ["/holidays", "/holidays?lang=fr", "/holidays?lang="] {
            let uri: Uri = uri.parse().unwrap();
            assert_eq!(language_from_uri(&uri), Language::Pt, "{uri}");
        }
    }
}
