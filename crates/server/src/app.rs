use std::any::Any;

use axum::{
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    context::{current_context, request_context, RequestContext},
    handlers::{
        docs::api_docs,
        fallback::not_found,
        health::{health, livez},
        holidays::{check_holiday, holidays_by_range, list_holidays},
        upcoming::list_upcoming,
        ApiError,
    },
    rate_limit::rate_limit,
    state::AppState,
};

fn security_headers() -> [(HeaderName, &'static str); 6] {
    [
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
        (header::REFERRER_POLICY, "no-referrer"),
        (
            header::STRICT_TRANSPORT_SECURITY,
            "max-age=15552000; includeSubDomains",
        ),
        (header::X_XSS_PROTECTION, "0"),
        (
            HeaderName::from_static("cross-origin-resource-policy"),
            "same-origin",
        ),
    ]
}

/// Turns a handler panic into the 500 error envelope.
fn panic_response(
    expose_details: bool,
) -> impl FnMut(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |panic| {
        let detail = panic
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_else(|| "unknown panic payload".to_string());

        // Runs inside the `request_context` scope, so the request is known.
        let context = current_context()
            .unwrap_or_else(|| RequestContext::from_request(&HeaderMap::new(), &Uri::default()));

        ApiError::Internal {
            context,
            expose_details,
            source: anyhow::anyhow!("handler panicked: {detail}"),
        }
        .into_response()
    }
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(api_docs))
        .route("/health", get(health))
        .route("/livez", get(livez))
        .route("/holidays", get(list_holidays))
        .route("/holidays/check", get(check_holiday))
        .route("/holidays-by-range", get(holidays_by_range))
        .route("/upcoming", get(list_upcoming))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found);

    with_middleware(router, state)
}

/// Wraps `router` in the middleware stack shared by every route.
fn with_middleware(router: Router<AppState>, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let router = router.layer(middleware::from_fn_with_state(state.clone(), rate_limit));

    let router = security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        });

    router
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        .layer(CatchPanicLayer::custom(panic_response(
            state.config.is_development(),
        )))
        .layer(middleware::from_fn(request_context))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
