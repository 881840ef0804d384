//! Request-scoped context module.
//!
//! Provides `RequestContext` extractor that bundles request-scoped state
//! to complement application-scoped `AppState`, and the middleware that
//! creates it once per request.

mod extractor;
mod middleware;
mod types;

pub use extractor::language_from_uri;
pub use middleware::{current_context, request_context};
pub use types::RequestContext;
