use crate::{context::RequestContext, handlers::ApiError};

/// Any unmatched route.
pub async fn not_found(ctx: RequestContext) -> ApiError {
    tracing::debug!(request_id = %ctx.request_id, path = %ctx.path, "No route matched");
    ApiError::NotFound { lang: ctx.lang }
}
