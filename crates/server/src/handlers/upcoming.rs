use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use chrono::Utc;

use angola_holidays_core::{
    calendar::{localize, upcoming_holidays, UpcomingHolidays},
    envelope::ApiResponse,
    i18n::Message,
};

use crate::{context::RequestContext, handlers::ApiError, models::UpcomingQuery};

/// GET /upcoming - Holidays within the next `days` days (default 30).
pub async fn list_upcoming(
    ctx: RequestContext,
    query: Result<Query<UpcomingQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<UpcomingHolidays>>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::rejected(Message::InvalidDays, ctx.lang, rejection))?;

    // Bad values are reported with the message alone.
    let days = query
        .validate()
        .map_err(|_| ApiError::validation(Message::InvalidDays, ctx.lang, Vec::new()))?;

    let now = Utc::now();
    let upcoming = localize(&upcoming_holidays(now, days), ctx.lang);

    Ok(Json(ApiResponse::success(UpcomingHolidays::new(
        days,
        now.date_naive(),
        upcoming,
    ))))
}
