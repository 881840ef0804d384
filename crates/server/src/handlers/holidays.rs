//! Holiday listing, range and date-check handlers.

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use chrono::{Datelike, Utc};

use angola_holidays_core::{
    calendar::{
        angola_date, check_date, compute_year_calendar, holidays_in_range, localize, DateRange,
        HolidayCheck, RangeHolidays, YearHolidays,
    },
    envelope::ApiResponse,
    i18n::Message,
};

use crate::{
    context::RequestContext,
    handlers::ApiError,
    models::{CheckQuery, RangeQuery, YearQuery},
};

/// GET /holidays - Every holiday of a year (defaults to the current year in Angola).
pub async fn list_holidays(
    ctx: RequestContext,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<YearHolidays>>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::rejected(Message::InvalidParams, ctx.lang, rejection))?;

    let year = query
        .validate()
        .map_err(|e| ApiError::validation(Message::InvalidParams, ctx.lang, vec![e]))?
        .unwrap_or_else(|| angola_date(Utc::now()).year());

    let holidays = localize(&compute_year_calendar(year), ctx.lang);

    tracing::debug!(
        request_id = %ctx.request_id,
        year,
        count = holidays.len(),
        "Listed holidays"
    );

    Ok(Json(ApiResponse::success(YearHolidays::new(year, holidays))))
}

/// GET /holidays/check - Whether a single date is a holiday.
pub async fn check_holiday(
    ctx: RequestContext,
    query: Result<Query<CheckQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<HolidayCheck>>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::rejected(Message::InvalidDate, ctx.lang, rejection))?;

    let date = query
        .validate()
        .map_err(|e| ApiError::validation(Message::InvalidDate, ctx.lang, vec![e]))?;

    Ok(Json(ApiResponse::success(check_date(date))))
}

/// GET /holidays-by-range - Holidays between two dates, both included.
pub async fn holidays_by_range(
    ctx: RequestContext,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<RangeHolidays>>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::rejected(Message::InvalidDate, ctx.lang, rejection))?;

    let (start, end) = query
        .validate()
        .map_err(|errors| ApiError::validation(Message::InvalidDate, ctx.lang, errors))?;

    let range = DateRange::new(start, end).map_err(|source| ApiError::RangeOrder {
        lang: ctx.lang,
        source,
    })?;

    let holidays = localize(&holidays_in_range(range), ctx.lang);

    tracing::debug!(
        request_id = %ctx.request_id,
        %start,
        %end,
        count = holidays.len(),
        "Listed holidays in range"
    );

    Ok(Json(ApiResponse::success(RangeHolidays::new(
        start, end, holidays,
    ))))
}
