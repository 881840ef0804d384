//! Query parameters accepted by the holiday endpoints and their validation.
//!
//! Raw values arrive as strings; nothing reaches the calendar core until it
//! has been converted into a well-typed, in-range value here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use angola_holidays_core::serde::deserialize_optional_string;

/// Earliest year the API answers for.
pub const MIN_YEAR: i32 = 1975;
/// Window used by `/upcoming` when `days` is omitted.
pub const DEFAULT_UPCOMING_DAYS: u32 = 30;
/// Largest window accepted by `/upcoming`.
pub const MAX_UPCOMING_DAYS: u32 = 365;

/// A single rejected query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_year(raw: Option<&str>) -> Result<Option<i32>, FieldError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    if !is_digits(raw, 4) {
        return Err(FieldError::new("year", "Year must be a 4-digit number"));
    }

    let year: i32 = raw
        .parse()
        .map_err(|_| FieldError::new("year", "Year must be a 4-digit number"))?;

    if year < MIN_YEAR {
        return Err(FieldError::new(
            "year",
            format!("Year must be greater than or equal to {MIN_YEAR}"),
        ));
    }

    Ok(Some(year))
}

fn parse_date(field: &'static str, raw: Option<&str>) -> Result<NaiveDate, FieldError> {
    let Some(raw) = raw else {
        return Err(FieldError::new(field, "Required"));
    };

    let shaped = raw.len() == 10
        && raw.split('-').map(str::len).eq([4, 2, 2])
        && raw.bytes().filter(|b| *b != b'-').all(|b| b.is_ascii_digit());
    if !shaped {
        return Err(FieldError::new(field, "Invalid date format"));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FieldError::new(field, "Invalid date"))
}

fn parse_days(raw: Option<&str>) -> Result<u32, FieldError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_UPCOMING_DAYS);
    };

    // `u32::from_str` accepts a leading `+`; only plain digits are allowed.
    raw.bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| raw.parse::<u32>().ok())
        .flatten()
        .filter(|days| (1..=MAX_UPCOMING_DAYS).contains(days))
        .ok_or_else(|| {
            FieldError::new(
                "days",
                format!("Days must be an integer between 1 and {MAX_UPCOMING_DAYS}"),
            )
        })
}

/// Query parameters for `GET /holidays`.
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub year: Option<String>,
}

impl YearQuery {
    /// Returns the requested year, or `None` for "current year".
    pub fn validate(&self) -> Result<Option<i32>, FieldError> {
        parse_year(self.year.as_deref())
    }
}

/// Query parameters for `GET /holidays/check`.
#[derive(Debug, Default, Deserialize)]
pub struct CheckQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
}

impl CheckQuery {
    pub fn validate(&self) -> Result<NaiveDate, FieldError> {
        parse_date("date", self.date.as_deref())
    }
}

/// Query parameters for `GET /holidays-by-range`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end_date: Option<String>,
}

impl RangeQuery {
    /// Returns both dates, or every field that failed.
    ///
    /// Ordering of the two dates is checked later, by the calendar core.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), Vec<FieldError>> {
        match (
            parse_date("startDate", self.start_date.as_deref()),
            parse_date("endDate", self.end_date.as_deref()),
        ) {
            (Ok(start), Ok(end)) => Ok((start, end)),
            (start, end) => Err([start.err(), end.err()].into_iter().flatten().collect()),
        }
    }
}

/// Query parameters for `GET /upcoming`.
#[derive(Debug, Default, Deserialize)]
pub struct UpcomingQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub days: Option<String>,
}

impl UpcomingQuery {
    pub fn validate(&self) -> Result<u32, FieldError> {
        parse_days(self.days.as_deref())
    }
}
