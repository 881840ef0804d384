//! Response payloads shared between the server and the client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::LocalizedHoliday;

/// Payload of `GET /holidays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearHolidays {
    pub year: i32,
    pub count: usize,
    pub holidays: Vec<LocalizedHoliday>,
}

impl YearHolidays {
    pub fn new(year: i32, holidays: Vec<LocalizedHoliday>) -> Self {
        Self {
            year,
            count: holidays.len(),
            holidays,
        }
    }
}

/// Payload of `GET /holidays-by-range`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeHolidays {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub count: usize,
    pub holidays: Vec<LocalizedHoliday>,
}

impl RangeHolidays {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        holidays: Vec<LocalizedHoliday>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            count: holidays.len(),
            holidays,
        }
    }
}

/// Payload of `GET /upcoming`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingHolidays {
    pub days: u32,
    pub from_date: NaiveDate,
    pub count: usize,
    pub upcoming: Vec<LocalizedHoliday>,
}

impl UpcomingHolidays {
    pub fn new(days: u32, from_date: NaiveDate, upcoming: Vec<LocalizedHoliday>) -> Self {
        Self {
            days,
            from_date,
            count: upcoming.len(),
            upcoming,
        }
    }
}
