//! Holiday API operations.

use chrono::NaiveDate;

use angola_holidays_core::calendar::{
    DateRange, HolidayCheck, RangeHolidays, UpcomingHolidays, YearHolidays,
};

use super::HolidaysClient;
use crate::error::{ClientError, Result};

impl HolidaysClient {
    /// List holidays for `year`, or the server's current year.
    pub async fn list_holidays(&self, year: Option<i32>) -> Result<YearHolidays> {
        let query: Vec<(&str, String)> =
            year.map(|y| ("year", y.to_string())).into_iter().collect();
        self.get_data("/holidays", &query).await
    }

    /// List holidays between `start` and `end`, both included.
    pub async fn holidays_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeHolidays> {
        let range =
            DateRange::new(start, end).map_err(|e| ClientError::InvalidInput(e.to_string()))?;

        let query = [
            ("startDate", range.start().to_string()),
            ("endDate", range.end().to_string()),
        ];
        self.get_data("/holidays-by-range", &query).await
    }

    /// Check whether `date` is a holiday.
    pub async fn check_date(&self, date: NaiveDate) -> Result<HolidayCheck> {
        self.get_data("/holidays/check", &[("date", date.to_string())])
            .await
    }

    /// List holidays in the next `days` days (server default when `None`).
    pub async fn upcoming(&self, days: Option<u32>) -> Result<UpcomingHolidays> {
        if let Some(days) = days.filter(|d| !(1..=365).contains(d)) {
            return Err(ClientError::InvalidInput(format!(
                "days must be between 1 and 365, got {days}"
            )));
        }

        let query: Vec<(&str, String)> =
            days.map(|d| ("days", d.to_string())).into_iter().collect();
        self.get_data("/upcoming", &query).await
    }
}
