//! Queries over generated calendars.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use super::assemble::compute_year_calendar;
use super::error::RangeOrderError;
use super::normalize::normalize;
use super::types::{Holiday, HolidayCheck, LocalizedHoliday};
use crate::i18n::Language;

/// A date range with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeOrderError> {
        if start > end {
            return Err(RangeOrderError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Calendars for every year from `first` to `last`, concatenated in order.
fn calendars_between(first: i32, last: i32) -> impl Iterator<Item = Holiday> {
    (first..=last).flat_map(compute_year_calendar)
}

/// Holidays whose day lies within `range`, both ends included.
pub fn holidays_in_range(range: DateRange) -> Vec<Holiday> {
    let start = normalize(range.start);
    let end = normalize(range.end);

    calendars_between(range.start.year(), range.end.year())
        .filter(|holiday| holiday.date >= start && holiday.date <= end)
        .collect()
}

/// Holidays whose instant lies in `[now, now + days]`.
///
/// The window may cross New Year; every year it touches is generated.
pub fn upcoming_holidays(now: DateTime<Utc>, days: u32) -> Vec<Holiday> {
    let limit = now + Duration::days(i64::from(days));

    calendars_between(now.year(), limit.year())
        .filter(|holiday| {
            let instant = holiday.date.as_datetime();
            instant >= now && instant <= limit
        })
        .collect()
}

/// Checks whether `date` is a holiday, comparing calendar days.
pub fn check_date(date: NaiveDate) -> HolidayCheck {
    let is_holiday = compute_year_calendar(date.year())
        .iter()
        .any(|holiday| holiday.day() == date);

    HolidayCheck {
        date: normalize(date),
        is_holiday,
    }
}

/// Projects holidays onto a single language.
pub fn localize(holidays: &[Holiday], lang: Language) -> Vec<LocalizedHoliday> {
    holidays.iter().map(|holiday| holiday.localize(lang)).collect()
}
