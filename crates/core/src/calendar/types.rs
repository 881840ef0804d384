use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

use super::normalize::NormalizedInstant;
use crate::i18n::{Language, LocalizedText};

/// Where a holiday in a generated calendar came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayOrigin {
    /// A fixed-date entry of the holiday table.
    Fixed,
    /// A rest day adjacent to a fixed holiday on a Tuesday or Thursday.
    Bridge,
    /// An Easter-dependent holiday.
    Movable,
}

/// A holiday with all of its bilingual text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub date: NormalizedInstant,
    pub name: LocalizedText,
    pub holiday_type: LocalizedText,
    pub description: LocalizedText,
    pub origin: HolidayOrigin,
}

impl Holiday {
    /// Returns true for Easter, Good Friday and Carnival.
    pub fn is_movable(&self) -> bool {
        self.origin == HolidayOrigin::Movable
    }

    /// Returns true for synthesized bridge days.
    pub fn is_bridge(&self) -> bool {
        self.origin == HolidayOrigin::Bridge
    }

    /// Returns the calendar day of this holiday.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Projects this holiday onto a single language.
    pub fn localize(&self, lang: Language) -> LocalizedHoliday {
        LocalizedHoliday {
            date: self.date,
            name: self.name.get(lang).to_string(),
            holiday_type: self.holiday_type.get(lang).to_string(),
            description: self.description.get(lang).to_string(),
            is_movable: self.is_movable().then_some(true),
        }
    }
}

/// A holiday as sent on the wire, after localization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedHoliday {
    pub date: NormalizedInstant,
    pub name: String,
    #[serde(rename = "type")]
    pub holiday_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_movable: Option<bool>,
}

/// A row of the static fixed-holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHolidayDefinition {
    pub month: Month,
    pub day: u32,
    pub name: LocalizedText,
    pub holiday_type: LocalizedText,
    pub description: LocalizedText,
}

impl FixedHolidayDefinition {
    /// Returns the date of this holiday in `year`.
    ///
    /// # Panics
    /// Panics if the month/day pair does not exist in `year` or the year is
    /// outside the range supported by `chrono::NaiveDate`.
    pub fn date_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month.number_from_month(), self.day)
            .expect("Fixed holiday table entries must be valid in every year")
    }
}

/// Result of checking whether a single day is a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCheck {
    pub date: NormalizedInstant,
    pub is_holiday: bool,
}
