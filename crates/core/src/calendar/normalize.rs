//! Canonical wire representation of holiday dates.
//!
//! Every holiday date is emitted as the instant one hour after UTC midnight
//! of its calendar day (`YYYY-MM-DDT01:00:00.000Z`), matching Angola's fixed
//! UTC+1 offset. `NaiveDate` carries no timezone, so the result never depends
//! on the host's local offset.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Angola observes UTC+1 all year round (no DST).
pub const ANGOLA_UTC_OFFSET_HOURS: i64 = 1;

/// A holiday date normalized to `T01:00:00.000Z` of its calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedInstant(DateTime<Utc>);

/// Normalizes a calendar day into its canonical instant.
pub fn normalize(date: NaiveDate) -> NormalizedInstant {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    NormalizedInstant(midnight + Duration::hours(ANGOLA_UTC_OFFSET_HOURS))
}

/// Returns the calendar day in Angola at `instant`.
pub fn angola_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant + Duration::hours(ANGOLA_UTC_OFFSET_HOURS)).date_naive()
}

impl NormalizedInstant {
    /// Returns the underlying UTC instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the calendar day this instant was normalized from.
    pub fn date_naive(&self) -> NaiveDate {
        (self.0 - Duration::hours(ANGOLA_UTC_OFFSET_HOURS)).date_naive()
    }
}

impl fmt::Display for NormalizedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for NormalizedInstant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NormalizedInstant {
    /// Accepts any RFC 3339 instant and re-normalizes it onto its calendar day,
    /// so values produced elsewhere still compare against generated holidays.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let instant = DateTime::parse_from_rfc3339(&s)
            .map_err(serde::de::Error::custom)?
            .with_timezone(&Utc);
        Ok(normalize(
            (instant - Duration::hours(ANGOLA_UTC_OFFSET_HOURS)).date_naive(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalized_instant_is_one_am_utc() {
        let instant = normalize(date(2025, 4, 20));
        let dt = instant.as_datetime();

        assert_eq!(dt.hour(), 1);
        assert_eq!(dt.minute(), 0);
        assert_eq!(dt.second(), 0);
        assert_eq!(dt.nanosecond(), 0);
        assert_eq!(dt.date_naive(), date(2025, 4, 20));
    }

    #[test]
    fn test_angola_date_rolls_over_before_utc_midnight() {
        use chrono::TimeZone;

        let late = Utc.with_ymd_and_hms(2025, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(angola_date(late), date(2026, 1, 1));

        let early = Utc.with_ymd_and_hms(2025, 12, 31, 22, 59, 59).unwrap();
        assert_eq!(angola_date(early), date(2025, 12, 31));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            normalize(date(2025, 12, 25)).to_string(),
            "2025-12-25T01:00:00.000Z"
        );
        assert_eq!(
            normalize(date(1975, 1, 1)).to_string(),
            "1975-01-01T01:00:00.000Z"
        );
    }

    #[test]
    fn test_round_trips_calendar_day() {
        let day = date(2024, 2, 29);
        assert_eq!(normalize(day).date_naive(), day);
    }

    #[test]
    fn test_ordering_follows_calendar() {
        assert!(normalize(date(2024, 12, 31)) < normalize(date(2025, 1, 1)));
    }

    #[test]
    fn test_serializes_as_iso_string() {
        let json = serde_json::to_string(&normalize(date(2025, 11, 11))).unwrap();
        assert_eq!(json, "\"2025-11-11T01:00:00.000Z\"");
    }

    #[test]
    fn test_deserialize_renormalizes() {
        let parsed: NormalizedInstant =
            serde_json::from_str("\"2025-11-11T01:00:00.000Z\"").unwrap();
        assert_eq!(parsed, normalize(date(2025, 11, 11)));

        let offset: NormalizedInstant =
            serde_json::from_str("\"2025-11-11T01:00:00+01:00\"").unwrap();
        assert_eq!(offset, normalize(date(2025, 11, 10)));
    }
}
