use chrono::NaiveDate;
use thiserror::Error;

/// A date range whose start is after its end.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid date range: start date {start} is after end date {end}")]
pub struct RangeOrderError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_order_error_display() {
        let error = RangeOrderError {
            start: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: start date 2025-12-31 is after end date 2025-01-01"
        );
    }
}
