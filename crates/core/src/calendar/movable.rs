use chrono::{Duration, NaiveDate};

use super::easter::calculate_easter;

/// Days between Good Friday and Easter Sunday.
const GOOD_FRIDAY_OFFSET: i64 = 2;
/// Days between Carnival (Shrove Tuesday) and Easter Sunday.
const CARNIVAL_OFFSET: i64 = 47;

/// The Easter-dependent holidays of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableDates {
    pub easter: NaiveDate,
    pub good_friday: NaiveDate,
    pub carnival: NaiveDate,
}

/// Derives Easter, Good Friday and Carnival for `year`.
pub fn movable_dates(year: i32) -> MovableDates {
    let easter = calculate_easter(year);

    MovableDates {
        easter,
        good_friday: easter - Duration::days(GOOD_FRIDAY_OFFSET),
        carnival: easter - Duration::days(CARNIVAL_OFFSET),
    }
}
