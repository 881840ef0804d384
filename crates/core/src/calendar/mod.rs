mod assemble;
mod easter;
mod error;
mod fixed;
mod movable;
mod normalize;
mod operations;
mod responses;
mod types;

pub use assemble::compute_year_calendar;
pub use easter::calculate_easter;
pub use error::RangeOrderError;
pub use fixed::{bridge_day, fixed_holidays, FIXED_HOLIDAYS, NATIONAL_HOLIDAY};
pub use movable::{movable_dates, MovableDates};
pub use normalize::{angola_date, normalize, NormalizedInstant, ANGOLA_UTC_OFFSET_HOURS};
pub use operations::{check_date, holidays_in_range, localize, upcoming_holidays, DateRange};
pub use responses::{RangeHolidays, UpcomingHolidays, YearHolidays};
pub use types::{
    FixedHolidayDefinition, Holiday, HolidayCheck, HolidayOrigin, LocalizedHoliday,
};
