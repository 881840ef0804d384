mod query;

pub use query::{
    CheckQuery, FieldError, RangeQuery, UpcomingQuery, YearQuery, DEFAULT_UPCOMING_DAYS,
    MAX_UPCOMING_DAYS, MIN_YEAR,
};
