//! Functional core of the Angola Holidays API.
//!
//! Everything in this crate is pure: calendars are recomputed from a static
//! table on every call and no I/O is performed.

pub mod calendar;
pub mod envelope;
pub mod i18n;
pub mod serde;
