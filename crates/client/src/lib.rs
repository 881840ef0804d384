//! angola_holidays_client - CLI client for the Angola Holidays API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::HolidaysClient;
pub use error::{ClientError, Result};
