pub mod docs;
pub mod error;
pub mod fallback;
pub mod health;
pub mod holidays;
pub mod upcoming;

pub use error::ApiError;
