//! Serde helper functions for query-string deserialization.
//!
//! Query strings like `?year=` arrive as empty strings; these helpers treat
//! them as absent. Anything else is passed through untouched, so validation
//! sees exactly what the caller sent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}
