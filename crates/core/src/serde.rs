//! Serde helper functions for request body deserialization.
//!
//! API Gateway clients send partial records: a field may be missing,
//! explicitly `null`, or a string. All three collapse to a plain `String`.

use serde::{Deserialize, Deserializer};

/// Deserialize a string field, treating `null` as the empty string.
///
/// Combine with `#[serde(default)]` so missing fields are covered as well.
pub fn deserialize_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

/// Returns true when the value is absent or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Keeps the value only when it has non-whitespace content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
