//! Forgiving field readers for documents written by the browser front end.
//!
//! The front end stores form values as entered: an untouched date input is
//! `""` and a limit comes from `parseInt`, so it may be negative or `null`.
//! These readers map such values to "absent" instead of rejecting the record.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Optional `YYYY-MM-DD` date; blank or unparsable values read as `None`.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse::<NaiveDate>().ok()))
}

/// Optional positive limit; zero, negative, fractional or non-numeric values
/// read as `None` (unlimited).
pub fn optional_limit<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(number
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0))
}
