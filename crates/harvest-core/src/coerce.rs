//! # Lenient Number Coercion
//!
//! The backend sends numbers as JSON numbers, numeric strings, empty strings,
//! `null`, or not at all, depending on the endpoint. Everything here maps
//! those shapes to a finite `f64`, and anything unusable maps to `0.0`.
//!
//! ```text
//!   12.5      → 12.5
//!   "12.5"    → 12.5
//!   " 7 "     → 7.0
//!   ""        → 0.0
//!   "abc"     → 0.0
//!   null      → 0.0
//!   true      → 0.0
//!   [1, 2]    → 0.0
//! ```
//!
//! The serde adapters let raw payload structs opt in field by field:
//!
//! ```rust
//! use serde::Deserialize;
//! use harvest_core::coerce::lenient_f64;
//!
//! #[derive(Deserialize)]
//! struct RawItem {
//!     #[serde(default, deserialize_with = "lenient_f64")]
//!     unit_price: f64,
//! }
//!
//! let item: RawItem = serde_json::from_str(r#"{"unit_price": "abc"}"#).unwrap();
//! assert_eq!(item.unit_price, 0.0);
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Returns `value` if it is finite, otherwise `0.0`.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parses a numeric string, yielding `None` for anything that is not a
/// finite number once trimmed.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Reads a JSON value as a number, or `None` if it does not hold one.
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Reads a JSON value as a number, treating anything unusable as zero.
#[inline]
pub fn coerce_number(value: &Value) -> f64 {
    number_from_value(value).unwrap_or(0.0)
}

/// Serde adapter: any JSON value to a finite `f64`, zero when unusable.
///
/// Pair with `#[serde(default)]` so a missing field is zero as well.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_number).unwrap_or(0.0))
}

/// Serde adapter for optional numbers such as a stored `line_total`.
///
/// Unusable values become `None` rather than zero, so callers can fall back
/// to a derived figure instead of trusting a zero that was never sent.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}
