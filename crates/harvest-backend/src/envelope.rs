//! # Response Envelopes
//!
//! List endpoints answer in several shapes. [`list_items`] finds the list in
//! any of them:
//!
//! ```text
//!   [ ... ]                          bare array
//!   { "data": [ ... ] }              wrapped under one of the given keys
//!   { "data": { "categories": [ ... ] } }   wrapped twice
//!   anything else                    None
//! ```
//!
//! An empty list under a known key is still a list, and comes back as
//! `Some(&[])`.

use serde_json::Value;

/// Returns the list inside `value`, looking under `keys` in order.
///
/// A key holding an object is searched again with the same keys, so
/// `{data: {categories: [...]}}` resolves with `["data", "categories"]`.
pub fn list_items<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a [Value]> {
    match value {
        Value::Array(items) => Some(items.as_slice()),
        Value::Object(map) => keys
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|inner| match inner {
                Value::Array(items) => Some(items.as_slice()),
                Value::Object(_) => list_items(inner, keys),
                _ => None,
            }),
        _ => None,
    }
}
