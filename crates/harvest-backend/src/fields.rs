//! # Field Fallbacks
//!
//! The backend names the same field differently across endpoints
//! (`vendor_id`, `id`, `vid`) and sends ids as numbers or strings. These
//! helpers read such fields in a fixed precedence order.
//!
//! Empty strings, zero, `null` and non-scalar values count as absent, so the
//! next key in the list is tried.

use harvest_core::coerce::coerce_number;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Reads a scalar as trimmed text, `None` when absent or empty.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => {
            let is_zero = n.as_f64().map(|v| v == 0.0).unwrap_or(false);
            (!is_zero).then(|| n.to_string())
        }
        _ => None,
    }
}

/// First key in `keys` holding usable text.
pub fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.get(*key).and_then(text))
}

/// Numeric field, zero when missing or malformed.
pub fn number(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key).map(coerce_number).unwrap_or(0.0)
}

/// First key in `keys` holding a JSON object.
pub fn first_object<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Map<String, Value>> {
    keys.iter().find_map(|key| map.get(*key).and_then(Value::as_object))
}

/// Serde adapter: an id or label sent as a number or a string.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text() {
        assert_eq!(text(&json!("V-12")), Some("V-12".to_string()));
        assert_eq!(text(&json!(" 7 ")), Some("7".to_string()));
        assert_eq!(text(&json!(42)), Some("42".to_string()));
        assert_eq!(text(&json!("")), None);
        assert_eq!(text(&json!(0)), None);
        assert_eq!(text(&json!(null)), None);
        assert_eq!(text(&json!({"id": 1})), None);
    }

    #[test]
    fn test_first_text_precedence() {
        let value = json!({"id": 9, "vid": "x"});
        let map = value.as_object().unwrap();
        assert_eq!(first_text(map, &["vendor_id", "id", "vid"]), Some("9".to_string()));

        let value = json!({"vendor_id": "", "id": 0, "vid": "x"});
        let map = value.as_object().unwrap();
        assert_eq!(first_text(map, &["vendor_id", "id", "vid"]), Some("x".to_string()));
    }

    #[test]
    fn test_number() {
        let value = json!({"cgst": "2.5", "sgst": "abc"});
        let map = value.as_object().unwrap();
        assert_eq!(number(map, "cgst"), 2.5);
        assert_eq!(number(map, "sgst"), 0.0);
        assert_eq!(number(map, "delivery_fee"), 0.0);
    }
}
