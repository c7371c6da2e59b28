//! # Vendor Adapter
//!
//! Vendor (farmer/supplier) records arrive with the id under `vendor_id`,
//! `id` or `vid`, and the name under `vendor_name`, `name` or `farmer_name`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::envelope::list_items;
use crate::error::BackendResult;
use crate::fields::first_text;

const ID_KEYS: &[&str] = &["vendor_id", "id", "vid"];
const NAME_KEYS: &[&str] = &["vendor_name", "name", "farmer_name"];
const LIST_KEYS: &[&str] = &["data", "vendors", "rows"];

/// A vendor in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: Option<String>,
    pub gstin: Option<String>,
}

/// Vendor display name, by name-key precedence.
pub fn vendor_name(map: &Map<String, Value>) -> Option<String> {
    first_text(map, NAME_KEYS)
}

/// Maps one vendor record. Records without any usable id are dropped.
pub fn normalize_vendor(value: &Value) -> Option<Vendor> {
    let map = value.as_object()?;
    let Some(id) = first_text(map, ID_KEYS) else {
        debug!("Vendor record without an id, skipping");
        return None;
    };

    Some(Vendor {
        id,
        name: vendor_name(map),
        gstin: first_text(map, &["gstin", "gst_number"]),
    })
}

/// Maps a vendor list response in any known envelope.
pub fn normalize_vendors(value: &Value) -> Vec<Vendor> {
    list_items(value, LIST_KEYS)
        .unwrap_or(&[])
        .iter()
        .filter_map(normalize_vendor)
        .collect()
}

/// Parses and maps a vendor list response.
pub fn parse_vendors(json: &str) -> BackendResult<Vec<Vendor>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(normalize_vendors(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_fallbacks() {
        let ids: Vec<String> = [
            json!({"vendor_id": "V-1", "id": 2}),
            json!({"id": 2, "vid": "V-3"}),
            json!({"vid": 3}),
        ]
        .iter()
        .filter_map(normalize_vendor)
        .map(|v| v.id)
        .collect();

        assert_eq!(ids, ["V-1", "2", "3"]);
    }

    #[test]
    fn test_name_fallbacks() {
        let vendor = normalize_vendor(&json!({"id": 1, "farmer_name": "Ravi Kumar"})).unwrap();
        assert_eq!(vendor.name.as_deref(), Some("Ravi Kumar"));

        let vendor = normalize_vendor(&json!({"id": 1, "name": "Sunrise", "farmer_name": "Ravi"})).unwrap();
        assert_eq!(vendor.name.as_deref(), Some("Sunrise"));
    }

    #[test]
    fn test_records_without_id_are_dropped() {
        assert!(normalize_vendor(&json!({"name": "Nobody"})).is_none());
        assert!(normalize_vendor(&json!("V-1")).is_none());
    }

    #[test]
    fn test_parse_vendors() {
        let vendors = parse_vendors(r#"{"vendors": [{"vid": 7, "name": "Green Acres"}, {"name": "x"}]}"#).unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0].id, "7");
        assert!(parse_vendors("[").is_err());
    }
}
