//! # Procurement Adapter
//!
//! A procurement request stores its tax rates and delivery fee once, on the
//! document. Its `items` arrive either as a JSON array or as a JSON-encoded
//! string of that array:
//!
//! ```json
//! { "procurement_id": 17, "vendor_name": "Sunrise Farms",
//!   "items": "[{\"product_id\":7,\"quantity\":2,\"unit_price\":50}]",
//!   "cgst": "5", "sgst": "5", "delivery_fee": 10 }
//! ```
//!
//! A string that does not decode to an array yields no items. The request
//! is still returned, and totals to zero.

use harvest_core::coerce::lenient_f64;
use harvest_core::types::{LineItem, Procurement, TaxRates};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope::list_items;
use crate::error::{BackendError, BackendResult};
use crate::fields::{first_object, first_text, lenient_text, number};
use crate::order::UNNUMBERED;
use crate::vendor::vendor_name;

const LIST_KEYS: &[&str] = &["data", "procurements", "rows"];
const ITEM_NAME_KEYS: &[&str] = &["product_name", "name"];

#[derive(Debug, Deserialize)]
struct RawProcurementItem {
    #[serde(default, deserialize_with = "lenient_text")]
    product_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    quantity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    unit_price: f64,
}

fn normalize_procurement_item(value: &Value) -> Option<LineItem> {
    let Some(map) = value.as_object() else {
        warn!("Procurement item is not an object, skipping");
        return None;
    };
    match serde_json::from_value::<RawProcurementItem>(value.clone()) {
        Ok(raw) => Some(LineItem {
            product_id: raw.product_id,
            name: first_text(map, ITEM_NAME_KEYS),
            ..LineItem::new(raw.quantity, raw.unit_price)
        }),
        Err(e) => {
            warn!(error = %e, "Unreadable procurement item, skipping");
            None
        }
    }
}

/// Reads procurement items from a native array or a JSON-encoded string.
///
/// Never fails: anything that is not an array of items becomes an empty
/// list.
pub fn procurement_items(value: Option<&Value>) -> Vec<LineItem> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(normalize_procurement_item).collect(),
        Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(items)) => {
                debug!(count = items.len(), "Decoded string-encoded procurement items");
                items.iter().filter_map(normalize_procurement_item).collect()
            }
            Ok(_) => {
                warn!("Procurement items string is not an array, treating as empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Malformed procurement items string, treating as empty");
                Vec::new()
            }
        },
        None | Some(Value::Null) => Vec::new(),
        Some(_) => {
            warn!("Procurement items have an unexpected type, treating as empty");
            Vec::new()
        }
    }
}

/// Maps one procurement request.
pub fn normalize_procurement(value: &Value) -> BackendResult<Procurement> {
    let map = value.as_object().ok_or(BackendError::UnexpectedShape {
        entity: "procurement",
        expected: "an object",
    })?;

    let procurement_id =
        first_text(map, &["procurement_id", "id"]).unwrap_or_else(|| UNNUMBERED.to_string());
    let vendor = first_text(map, &["vendor_name"])
        .or_else(|| first_object(map, &["Vendor", "vendor"]).and_then(vendor_name));

    let mut procurement = Procurement::new(
        procurement_id,
        procurement_items(map.get("items")),
        TaxRates::new(number(map, "cgst"), number(map, "sgst")),
        number(map, "delivery_fee"),
    );
    procurement.vendor_name = vendor;
    Ok(procurement)
}

/// Parses and maps a single procurement request.
pub fn parse_procurement(json: &str) -> BackendResult<Procurement> {
    let value: Value = serde_json::from_str(json)?;
    normalize_procurement(&value)
}

/// Parses and maps a procurement list response. Entries that are not
/// objects are skipped.
pub fn parse_procurements(json: &str) -> BackendResult<Vec<Procurement>> {
    let value: Value = serde_json::from_str(json)?;
    let procurements = list_items(&value, LIST_KEYS)
        .unwrap_or(&[])
        .iter()
        .filter_map(|entry| match normalize_procurement(entry) {
            Ok(procurement) => Some(procurement),
            Err(e) => {
                warn!(error = %e, "Skipping procurement entry");
                None
            }
        })
        .collect();
    Ok(procurements)
}
