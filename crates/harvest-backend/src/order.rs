//! # Order Adapter
//!
//! Order item rows look like this, with the joined product under `Product`:
//!
//! ```json
//! {
//!   "order_id": 1001, "product_id": 7,
//!   "quantity": "2", "unit_price": 50, "line_total": "100.00",
//!   "Product": { "cgst": 2.5, "sgst": 2.5, "delivery_fee": 10, "product_name": "Tomatoes" }
//! }
//! ```
//!
//! An order is either an object carrying its items, or just the bare array
//! of item rows from the order-items endpoint.

use harvest_core::coerce::{lenient_f64, lenient_opt_f64};
use harvest_core::types::{LineItem, Order, ProductCharges};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::envelope::list_items;
use crate::error::{BackendError, BackendResult};
use crate::fields::{first_object, first_text, lenient_text};

/// Invoice number used when a payload carries no order id.
pub const UNNUMBERED: &str = "N/A";

const ITEM_KEYS: &[&str] = &["items", "OrderItems", "order_items"];
const PRODUCT_KEYS: &[&str] = &["Product", "product"];
const LIST_KEYS: &[&str] = &["data", "orders", "rows"];

#[derive(Debug, Deserialize)]
struct RawOrderItem {
    #[serde(default, deserialize_with = "lenient_text")]
    product_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    quantity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    unit_price: f64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    line_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    product_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    #[serde(default, deserialize_with = "lenient_f64")]
    cgst: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    sgst: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    delivery_fee: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    product_name: Option<String>,
}

impl RawOrderItem {
    fn into_line_item(self, joined: Option<&Map<String, Value>>) -> LineItem {
        let product = joined.and_then(|map| {
            match serde_json::from_value::<RawProduct>(Value::Object(map.clone())) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(error = %e, "Unreadable joined product, treating as a join miss");
                    None
                }
            }
        });

        let name = product
            .as_ref()
            .and_then(|p| p.product_name.clone())
            .or(self.product_name)
            .filter(|name| !name.trim().is_empty());

        LineItem {
            product_id: self.product_id,
            name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_total: self.line_total,
            product: product.map(|p| ProductCharges::new(p.cgst, p.sgst, p.delivery_fee)),
        }
    }
}

/// Maps one order item row. Rows that are not JSON objects are dropped.
///
/// The joined product is read from `Product`, falling back to `product`.
/// A row without either is a join miss.
pub fn normalize_order_item(value: &Value) -> Option<LineItem> {
    let Some(map) = value.as_object() else {
        warn!("Order item is not an object, skipping");
        return None;
    };
    match serde_json::from_value::<RawOrderItem>(value.clone()) {
        Ok(raw) => Some(raw.into_line_item(first_object(map, PRODUCT_KEYS))),
        Err(e) => {
            warn!(error = %e, "Unreadable order item, skipping");
            None
        }
    }
}

/// Maps a list of order item rows.
pub fn normalize_order_items(values: &[Value]) -> Vec<LineItem> {
    values.iter().filter_map(normalize_order_item).collect()
}

/// Maps an order object, or a bare array of its item rows.
pub fn normalize_order(value: &Value) -> BackendResult<Order> {
    match value {
        Value::Array(rows) => {
            let order_id = rows
                .iter()
                .filter_map(Value::as_object)
                .find_map(|row| first_text(row, &["order_id"]))
                .unwrap_or_else(|| UNNUMBERED.to_string());
            debug!(%order_id, rows = rows.len(), "Order read from bare item rows");
            Ok(Order::new(order_id, normalize_order_items(rows)))
        }
        Value::Object(map) => {
            let order_id = first_text(map, &["order_id", "id"]).unwrap_or_else(|| UNNUMBERED.to_string());
            let rows = ITEM_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array))
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let customer_name = first_text(map, &["customer_name"]).or_else(|| {
                first_object(map, &["Customer", "customer"])
                    .and_then(|customer| first_text(customer, &["customer_name", "name"]))
            });

            let mut order = Order::new(order_id, normalize_order_items(rows));
            order.customer_name = customer_name;
            Ok(order)
        }
        _ => Err(BackendError::UnexpectedShape {
            entity: "order",
            expected: "an object or an array of item rows",
        }),
    }
}

/// Parses and maps a single order.
pub fn parse_order(json: &str) -> BackendResult<Order> {
    let value: Value = serde_json::from_str(json)?;
    normalize_order(&value)
}

/// Parses and maps an order list response. Entries that are not orders are
/// skipped.
pub fn parse_orders(json: &str) -> BackendResult<Vec<Order>> {
    let value: Value = serde_json::from_str(json)?;
    let orders = list_items(&value, LIST_KEYS)
        .unwrap_or(&[])
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| match normalize_order(entry) {
            Ok(order) => Some(order),
            Err(e) => {
                warn!(error = %e, "Skipping order entry");
                None
            }
        })
        .collect();
    Ok(orders)
}
