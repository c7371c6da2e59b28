//! # Category Adapter
//!
//! Category list responses come back bare, under `data`, under
//! `categories`, under `data.categories`, or under `rows`. All of them map
//! to one `Vec<Category>`; an unknown shape is an empty list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope::list_items;
use crate::error::BackendResult;
use crate::fields::first_text;

const LIST_KEYS: &[&str] = &["data", "categories", "rows"];

/// A product category in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Maps one category record. Records without an id are dropped; a missing
/// name is left empty.
pub fn normalize_category(value: &Value) -> Option<Category> {
    let map = value.as_object()?;
    let Some(id) = first_text(map, &["category_id", "id"]) else {
        debug!("Category record without an id, skipping");
        return None;
    };

    Some(Category {
        id,
        name: first_text(map, &["category_name", "name"]).unwrap_or_default(),
    })
}

/// Maps a category list response in any known envelope.
pub fn normalize_categories(value: &Value) -> Vec<Category> {
    let Some(records) = list_items(value, LIST_KEYS) else {
        warn!("Category response had no recognizable list");
        return Vec::new();
    };
    records.iter().filter_map(normalize_category).collect()
}

/// Parses and maps a category list response.
pub fn parse_categories(json: &str) -> BackendResult<Vec<Category>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(normalize_categories(&value))
}
