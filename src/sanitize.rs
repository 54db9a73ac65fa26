//! Sanitization of persisted insight state
//!
//! Persisted state may have been written by an older version of this tool,
//! edited by hand, or truncated. These functions turn an arbitrary JSON value
//! into a well-formed [`ExtractedData`] without ever failing: invalid items
//! are dropped one by one, invalid categories become empty, and missing
//! fields are defaulted.

use crate::insight::{Category, ExtractedData, ExtractedItem, mint_id};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;

/// Sanitize a single raw item purported to belong to `category`
///
/// # Arguments
///
/// * `raw` - Arbitrary JSON value
/// * `category` - Category the item is stored under
///
/// # Returns
///
/// A fully-formed item, or `None` if `raw` is not an object or its `text`
/// is not a string with non-whitespace content
pub fn sanitize_item(raw: &Value, category: Category) -> Option<ExtractedItem> {
    sanitize_item_with(raw, category, &mut mint_id)
}

/// Sanitize a raw container into a well-formed data set
///
/// Each category key is handled independently: an array is sanitized item
/// by item (dropping rejects, keeping order), anything else is treated as
/// an empty category. Ids minted during one call never collide with each
/// other or with ids already present in the input.
///
/// # Arguments
///
/// * `raw` - Arbitrary JSON value
///
/// # Returns
///
/// `None` if `raw` is not a JSON object (including `null` and arrays),
/// otherwise a complete data set
pub fn sanitize_container(raw: &Value) -> Option<ExtractedData> {
    let record = raw.as_object()?;

    let mut taken: HashSet<String> = Category::ALL
        .iter()
        .filter_map(|category| record.get(category.key()).and_then(Value::as_array))
        .flatten()
        .filter_map(|item| non_empty_str(item.get("id")))
        .map(str::to_string)
        .collect();

    let mut mint_unique = || loop {
        let id = mint_id();
        if taken.insert(id.clone()) {
            return id;
        }
    };

    let mut data = ExtractedData::new();
    for category in Category::ALL {
        let Some(items) = record.get(category.key()).and_then(Value::as_array) else {
            if record.contains_key(category.key()) {
                debug!("Category '{}' is not an array, treating as empty", category);
            }
            continue;
        };

        let mut dropped = 0usize;
        for raw_item in items {
            match sanitize_item_with(raw_item, category, &mut mint_unique) {
                Some(item) => data.push(category, item),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!("Dropped {} invalid item(s) from '{}'", dropped, category);
        }
    }

    Some(data)
}

fn sanitize_item_with<F>(raw: &Value, category: Category, mint: &mut F) -> Option<ExtractedItem>
where
    F: FnMut() -> String,
{
    let record = raw.as_object()?;
    let text = non_empty_str(record.get("text"))?.trim().to_string();

    let id = match non_empty_str(record.get("id")) {
        Some(id) => id.to_string(),
        None => mint(),
    };

    let speaker = non_empty_str(record.get("speaker"))
        .unwrap_or(category.default_speaker())
        .to_string();

    Some(ExtractedItem {
        id,
        category,
        text,
        speaker,
        okr_ids: string_list(record, "okrIds").unwrap_or_default(),
        tags: string_list(record, "tags"),
        timestamp: record
            .get("timestamp")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

/// A string field with non-whitespace content
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// The string elements of an array field, in order
///
/// Returns `None` when the field is missing or not an array.
fn string_list(record: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    record.get(field).and_then(Value::as_array).map(|values| {
        values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}
