//! Validation helper functions for command input
//!
//! This module contains parsing of category arguments, id normalization and
//! error messages for invalid OKR references.

use crate::insight::{Category, Okr};
use anyhow::Result;

/// Parse and validate a category argument
///
/// # Arguments
/// * `category_str` - Category name, plural or singular (e.g. "insights", "idea")
///
/// # Returns
/// Result containing the parsed Category or an error listing valid options
pub fn parse_category(category_str: &str) -> Result<Category> {
    category_str.parse::<Category>().map_err(anyhow::Error::msg)
}

/// Normalize an item id by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use insight_map::validation::normalize_item_id;
/// assert_eq!(normalize_item_id("  a1b2c3 "), "a1b2c3");
/// ```
pub fn normalize_item_id(item_id: &str) -> String {
    item_id.trim().to_string()
}

/// Normalize a list of OKR ids: trim each, drop blanks, keep order
pub fn normalize_okr_ids(okr_ids: &[String]) -> Vec<String> {
    okr_ids
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a list of tags: trim each, drop blanks, keep order
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    normalize_okr_ids(tags)
}

/// Format an error message for an unknown OKR with the available OKRs listed
///
/// # Arguments
/// * `okr_id` - The invalid OKR id that was provided
/// * `catalog` - The OKR catalog
///
/// # Returns
/// A formatted error message including the list of available OKR ids
pub fn format_unknown_okr_error(okr_id: &str, catalog: &[Okr]) -> String {
    if catalog.is_empty() {
        format!(
            "OKR '{}' does not exist. No OKRs are configured; add [[okrs]] entries to the config file.",
            okr_id
        )
    } else {
        let okr_list: Vec<&str> = catalog.iter().map(|okr| okr.id.as_str()).collect();
        format!(
            "OKR '{}' does not exist.\nAvailable OKRs: {}",
            okr_id,
            okr_list.join(", ")
        )
    }
}
