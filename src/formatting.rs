//! Formatting helper functions for command output
//!
//! This module renders the board, the OKR impact summary and the Markdown
//! report as plain strings.

use crate::insight::{Category, ExtractedData, ExtractedItem, Okr};
use chrono::NaiveDate;

/// "1 OKR" / "3 OKRs"
fn okr_count_label(count: usize) -> String {
    format!("{} OKR{}", count, if count == 1 { "" } else { "s" })
}

fn format_item(item: &ExtractedItem) -> String {
    let mut result = format!("- [{}] {}\n  Speaker: {}\n", item.id, item.text, item.speaker);
    if !item.okr_ids.is_empty() {
        result.push_str(&format!(
            "  Linked: {} ({})\n",
            okr_count_label(item.okr_ids.len()),
            item.okr_ids.join(", ")
        ));
    }
    if let Some(tags) = &item.tags {
        result.push_str(&format!("  Tags: {}\n", tags.join(", ")));
    }
    result
}

/// Format the board, optionally restricted to one category
///
/// # Arguments
/// * `data` - The working set
/// * `filter` - Only show this category when set
///
/// # Returns
/// Formatted string with one section per category
pub fn format_board(data: &ExtractedData, filter: Option<Category>) -> String {
    let categories: Vec<Category> = match filter {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let mut result = String::new();
    for category in categories {
        let items = data.items(category);
        result.push_str(&format!("{} ({})\n", category.title(), items.len()));
        if items.is_empty() {
            result.push_str("  (none)\n");
        }
        for item in items {
            result.push_str(&format_item(item));
        }
        result.push('\n');
    }
    result.trim_end().to_string()
}

/// Format the OKR catalog, marking which OKRs are impacted
///
/// # Arguments
/// * `catalog` - All OKRs
/// * `data` - The working set, if any
pub fn format_okrs(catalog: &[Okr], data: Option<&ExtractedData>) -> String {
    if catalog.is_empty() {
        return "No OKRs configured".to_string();
    }

    let mut result = format!("OKRs ({}):\n", catalog.len());
    for okr in catalog {
        let linked = data.map(|d| d.items_linked_to(&okr.id).count()).unwrap_or(0);
        if linked > 0 {
            result.push_str(&format!(
                "- [{}] {} (impacted by {} item{})\n",
                okr.id,
                okr.text,
                linked,
                if linked == 1 { "" } else { "s" }
            ));
        } else {
            result.push_str(&format!("- [{}] {}\n", okr.id, okr.text));
        }
    }

    let impacted = data.map(|d| d.linked_okrs(catalog).len()).unwrap_or(0);
    if impacted == 0 {
        result.push_str("\nNo items have been mapped to OKRs yet.");
    } else {
        result.push_str(&format!("\nImpact on OKRs: {}", impacted));
    }
    result
}

/// Render the working set as a Markdown report
///
/// # Arguments
/// * `data` - The working set
/// * `catalog` - OKR catalog used for the impact section
/// * `date` - Date printed in the header
pub fn format_markdown_report(data: &ExtractedData, catalog: &[Okr], date: NaiveDate) -> String {
    let mut result = format!("# Insights Map\n\n_Generated {}_\n", date.format("%Y-%m-%d"));

    for category in Category::ALL {
        result.push_str(&format!("\n## {}\n\n", category.title()));
        let items = data.items(category);
        if items.is_empty() {
            result.push_str("_None_\n");
            continue;
        }
        for item in items {
            result.push_str(&format!("- {} _({})_", item.text, item.speaker));
            if !item.okr_ids.is_empty() {
                result.push_str(&format!(" ({})", okr_count_label(item.okr_ids.len())));
            }
            result.push('\n');
        }
    }

    result.push_str("\n## Impact on OKRs\n\n");
    let linked = data.linked_okrs(catalog);
    if linked.is_empty() {
        result.push_str("No items have been mapped to OKRs yet.\n");
    }
    for okr in linked {
        result.push_str(&format!("### {}\n\n", okr.text));
        for item in data.items_linked_to(&okr.id) {
            result.push_str(&format!("- {} ({})\n", item.text, item.category.title()));
        }
        result.push('\n');
    }
    result
}
