//! Tag handler for the insight map

use crate::InsightMapHandler;
use crate::validation;
use anyhow::Result;

impl InsightMapHandler {
    /// **Tag**: Replace the tags of an item.
    /// **Note**: No tags records an explicit clear; `untag` forgets tags entirely.
    pub async fn handle_tag(&self, category: &str, id: &str, tags: &[String], untag: bool) -> Result<String> {
        let category = validation::parse_category(category)?;
        let id = validation::normalize_item_id(id);
        let tags = if untag {
            None
        } else {
            Some(validation::normalize_tags(tags))
        };

        let message = match &tags {
            None => format!("Item {} untagged", id),
            Some(t) if t.is_empty() => format!("Item {} tags cleared", id),
            Some(t) => format!("Item {} tagged: {}", id, t.join(", ")),
        };
        self.board()?.set_tags(category, &id, tags)?;
        Ok(message)
    }
}
