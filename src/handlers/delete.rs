//! Delete handler for the insight map

use crate::InsightMapHandler;
use crate::validation;
use anyhow::Result;

impl InsightMapHandler {
    /// **Delete**: Remove an item from its category.
    pub async fn handle_delete(&self, category: &str, id: &str) -> Result<String> {
        let category = validation::parse_category(category)?;
        let id = validation::normalize_item_id(id);

        self.board()?.delete_item(category, &id)?;
        Ok(format!("Deleted {} item {}", category, id))
    }
}
