//! Update handler for the insight map

use crate::InsightMapHandler;
use crate::validation;
use anyhow::Result;

impl InsightMapHandler {
    /// **Edit**: Change the text of an item. Surrounding whitespace is trimmed.
    /// **Note**: Blank text is rejected and the item keeps its previous text.
    pub async fn handle_edit(&self, category: &str, id: &str, text: &str) -> Result<String> {
        let category = validation::parse_category(category)?;
        let id = validation::normalize_item_id(id);

        let changed = self.board()?.update_text(category, &id, text)?;
        if changed {
            Ok(format!("Item {} updated successfully", id))
        } else {
            Ok(format!("Item {} unchanged", id))
        }
    }
}
