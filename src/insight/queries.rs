//! OKR impact queries over ExtractedData

use super::extracted_data::ExtractedData;
use super::item::{ExtractedItem, Okr};
use std::collections::HashSet;

impl ExtractedData {
    /// Ids of every OKR referenced by at least one item
    pub fn linked_okr_ids(&self) -> HashSet<&str> {
        self.iter()
            .flat_map(|item| item.okr_ids.iter().map(String::as_str))
            .collect()
    }

    /// Catalog entries referenced by at least one item, in catalog order
    ///
    /// # Arguments
    /// * `catalog` - The OKR reference list
    ///
    /// # Returns
    /// The linked OKRs. Ids that are not in the catalog are ignored.
    pub fn linked_okrs<'a>(&self, catalog: &'a [Okr]) -> Vec<&'a Okr> {
        let linked = self.linked_okr_ids();
        catalog
            .iter()
            .filter(|okr| linked.contains(okr.id.as_str()))
            .collect()
    }

    /// Items linked to the given OKR, category by category
    pub fn items_linked_to<'a>(&'a self, okr_id: &'a str) -> impl Iterator<Item = &'a ExtractedItem> {
        self.iter().filter(move |item| item.is_linked_to(okr_id))
    }
}
