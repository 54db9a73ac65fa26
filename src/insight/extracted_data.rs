use crate::insight::item::{Category, ExtractedItem};

/// The four-category working set produced by an extraction
///
/// Items are stored in one ordered bucket per [`Category`], indexed by the
/// category itself. Inserting into a bucket overwrites the item's category
/// tag, so an item can never sit in a bucket that disagrees with its tag.
///
/// Modifications used by the board (`with_item_updated`, `without_item`)
/// take `&self` and return a new value. A snapshot that has been handed out
/// never changes underneath its reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedData {
    buckets: [Vec<ExtractedItem>; 4],
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl ExtractedData {
    /// Create an empty data set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the bucket for `category`
    ///
    /// The item's category is forced to `category`.
    pub fn push(&mut self, category: Category, mut item: ExtractedItem) {
        item.category = category;
        self.buckets[category.index()].push(item);
    }

    /// Items of one category, in insertion order
    pub fn items(&self, category: Category) -> &[ExtractedItem] {
        &self.buckets[category.index()]
    }

    pub fn signals(&self) -> &[ExtractedItem] {
        self.items(Category::Signals)
    }

    pub fn insights(&self) -> &[ExtractedItem] {
        self.items(Category::Insights)
    }

    pub fn opportunities(&self) -> &[ExtractedItem] {
        self.items(Category::Opportunities)
    }

    pub fn ideas(&self) -> &[ExtractedItem] {
        self.items(Category::Ideas)
    }

    /// Iterate over every item, category by category
    pub fn iter(&self) -> impl Iterator<Item = &ExtractedItem> {
        self.buckets.iter().flatten()
    }

    /// Total number of items across all categories
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Find an item by category and id
    ///
    /// # Arguments
    /// * `category` - Bucket to search
    /// * `id` - Item id
    ///
    /// # Returns
    /// An optional reference to the item if found
    pub fn find(&self, category: Category, id: &str) -> Option<&ExtractedItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Find an item by id in any category
    pub fn find_any(&self, id: &str) -> Option<&ExtractedItem> {
        self.iter().find(|item| item.id == id)
    }

    /// Produce a copy in which one item has been modified
    ///
    /// # Arguments
    /// * `category` - Bucket holding the item
    /// * `id` - Item id
    /// * `patch` - Modification applied to the copied item
    ///
    /// # Returns
    /// The new data set, or `None` if no such item exists. The item's id and
    /// category are restored after `patch` runs.
    pub fn with_item_updated<F>(&self, category: Category, id: &str, patch: F) -> Option<Self>
    where
        F: FnOnce(&mut ExtractedItem),
    {
        let pos = self.items(category).iter().position(|item| item.id == id)?;
        let mut next = self.clone();
        let item = &mut next.buckets[category.index()][pos];
        patch(item);
        item.id = id.to_string();
        item.category = category;
        Some(next)
    }

    /// Produce a copy without the given item
    ///
    /// # Returns
    /// The new data set, or `None` if no such item exists
    pub fn without_item(&self, category: Category, id: &str) -> Option<Self> {
        let pos = self.items(category).iter().position(|item| item.id == id)?;
        let mut next = self.clone();
        next.buckets[category.index()].remove(pos);
        Some(next)
    }
}
