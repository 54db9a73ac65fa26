//! The insight board: owner of the current working set
//!
//! The board holds the current [`ExtractedData`] as an immutable snapshot.
//! Every change builds a new data set from the old one and swaps it in, then
//! mirrors it into [`Storage`]. Callers that cloned a snapshot earlier keep
//! seeing exactly what they cloned.

use crate::extraction::{ExtractionError, InsightExtractor};
use crate::insight::{Category, ExtractedData, Okr};
use crate::storage::Storage;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("No insights yet. Run an extraction first.")]
    NoData,

    #[error("Item not found: {category} item '{id}' does not exist")]
    ItemNotFound { category: Category, id: String },

    #[error("Text cannot be empty")]
    EmptyText,

    #[error("{0} cannot be linked to OKRs (only insights and opportunities can)")]
    NotLinkable(Category),

    #[error("OKR '{0}' does not exist")]
    UnknownOkr(String),
}

/// Proof that an extraction was started at a given board revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionTicket {
    revision: u64,
}

/// What happened to a finished extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// The result replaced the working set
    Applied { items: usize },
    /// The board changed while the request was in flight; the result was dropped
    Stale,
}

pub struct Board {
    data: Option<Arc<ExtractedData>>,
    revision: u64,
    okrs: Vec<Okr>,
    storage: Storage,
}

impl Board {
    /// Open a board, restoring whatever `storage` holds
    ///
    /// # Arguments
    /// * `storage` - Persistence for the working set
    /// * `okrs` - The OKR catalog items can be linked to
    pub fn open(storage: Storage, okrs: Vec<Okr>) -> Self {
        let data = storage.load().map(Arc::new);
        match &data {
            Some(d) => info!("Restored {} item(s) from storage", d.len()),
            None => debug!("No stored insights found"),
        }
        Self {
            data,
            revision: 0,
            okrs,
            storage,
        }
    }

    /// Current snapshot, if any
    pub fn snapshot(&self) -> Option<Arc<ExtractedData>> {
        self.data.clone()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    pub fn okrs(&self) -> &[Okr] {
        &self.okrs
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Replace the working set wholesale
    pub fn replace(&mut self, data: ExtractedData) {
        self.install(Some(Arc::new(data)));
    }

    /// Discard the working set ("start over")
    pub fn clear(&mut self) {
        self.install(None);
    }

    /// Change the text of an item
    ///
    /// # Arguments
    /// * `category` - Bucket holding the item
    /// * `id` - Item id
    /// * `text` - New text; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// `Ok(true)` if the text changed, `Ok(false)` if it was already equal.
    /// Blank text is rejected and leaves the item untouched.
    pub fn update_text(&mut self, category: Category, id: &str, text: &str) -> Result<bool, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyText);
        }

        let current = self.current()?;
        let item = current
            .find(category, id)
            .ok_or_else(|| not_found(category, id))?;
        if item.text == text {
            return Ok(false);
        }

        let next = current
            .with_item_updated(category, id, |item| item.text = text.to_string())
            .ok_or_else(|| not_found(category, id))?;
        self.install(Some(Arc::new(next)));
        Ok(true)
    }

    /// Delete an item
    pub fn delete_item(&mut self, category: Category, id: &str) -> Result<(), BoardError> {
        let next = self
            .current()?
            .without_item(category, id)
            .ok_or_else(|| not_found(category, id))?;
        self.install(Some(Arc::new(next)));
        Ok(())
    }

    /// Replace the OKR links of an item
    ///
    /// The links are stored in the given order without deduplication. Only
    /// insights and opportunities can be linked, and every id must be in the
    /// OKR catalog. An empty list unlinks the item.
    pub fn link_okrs(&mut self, category: Category, id: &str, okr_ids: Vec<String>) -> Result<(), BoardError> {
        if !category.can_link_okrs() {
            return Err(BoardError::NotLinkable(category));
        }
        if let Some(unknown) = okr_ids
            .iter()
            .find(|okr_id| !self.okrs.iter().any(|okr| &okr.id == *okr_id))
        {
            return Err(BoardError::UnknownOkr(unknown.clone()));
        }

        let next = self
            .current()?
            .with_item_updated(category, id, |item| item.okr_ids = okr_ids)
            .ok_or_else(|| not_found(category, id))?;
        self.install(Some(Arc::new(next)));
        Ok(())
    }

    /// Replace the tags of an item
    ///
    /// `Some(vec![])` records that tags were explicitly cleared; `None`
    /// returns the item to the never-tagged state.
    pub fn set_tags(&mut self, category: Category, id: &str, tags: Option<Vec<String>>) -> Result<(), BoardError> {
        let next = self
            .current()?
            .with_item_updated(category, id, |item| item.tags = tags)
            .ok_or_else(|| not_found(category, id))?;
        self.install(Some(Arc::new(next)));
        Ok(())
    }

    /// OKRs linked from at least one item, in catalog order
    pub fn linked_okrs(&self) -> Vec<&Okr> {
        match &self.data {
            Some(data) => data.linked_okrs(&self.okrs),
            None => Vec::new(),
        }
    }

    /// Start an extraction
    ///
    /// Any extraction started earlier becomes stale.
    pub fn begin_extraction(&mut self) -> ExtractionTicket {
        self.revision += 1;
        ExtractionTicket {
            revision: self.revision,
        }
    }

    /// Apply the result of an extraction started with `ticket`
    ///
    /// The result is applied only if the board has not changed since the
    /// ticket was issued. A failed extraction never changes the board.
    ///
    /// # Returns
    /// The outcome, or the extraction error for a current ticket
    pub fn finish_extraction(
        &mut self,
        ticket: ExtractionTicket,
        result: Result<ExtractedData, ExtractionError>,
    ) -> Result<ExtractionOutcome, ExtractionError> {
        if ticket.revision != self.revision {
            warn!("Discarding stale extraction result");
            return Ok(ExtractionOutcome::Stale);
        }

        let data = result?;
        let items = data.len();
        self.install(Some(Arc::new(data)));
        Ok(ExtractionOutcome::Applied { items })
    }

    /// Run an extraction and apply its result
    pub async fn generate(
        &mut self,
        extractor: &dyn InsightExtractor,
        transcript: &str,
    ) -> Result<ExtractionOutcome, ExtractionError> {
        let ticket = self.begin_extraction();
        let result = extractor.extract(transcript).await;
        self.finish_extraction(ticket, result)
    }

    fn current(&self) -> Result<&ExtractedData, BoardError> {
        self.data.as_deref().ok_or(BoardError::NoData)
    }

    fn install(&mut self, data: Option<Arc<ExtractedData>>) {
        self.data = data;
        self.revision += 1;
        self.storage.save(self.data.as_deref());
    }
}

fn not_found(category: Category, id: &str) -> BoardError {
    BoardError::ItemNotFound {
        category,
        id: id.to_string(),
    }
}
