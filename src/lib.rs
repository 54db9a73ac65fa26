//! Insight Map Library
//!
//! This library turns user-interview transcripts into a board of categorized
//! items (Signals, Insights, Opportunities, Ideas) using a hosted generative
//! model, lets a product manager edit, delete and link those items to OKRs,
//! and keeps the board in a local key-value store between sessions.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Command Layer**: `InsightMapHandler` - One handler per user action
//! - **Domain Layer**: `insight`, `sanitize` and `board` modules - Data model,
//!   repair of persisted data, and the snapshot-owning state container
//! - **Persistence Layer**: `storage` module - JSON document under a fixed key
//!   of a key-value store
//!
//! Extraction is delegated to an [`InsightExtractor`]; [`GeminiExtractor`]
//! talks to the Gemini `generateContent` API.
//!
//! # Example
//!
//! ```no_run
//! use insight_map::{Board, GeminiConfig, GeminiExtractor, InsightMapHandler, Storage, default_okrs};
//! use std::sync::Arc;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let board = Board::open(Storage::in_memory(), default_okrs());
//!     let extractor = GeminiExtractor::new(GeminiConfig::default())?;
//!     let handler = InsightMapHandler::new(board, Arc::new(extractor));
//!     println!("{}", handler.handle_extract("PM: How do you search today?").await?);
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod config;
pub mod extraction;
pub mod formatting;
pub mod handlers;
pub mod insight;
pub mod sanitize;
pub mod storage;
pub mod validation;

use anyhow::{Result, anyhow};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

// Re-export commonly used types
pub use board::{Board, BoardError, ExtractionOutcome, ExtractionTicket};
pub use config::Config;
pub use extraction::{ExtractionError, GeminiConfig, GeminiExtractor, InsightExtractor};
pub use insight::{Category, ExtractedData, ExtractedItem, Okr, default_okrs};
pub use sanitize::{sanitize_container, sanitize_item};
pub use storage::{FileStore, KeyValueStore, MemoryStore, STORAGE_KEY, Storage, StoreError};

/// Handler for insight map commands
///
/// Owns the board and the extractor. Every handler method is one user
/// action; changes are persisted by the board as they happen.
pub struct InsightMapHandler {
    pub(crate) board: Mutex<Board>,
    pub(crate) extractor: Arc<dyn InsightExtractor>,
}

impl InsightMapHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `board` - The board to operate on
    /// * `extractor` - Source of extracted insights
    pub fn new(board: Board, extractor: Arc<dyn InsightExtractor>) -> Self {
        Self {
            board: Mutex::new(board),
            extractor,
        }
    }

    /// Create a handler from configuration
    ///
    /// Opens a [`FileStore`] in the configured data directory and a
    /// [`GeminiExtractor`] with the configured model.
    ///
    /// # Example
    /// ```no_run
    /// # use insight_map::{Config, InsightMapHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let config = Config::load(None)?;
    /// let handler = InsightMapHandler::from_config(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        debug!("Using data directory {}", config.data_dir.display());
        let store = FileStore::new(&config.data_dir).with_quota(config.quota_bytes);
        let board = Board::open(Storage::new(store), config.okr_catalog());
        let extractor = GeminiExtractor::new(config.gemini_config())?;
        debug!("Using model {}", extractor.model());
        Ok(Self::new(board, Arc::new(extractor)))
    }

    /// Current board snapshot, if any
    pub fn snapshot(&self) -> Result<Option<Arc<ExtractedData>>> {
        Ok(self.board()?.snapshot())
    }

    pub(crate) fn board(&self) -> Result<MutexGuard<'_, Board>> {
        self.board
            .lock()
            .map_err(|_| anyhow!("Board lock poisoned by an earlier failure"))
    }
}
