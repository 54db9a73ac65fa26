//! Common test utilities for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use insight_map::extraction::map_payload;
use insight_map::{
    Board, ExtractedData, ExtractionError, FileStore, InsightExtractor, InsightMapHandler, Storage,
    default_okrs,
};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Model payload with one or two items per category
pub fn sample_payload() -> Value {
    json!({
        "signals": [
            { "speaker": "User A", "text": "I can never find last quarter's reports." },
            { "text": "Search takes forever" }
        ],
        "insights": [
            { "text": "Users lose time locating past work" }
        ],
        "opportunities": [
            { "text": "Improve report discoverability" }
        ],
        "ideas": [
            { "text": "Add search filter" }
        ]
    })
}

/// Extractor returning a fixed payload (or a failure) and counting calls
pub struct StubExtractor {
    payload: Option<Value>,
    calls: AtomicUsize,
}

impl StubExtractor {
    pub fn returning(payload: Value) -> Self {
        Self {
            payload: Some(payload),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            payload: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InsightExtractor for StubExtractor {
    async fn extract(&self, _transcript: &str) -> Result<ExtractedData, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Some(payload) => map_payload(payload),
            None => Err(ExtractionError::Schema("stub failure".to_string())),
        }
    }
}

/// Board backed by a file store in `dir`, using the default OKR catalog
pub fn open_board(dir: &Path) -> Board {
    Board::open(Storage::new(FileStore::new(dir)), default_okrs())
}

/// Create a test handler with temporary file storage
pub fn get_test_handler(extractor: Arc<StubExtractor>) -> (InsightMapHandler, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler = handler_in(temp_dir.path(), extractor);
    (handler, temp_dir)
}

/// Create a handler on an existing data directory
pub fn handler_in(dir: &Path, extractor: Arc<StubExtractor>) -> InsightMapHandler {
    InsightMapHandler::new(open_board(dir), extractor)
}

/// Sample data as produced by an extraction
pub fn sample_data() -> ExtractedData {
    map_payload(&sample_payload()).unwrap()
}
