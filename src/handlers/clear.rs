//! Clear handler for the insight map

use crate::InsightMapHandler;
use anyhow::Result;

impl InsightMapHandler {
    /// **Start Over**: Discard the board and its stored copy.
    pub async fn handle_clear(&self) -> Result<String> {
        let mut board = self.board()?;
        let count = board.snapshot().map(|d| d.len()).unwrap_or(0);
        board.clear();
        Ok(format!("Cleared {} item(s)", count))
    }
}
