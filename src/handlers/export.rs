//! Export handler for the insight map

use crate::InsightMapHandler;
use crate::board::BoardError;
use crate::formatting;
use crate::insight::local_date_today;
use anyhow::Result;

impl InsightMapHandler {
    /// **Save Draft**: Render the board as a Markdown report.
    pub async fn handle_export(&self) -> Result<String> {
        let board = self.board()?;
        let data = board.snapshot().ok_or(BoardError::NoData)?;
        Ok(formatting::format_markdown_report(
            &data,
            board.okrs(),
            local_date_today(),
        ))
    }
}
