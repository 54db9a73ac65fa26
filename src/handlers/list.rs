//! List handler for the insight map

use crate::InsightMapHandler;
use crate::formatting;
use crate::validation;
use anyhow::Result;

impl InsightMapHandler {
    /// **Review**: Show the board, optionally a single category.
    pub async fn handle_show(&self, category: Option<String>) -> Result<String> {
        let filter = match category {
            Some(c) => Some(validation::parse_category(&c)?),
            None => None,
        };

        let board = self.board()?;
        match board.snapshot() {
            Some(data) => Ok(formatting::format_board(&data, filter)),
            None => Ok("No insights yet. Run `insight-map extract <transcript>` to generate some.".to_string()),
        }
    }

    /// **OKRs**: List the OKR catalog and which OKRs items are mapped to.
    pub async fn handle_okrs(&self) -> Result<String> {
        let board = self.board()?;
        let snapshot = board.snapshot();
        Ok(formatting::format_okrs(board.okrs(), snapshot.as_deref()))
    }
}
