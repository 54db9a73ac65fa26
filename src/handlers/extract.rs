//! Extract handler: transcript in, fresh board out

use crate::InsightMapHandler;
use crate::board::ExtractionOutcome;
use anyhow::{Result, bail};
use tracing::error;

impl InsightMapHandler {
    /// **Generate Insights**: Run the extractor on a transcript and replace the board.
    /// **Failure**: Reports one user-facing message; the board is left untouched.
    /// **Stale results**: If the board changed while the request was running, the result is dropped.
    pub async fn handle_extract(&self, transcript: &str) -> Result<String> {
        if transcript.trim().is_empty() {
            bail!("Paste a transcript before generating insights.");
        }

        let ticket = self.board()?.begin_extraction();
        // The board lock is not held while the request is in flight
        let result = self.extractor.extract(transcript).await;

        let mut board = self.board()?;
        match board.finish_extraction(ticket, result) {
            Ok(ExtractionOutcome::Applied { .. }) => {
                let Some(data) = board.snapshot() else {
                    bail!("Extraction finished without data");
                };
                Ok(format!(
                    "Extracted {} item(s): {} signal(s), {} insight(s), {} opportunity(ies), {} idea(s)",
                    data.len(),
                    data.signals().len(),
                    data.insights().len(),
                    data.opportunities().len(),
                    data.ideas().len()
                ))
            }
            Ok(ExtractionOutcome::Stale) => Ok(
                "Extraction result discarded: the board changed while it was running".to_string(),
            ),
            Err(e) => {
                error!("Error generating insights: {}", e);
                bail!("{}", e.user_message());
            }
        }
    }
}
