//! OKR link handler for the insight map

use crate::InsightMapHandler;
use crate::board::BoardError;
use crate::validation;
use anyhow::{Result, bail};

impl InsightMapHandler {
    /// **Map to OKR**: Set the OKRs an insight or opportunity impacts.
    /// **Tip**: Pass no OKR ids to unlink the item from every OKR.
    pub async fn handle_link(&self, category: &str, id: &str, okr_ids: &[String]) -> Result<String> {
        let category = validation::parse_category(category)?;
        let id = validation::normalize_item_id(id);
        let okr_ids = validation::normalize_okr_ids(okr_ids);
        let count = okr_ids.len();

        let mut board = self.board()?;
        match board.link_okrs(category, &id, okr_ids) {
            Ok(()) => {}
            Err(BoardError::UnknownOkr(okr_id)) => {
                bail!("{}", validation::format_unknown_okr_error(&okr_id, board.okrs()));
            }
            Err(e) => return Err(e.into()),
        }

        if count == 0 {
            Ok(format!("Item {} unlinked from all OKRs", id))
        } else {
            Ok(format!(
                "Item {} linked to {} OKR{}",
                id,
                count,
                if count == 1 { "" } else { "s" }
            ))
        }
    }
}
