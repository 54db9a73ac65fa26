//! Integration tests for the board state container

mod common;

use common::{StubExtractor, open_board, sample_data, sample_payload};
use insight_map::{
    Board, BoardError, Category, ExtractedItem, ExtractionError, ExtractionOutcome, STORAGE_KEY,
    Storage, default_okrs,
};
use tempfile::TempDir;

fn board_with_sample() -> Board {
    let mut board = Board::open(Storage::in_memory(), default_okrs());
    board.replace(sample_data());
    board
}

fn first_id(board: &Board, category: Category) -> String {
    board.snapshot().unwrap().items(category)[0].id.clone()
}

#[test]
fn test_new_board_has_no_data() {
    let board = Board::open(Storage::in_memory(), default_okrs());
    assert!(!board.has_data());
    assert!(board.snapshot().is_none());
    assert!(board.linked_okrs().is_empty());
    assert_eq!(board.okrs().len(), 5);
}

#[test]
fn test_mutations_without_data_fail() {
    let mut board = Board::open(Storage::in_memory(), default_okrs());
    assert_eq!(
        board.update_text(Category::Signals, "x", "text"),
        Err(BoardError::NoData)
    );
    assert_eq!(board.delete_item(Category::Signals, "x"), Err(BoardError::NoData));
    assert_eq!(
        board.link_okrs(Category::Insights, "x", vec![]),
        Err(BoardError::NoData)
    );
    assert_eq!(board.set_tags(Category::Ideas, "x", None), Err(BoardError::NoData));
}

#[test]
fn test_earlier_snapshot_is_not_affected_by_edits() {
    let mut board = board_with_sample();
    let before = board.snapshot().unwrap();
    let copy = (*before).clone();
    let id = first_id(&board, Category::Signals);

    board.update_text(Category::Signals, &id, "Edited").unwrap();
    board.delete_item(Category::Ideas, &first_id(&board, Category::Ideas)).unwrap();

    assert_eq!(*before, copy);
    assert_eq!(before.signals()[0].text, "I can never find last quarter's reports.");
    assert_eq!(before.ideas().len(), 1);
    assert_eq!(board.snapshot().unwrap().signals()[0].text, "Edited");
    assert!(board.snapshot().unwrap().ideas().is_empty());
}

#[test]
fn test_update_text_trims_and_keeps_identity() {
    let mut board = board_with_sample();
    let id = first_id(&board, Category::Insights);

    assert_eq!(
        board.update_text(Category::Insights, &id, "  Users cannot find reports  "),
        Ok(true)
    );

    let data = board.snapshot().unwrap();
    let item = data.find(Category::Insights, &id).unwrap();
    assert_eq!(item.text, "Users cannot find reports");
    assert_eq!(item.category, Category::Insights);
    assert_eq!(item.speaker, "PM");
    assert_eq!(data.len(), 5);
}

#[test]
fn test_update_text_with_same_text_is_unchanged() {
    let mut board = board_with_sample();
    let id = first_id(&board, Category::Ideas);
    let before = board.snapshot().unwrap();

    assert_eq!(
        board.update_text(Category::Ideas, &id, " Add search filter "),
        Ok(false)
    );
    assert!(std::sync::Arc::ptr_eq(&before, &board.snapshot().unwrap()));
}

#[test]
fn test_update_text_rejects_blank() {
    let mut board = board_with_sample();
    let id = first_id(&board, Category::Signals);

    assert_eq!(
        board.update_text(Category::Signals, &id, "   "),
        Err(BoardError::EmptyText)
    );
    assert_eq!(
        board.snapshot().unwrap().signals()[0].text,
        "I can never find last quarter's reports."
    );
}

#[test]
fn test_unknown_item_is_not_found() {
    let mut board = board_with_sample();
    let signal_id = first_id(&board, Category::Signals);

    // Right id, wrong bucket
    let err = board.delete_item(Category::Ideas, &signal_id).unwrap_err();
    assert_eq!(
        err,
        BoardError::ItemNotFound {
            category: Category::Ideas,
            id: signal_id.clone(),
        }
    );
    assert!(err.to_string().contains("does not exist"));

    assert!(matches!(
        board.update_text(Category::Signals, "missing", "text"),
        Err(BoardError::ItemNotFound { .. })
    ));
    assert_eq!(board.snapshot().unwrap().len(), 5);
}

#[test]
fn test_delete_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let mut board = open_board(temp_dir.path());
    board.replace(sample_data());
    let id = first_id(&board, Category::Signals);

    board.delete_item(Category::Signals, &id).unwrap();

    let reopened = open_board(temp_dir.path());
    let data = reopened.snapshot().unwrap();
    assert_eq!(data.signals().len(), 1);
    assert_eq!(data.signals()[0].text, "Search takes forever");
    assert!(data.find_any(&id).is_none());
}

#[test]
fn test_link_okrs_keeps_order_and_duplicates() {
    let mut board = board_with_sample();
    let id = first_id(&board, Category::Opportunities);

    board
        .link_okrs(
            Category::Opportunities,
            &id,
            vec!["okr3".to_string(), "okr1".to_string(), "okr3".to_string()],
        )
        .unwrap();

    let data = board.snapshot().unwrap();
    assert_eq!(
        data.find(Category::Opportunities, &id).unwrap().okr_ids,
        vec!["okr3", "okr1", "okr3"]
    );

    let linked: Vec<&str> = board.linked_okrs().iter().map(|okr| okr.id.as_str()).collect();
    assert_eq!(linked, vec!["okr1", "okr3"]);
}

#[test]
fn test_link_okrs_only_for_insights_and_opportunities() {
    let mut board = board_with_sample();
    let signal_id = first_id(&board, Category::Signals);
    let idea_id = first_id(&board, Category::Ideas);

    assert_eq!(
        board.link_okrs(Category::Signals, &signal_id, vec!["okr1".to_string()]),
        Err(BoardError::NotLinkable(Category::Signals))
    );
    assert_eq!(
        board.link_okrs(Category::Ideas, &idea_id, vec!["okr1".to_string()]),
        Err(BoardError::NotLinkable(Category::Ideas))
    );
    assert!(board.linked_okrs().is_empty());
}

#[test]
fn test_link_okrs_rejects_unknown_okr() {
    let mut board = board_with_sample();
    let id = first_id(&board, Category::Insights);

    assert_eq!(
        board.link_okrs(
            Category::Insights,
            &id,
            vec!["okr1".to_string(), "okr99".to_string()]
        ),
        Err(BoardError::UnknownOkr("okr99".to_string()))
    );
    assert!(board.snapshot().unwrap().insights()[0].okr_ids.is_empty());
}

#[test]
fn test_link_okrs_with_empty_list_unlinks() {
    let mut board = board_with_sample();
    let id = first_id(&board, Category::Insights);

    board
        .link_okrs(Category::Insights, &id, vec!["okr2".to_string()])
        .unwrap();
    assert_eq!(board.linked_okrs().len(), 1);

    board.link_okrs(Category::Insights, &id, vec![]).unwrap();
    assert!(board.linked_okrs().is_empty());
}

#[test]
fn test_set_tags_persists() {
    let temp_dir = TempDir::new().unwrap();
    let mut board = open_board(temp_dir.path());
    board.replace(sample_data());
    let signal_id = first_id(&board, Category::Signals);
    let idea_id = first_id(&board, Category::Ideas);

    board
        .set_tags(Category::Signals, &signal_id, Some(vec!["search".to_string()]))
        .unwrap();
    board.set_tags(Category::Ideas, &idea_id, Some(vec![])).unwrap();

    let reopened = open_board(temp_dir.path());
    let data = reopened.snapshot().unwrap();
    assert_eq!(
        data.find(Category::Signals, &signal_id).unwrap().tags,
        Some(vec!["search".to_string()])
    );
    assert_eq!(data.find(Category::Ideas, &idea_id).unwrap().tags, Some(vec![]));
    assert_eq!(data.signals()[1].tags, None);
}

#[test]
fn test_clear_removes_stored_state() {
    let mut board = board_with_sample();
    assert!(board.storage().store().get(STORAGE_KEY).unwrap().is_some());

    board.clear();

    assert!(!board.has_data());
    assert!(board.storage().store().get(STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_finish_extraction_applies_result() {
    let mut board = Board::open(Storage::in_memory(), default_okrs());
    let ticket = board.begin_extraction();

    let outcome = board.finish_extraction(ticket, Ok(sample_data())).unwrap();

    assert_eq!(outcome, ExtractionOutcome::Applied { items: 5 });
    assert_eq!(board.snapshot().unwrap().len(), 5);
    assert!(board.storage().load().is_some());
}

#[test]
fn test_extraction_finishing_after_edit_is_stale() {
    let mut board = board_with_sample();
    let ticket = board.begin_extraction();
    let id = first_id(&board, Category::Signals);
    board.update_text(Category::Signals, &id, "Edited while extracting").unwrap();

    let outcome = board.finish_extraction(ticket, Ok(sample_data())).unwrap();

    assert_eq!(outcome, ExtractionOutcome::Stale);
    assert_eq!(
        board.snapshot().unwrap().signals()[0].text,
        "Edited while extracting"
    );
}

#[test]
fn test_newer_extraction_invalidates_older() {
    let mut board = Board::open(Storage::in_memory(), default_okrs());
    let first = board.begin_extraction();
    let second = board.begin_extraction();

    let mut newer = sample_data();
    newer.push(
        Category::Ideas,
        ExtractedItem::new(Category::Ideas, "Saved searches"),
    );
    assert_eq!(
        board.finish_extraction(second, Ok(newer)).unwrap(),
        ExtractionOutcome::Applied { items: 6 }
    );
    assert_eq!(
        board.finish_extraction(first, Ok(sample_data())).unwrap(),
        ExtractionOutcome::Stale
    );
    assert_eq!(board.snapshot().unwrap().len(), 6);
}

#[test]
fn test_failed_extraction_leaves_board_unchanged() {
    let mut board = board_with_sample();
    let before = board.snapshot().unwrap();
    let ticket = board.begin_extraction();

    let err = board
        .finish_extraction(ticket, Err(ExtractionError::EmptyResponse))
        .unwrap_err();

    assert!(matches!(err, ExtractionError::EmptyResponse));
    assert_eq!(board.snapshot().unwrap(), before);
}

#[test]
fn test_stale_failure_is_reported_as_stale() {
    let mut board = board_with_sample();
    let ticket = board.begin_extraction();
    board.clear();

    let outcome = board
        .finish_extraction(ticket, Err(ExtractionError::EmptyResponse))
        .unwrap();
    assert_eq!(outcome, ExtractionOutcome::Stale);
    assert!(!board.has_data());
}

#[tokio::test]
async fn test_generate_replaces_working_set() {
    let mut board = board_with_sample();
    let id = first_id(&board, Category::Insights);
    board
        .link_okrs(Category::Insights, &id, vec!["okr1".to_string()])
        .unwrap();

    let extractor = StubExtractor::returning(sample_payload());
    let outcome = board.generate(&extractor, "PM: hi").await.unwrap();

    assert_eq!(outcome, ExtractionOutcome::Applied { items: 5 });
    assert_eq!(extractor.calls(), 1);
    let data = board.snapshot().unwrap();
    assert!(data.find_any(&id).is_none());
    assert!(data.iter().all(|item| item.okr_ids.is_empty()));
}

#[tokio::test]
async fn test_generate_failure_keeps_previous_data() {
    let mut board = board_with_sample();
    let before = board.snapshot().unwrap();

    let extractor = StubExtractor::failing();
    let err = board.generate(&extractor, "PM: hi").await.unwrap_err();

    assert!(matches!(err, ExtractionError::Schema(_)));
    assert_eq!(board.snapshot().unwrap(), before);
}
