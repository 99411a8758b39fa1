use fluxboard_core::rules::board_rules::move_task;
use fluxboard_core::{
    open_store_in_memory, orphaned_tasks, seed_board, tasks_for_column, BoardAction,
    BoardAdapter, BoardStore, TaskDraft,
};

const NOW_MS: i64 = 1_700_000_000_000;

#[test]
fn design_query_matches_title_description_and_tags_case_insensitively() {
    let board = seed_board(NOW_MS);

    let mut matching: Vec<&str> = board
        .columns
        .iter()
        .flat_map(|column| tasks_for_column(&board, &column.id, "design"))
        .map(|task| task.id.as_str())
        .collect();
    matching.sort_unstable();

    // t-1 carries the Design tag; t-4 has it in both title and tags.
    assert_eq!(matching, vec!["t-1", "t-4"]);
}

#[test]
fn blank_query_returns_the_whole_column_in_stored_order() {
    let board = seed_board(NOW_MS);
    let in_progress = tasks_for_column(&board, "in-progress", "");
    let ids: Vec<&str> = in_progress.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids, vec!["t-2", "t-6"]);
}

#[test]
fn filtering_does_not_mutate_the_board() {
    let board = seed_board(NOW_MS);
    let snapshot = board.clone();

    let _ = tasks_for_column(&board, "todo", "grid");
    let _ = orphaned_tasks(&board, "");

    assert_eq!(board, snapshot);
}

#[test]
fn unknown_column_view_is_empty() {
    let board = seed_board(NOW_MS);
    assert!(tasks_for_column(&board, "archived", "").is_empty());
}

#[test]
fn task_moved_to_missing_column_lands_in_the_orphan_bucket() {
    let board = seed_board(NOW_MS);
    let moved = move_task(&board, "t-1", "archived", NOW_MS + 1);

    let orphans = orphaned_tasks(&moved, "");
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id, "t-1");

    // It left every column view, including its old one.
    for column in &moved.columns {
        assert!(tasks_for_column(&moved, &column.id, "")
            .iter()
            .all(|task| task.id != "t-1"));
    }

    assert!(orphaned_tasks(&moved, "grid").is_empty());
    assert_eq!(orphaned_tasks(&moved, "moodboard").len(), 1);
}

#[test]
fn seed_board_has_no_orphans() {
    let board = seed_board(NOW_MS);
    assert!(orphaned_tasks(&board, "").is_empty());
}

#[test]
fn store_views_reflect_applied_mutations() {
    let mut store = BoardStore::open(BoardAdapter::new(open_store_in_memory().unwrap()));

    let id = store
        .apply(BoardAction::CreateTask {
            draft: TaskDraft::new("Review the design doc", "review"),
        })
        .unwrap();

    let review = store.column_view("review", "design doc");
    assert_eq!(review.len(), 1);
    assert_eq!(review[0].id, id);

    store.apply(BoardAction::MoveTask {
        task_id: id.clone(),
        target_column_id: "nowhere".to_string(),
    });
    let orphans = store.orphaned_view("");
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id, id);
}
