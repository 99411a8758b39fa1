//! Substring query matching and column views.
//!
//! # Responsibility
//! - Decide which tasks a free-text query matches.
//! - Produce the per-column and orphaned-task read models.
//!
//! # Invariants
//! - Matching is case-insensitive substring over title, description and tags.
//! - A blank query matches every task.

use crate::model::board::{BoardData, Task};

/// Whether `query` matches the task's title, description or any tag.
pub fn task_matches(task: &Task, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
        || task
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Tasks belonging to `column_id` that match `query`, in stored order.
pub fn tasks_for_column<'a>(board: &'a BoardData, column_id: &str, query: &str) -> Vec<&'a Task> {
    board
        .tasks
        .iter()
        .filter(|task| task.column_id == column_id)
        .filter(|task| task_matches(task, query))
        .collect()
}

/// Tasks whose `column_id` resolves to no existing column.
///
/// Mutation rules deliberately do not validate column references; this is
/// the fallback bucket the view layer renders so such tasks stay reachable.
pub fn orphaned_tasks<'a>(board: &'a BoardData, query: &str) -> Vec<&'a Task> {
    board
        .tasks
        .iter()
        .filter(|task| !board.has_column(&task.column_id))
        .filter(|task| task_matches(task, query))
        .collect()
}
