//! Core domain logic for FluxBoard.
//! This crate is the single source of truth for board invariants: the data
//! model, the task mutation rules, and the persistence contract.

pub mod adapter;
pub mod clock;
pub mod filter;
pub mod logging;
pub mod model;
pub mod rules;
pub mod seed;
pub mod storage;
pub mod store;
pub mod timer;

pub use adapter::board_adapter::{BoardAdapter, BOARD_KEY, THEME_KEY};
pub use filter::query::{orphaned_tasks, task_matches, tasks_for_column};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{
    BoardData, Column, ColumnId, HistoryEntry, Priority, Subtask, Task, TaskId, Theme,
    MAX_ASSIGNEES, MAX_ASSIGNEE_CHARS,
};
pub use rules::board_rules::TaskDraft;
pub use seed::seed_board;
pub use storage::{
    open_store, open_store_in_memory, KeyValueStore, SqliteKeyValueStore, StorageError,
    StorageResult,
};
pub use store::board_store::{BoardAction, BoardStore};
pub use timer::TaskTimer;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
