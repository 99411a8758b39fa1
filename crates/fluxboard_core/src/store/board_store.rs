//! Single-writer board state container.
//!
//! # Responsibility
//! - Own `BoardData`, `Theme` and the ephemeral task timer for one session.
//! - Dispatch `BoardAction`s to the pure rules, swap the document
//!   wholesale, and persist the result best-effort.
//!
//! # Invariants
//! - There is no partial-update path: every applied action replaces the
//!   entire in-memory document.
//! - A failed save never rolls back the in-memory swap; memory stays
//!   authoritative until the next successful write.
//! - Timer running state never reaches the persistence adapter.

use crate::adapter::board_adapter::BoardAdapter;
use crate::clock::now_epoch_ms;
use crate::filter::query::{orphaned_tasks, tasks_for_column};
use crate::model::board::{BoardData, Task, TaskId, Theme};
use crate::rules::board_rules::{
    accumulate_time, add_assignee, add_subtask, add_tag, create_task, delete_task, move_task,
    remove_assignee, remove_tag, toggle_subtask, update_task, TaskDraft,
};
use crate::storage::KeyValueStore;
use crate::timer::TaskTimer;
use log::info;

/// One user-triggered board mutation.
#[derive(Debug, Clone)]
pub enum BoardAction {
    /// Drag-and-drop drop onto a column.
    MoveTask {
        task_id: TaskId,
        target_column_id: String,
    },
    CreateTask { draft: TaskDraft },
    /// Wholesale replacement of the task with `task.id`.
    UpdateTask { task: Task },
    DeleteTask { task_id: TaskId },
    ToggleSubtask {
        task_id: TaskId,
        subtask_id: String,
    },
    AddSubtask { task_id: TaskId, title: String },
    AddTag { task_id: TaskId, tag: String },
    RemoveTag { task_id: TaskId, tag: String },
    AddAssignee { task_id: TaskId, initials: String },
    RemoveAssignee { task_id: TaskId, initials: String },
    /// One elapsed second of the running timer.
    TimerTick,
}

impl BoardAction {
    fn name(&self) -> &'static str {
        match self {
            Self::MoveTask { .. } => "move_task",
            Self::CreateTask { .. } => "create_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::ToggleSubtask { .. } => "toggle_subtask",
            Self::AddSubtask { .. } => "add_subtask",
            Self::AddTag { .. } => "add_tag",
            Self::RemoveTag { .. } => "remove_tag",
            Self::AddAssignee { .. } => "add_assignee",
            Self::RemoveAssignee { .. } => "remove_assignee",
            Self::TimerTick => "timer_tick",
        }
    }
}

/// The application context the interaction layer owns and passes around.
pub struct BoardStore<S: KeyValueStore> {
    adapter: BoardAdapter<S>,
    board: BoardData,
    theme: Theme,
    timer: TaskTimer,
}

impl<S: KeyValueStore> BoardStore<S> {
    /// Loads session state through the adapter. Never fails; unreadable
    /// state degrades to the seed board and default theme.
    pub fn open(adapter: BoardAdapter<S>) -> Self {
        let board = adapter.load_board(now_epoch_ms());
        let theme = adapter.load_theme();
        info!(
            "event=store_session module=store status=ok columns={} tasks={} theme={}",
            board.columns.len(),
            board.tasks.len(),
            theme.as_str()
        );
        Self {
            adapter,
            board,
            theme,
            timer: TaskTimer::new(),
        }
    }

    /// Current board document.
    pub fn board(&self) -> &BoardData {
        &self.board
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Filtered tasks for one column, for rendering.
    pub fn column_view(&self, column_id: &str, query: &str) -> Vec<&Task> {
        tasks_for_column(&self.board, column_id, query)
    }

    /// Filtered tasks whose column reference dangles (fallback bucket).
    pub fn orphaned_view(&self, query: &str) -> Vec<&Task> {
        orphaned_tasks(&self.board, query)
    }

    /// Applies one action: rule -> wholesale swap -> best-effort persist.
    ///
    /// Returns the created task id for `CreateTask`, `None` otherwise.
    pub fn apply(&mut self, action: BoardAction) -> Option<TaskId> {
        let now_ms = now_epoch_ms();
        let action_name = action.name();
        let mut created_id = None;

        let next = match action {
            BoardAction::MoveTask {
                task_id,
                target_column_id,
            } => move_task(&self.board, &task_id, &target_column_id, now_ms),
            BoardAction::CreateTask { draft } => {
                let (next, id) = create_task(&self.board, draft, now_ms);
                created_id = id;
                next
            }
            BoardAction::UpdateTask { task } => update_task(&self.board, task, now_ms),
            BoardAction::DeleteTask { task_id } => delete_task(&self.board, &task_id),
            BoardAction::ToggleSubtask {
                task_id,
                subtask_id,
            } => toggle_subtask(&self.board, &task_id, &subtask_id),
            BoardAction::AddSubtask { task_id, title } => {
                add_subtask(&self.board, &task_id, &title)
            }
            BoardAction::AddTag { task_id, tag } => add_tag(&self.board, &task_id, &tag),
            BoardAction::RemoveTag { task_id, tag } => remove_tag(&self.board, &task_id, &tag),
            BoardAction::AddAssignee { task_id, initials } => {
                add_assignee(&self.board, &task_id, &initials)
            }
            BoardAction::RemoveAssignee { task_id, initials } => {
                remove_assignee(&self.board, &task_id, &initials)
            }
            BoardAction::TimerTick => match self.timer.running_task() {
                Some(task_id) => accumulate_time(&self.board, task_id, 1),
                None => return None,
            },
        };

        self.replace(next);
        info!("event=board_apply module=store status=ok action={action_name}");
        created_id
    }

    /// Swaps the whole document and persists it, best-effort.
    pub fn replace(&mut self, next: BoardData) {
        self.board = next;
        self.adapter.save_board(&self.board);
    }

    /// Swaps and persists the theme preference.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.adapter.save_theme(theme);
    }

    /// Starts the per-task timer. Ephemeral: survives only this session.
    pub fn start_timer(&mut self, task_id: impl Into<TaskId>) {
        self.timer.start(task_id);
    }

    /// Stops the timer, cancelling any pending tick.
    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }
}
