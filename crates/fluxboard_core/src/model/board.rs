//! Board, column and task records.
//!
//! # Responsibility
//! - Define the canonical task/column/board shapes and their wire format.
//! - Provide id constructors and small read helpers used by the rule layer.
//!
//! # Invariants
//! - Field names serialize in camelCase; the persisted document is exactly
//!   this shape, with no version field.
//! - `Task.created_at` is immutable after creation.
//! - A task references its column by id only; the reference is weak and may
//!   dangle (see `filter::orphaned_tasks`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for a task.
pub type TaskId = String;

/// Stable opaque identifier for a column.
pub type ColumnId = String;

/// Maximum number of assignee initials a task can hold.
pub const MAX_ASSIGNEES: usize = 4;

/// Maximum character length of one assignee entry.
pub const MAX_ASSIGNEE_CHARS: usize = 2;

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// UI color scheme. Persisted as a bare string under its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark scheme. The default for absent or unrecognized stored values.
    #[default]
    Void,
    /// Light scheme.
    Paper,
}

impl Theme {
    /// Stable string form used for persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Paper => "paper",
        }
    }

    /// Parses a persisted value. Unknown values are treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "void" => Some(Self::Void),
            "paper" => Some(Self::Paper),
            _ => None,
        }
    }

    /// Returns the other scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Void => Self::Paper,
            Self::Paper => Self::Void,
        }
    }
}

/// One checklist step inside a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Subtask {
    /// Creates an uncompleted subtask with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_subtask_id(),
            title: title.into(),
            completed: false,
        }
    }
}

/// Immutable audit record of one change made to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Human-readable uppercase label, e.g. `MOVED TO: DONE`.
    pub action: String,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Creates an entry with a fresh id at the given instant.
    pub fn new(action: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            id: new_history_id(),
            action: action.into(),
            timestamp: timestamp_ms,
        }
    }
}

/// A unit of trackable work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable opaque id, never reused for another task.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// RFC 3339 instant, or `None` when the task has no deadline.
    pub due_date: Option<String>,
    pub priority: Priority,
    /// Insertion-ordered checklist.
    pub subtasks: Vec<Subtask>,
    /// Free-text labels, deduplicated case-sensitively on insert.
    pub tags: Vec<String>,
    /// Visual color token; empty string means unset. Carries no logic.
    #[serde(default)]
    pub accent_color: String,
    /// Uppercase initials, each at most 2 chars, at most 4 entries.
    pub assignees: Vec<String>,
    /// Accumulated work time in whole seconds.
    pub time_spent: u64,
    /// Append-only audit trail, oldest first.
    pub history: Vec<HistoryEntry>,
    /// Weak reference into `BoardData.columns`.
    pub column_id: ColumnId,
    /// Unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
}

impl Task {
    /// Count of completed subtasks, for progress rendering.
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|sub| sub.completed).count()
    }
}

/// A named workflow lane.
///
/// Columns are seeded once and not managed through the modeled interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
}

/// The whole-board document: the unit of persistence and replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    /// Ordered lanes defining board layout.
    pub columns: Vec<Column>,
    /// All tasks, unordered; board position comes from `Task.column_id`.
    pub tasks: Vec<Task>,
}

impl BoardData {
    /// Looks up one task by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Whether a column with the given id exists.
    pub fn has_column(&self, column_id: &str) -> bool {
        self.columns.iter().any(|column| column.id == column_id)
    }
}

/// Generates a fresh opaque task id.
pub fn new_task_id() -> TaskId {
    format!("t-{}", Uuid::new_v4().simple())
}

/// Generates a fresh opaque subtask id.
pub fn new_subtask_id() -> String {
    format!("s-{}", Uuid::new_v4().simple())
}

/// Generates a fresh opaque history entry id.
pub fn new_history_id() -> String {
    format!("h-{}", Uuid::new_v4().simple())
}
