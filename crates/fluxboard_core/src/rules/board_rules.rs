//! Pure board mutation functions.
//!
//! # Responsibility
//! - Implement every user-triggered board change as a total function
//!   returning a new whole document.
//! - Append audit history for substantive task changes.
//!
//! # Invariants
//! - Unknown task ids make any rule a no-op that returns the input unchanged.
//! - History entries are only ever appended, never edited or dropped.
//! - `move_task` does not validate the target column; dangling references
//!   are surfaced by the read side instead (`filter::orphaned_tasks`).

use crate::model::board::{
    new_task_id, BoardData, HistoryEntry, Priority, Subtask, Task, TaskId, MAX_ASSIGNEES,
    MAX_ASSIGNEE_CHARS,
};
use log::debug;

/// Everything a new task carries except its identity and creation instant.
///
/// The create rule assigns `id` and `created_at` and seeds the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub priority: Priority,
    pub subtasks: Vec<Subtask>,
    pub tags: Vec<String>,
    pub accent_color: String,
    pub assignees: Vec<String>,
    pub time_spent: u64,
    pub column_id: String,
}

impl TaskDraft {
    /// Creates an empty draft targeting the given column.
    pub fn new(title: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: Priority::Low,
            subtasks: Vec::new(),
            tags: Vec::new(),
            accent_color: String::new(),
            assignees: Vec::new(),
            time_spent: 0,
            column_id: column_id.into(),
        }
    }
}

/// Moves a task into another column and records the destination.
///
/// # Contract
/// - Appends exactly one `MOVED TO: <TARGET>` history entry.
/// - Unknown `task_id` returns the board unchanged.
/// - The target column is not checked for existence.
pub fn move_task(board: &BoardData, task_id: &str, target_column_id: &str, now_ms: i64) -> BoardData {
    with_task(board, task_id, "move_task", |task| {
        task.column_id = target_column_id.to_string();
        task.history.push(HistoryEntry::new(
            format!("MOVED TO: {}", target_column_id.to_uppercase()),
            now_ms,
        ));
    })
}

/// Creates a task from a draft and inserts it into the board.
///
/// # Contract
/// - Assigns a fresh id and `created_at = now_ms`.
/// - Seeds `history` with a single `TASK CREATED` entry.
/// - A blank draft title is a silent no-op returning `(board.clone(), None)`.
pub fn create_task(board: &BoardData, draft: TaskDraft, now_ms: i64) -> (BoardData, Option<TaskId>) {
    if draft.title.trim().is_empty() {
        debug!("event=rule_rejected module=rules rule=create_task reason=blank_title");
        return (board.clone(), None);
    }

    let task = Task {
        id: new_task_id(),
        title: draft.title,
        description: draft.description,
        due_date: draft.due_date,
        priority: draft.priority,
        subtasks: draft.subtasks,
        tags: draft.tags,
        accent_color: draft.accent_color,
        assignees: draft.assignees,
        time_spent: draft.time_spent,
        history: vec![HistoryEntry::new("TASK CREATED", now_ms)],
        column_id: draft.column_id,
        created_at: now_ms,
    };

    let id = task.id.clone();
    let mut next = board.clone();
    next.tasks.push(task);
    (next, Some(id))
}

/// Replaces an existing task wholesale and records the update.
///
/// # Contract
/// - The replacement is matched by `replacement.id`; an unknown id or a
///   blank replacement title is a silent no-op.
/// - `created_at` and prior history are preserved from the stored task;
///   exactly one `UPDATED` entry is appended.
pub fn update_task(board: &BoardData, replacement: Task, now_ms: i64) -> BoardData {
    if replacement.title.trim().is_empty() {
        debug!("event=rule_rejected module=rules rule=update_task reason=blank_title");
        return board.clone();
    }

    let task_id = replacement.id.clone();
    with_task(board, &task_id, "update_task", move |task| {
        let created_at = task.created_at;
        let mut history = std::mem::take(&mut task.history);
        history.push(HistoryEntry::new("UPDATED", now_ms));

        *task = replacement;
        task.created_at = created_at;
        task.history = history;
    })
}

/// Removes a task from the board. Idempotent for unknown ids.
pub fn delete_task(board: &BoardData, task_id: &str) -> BoardData {
    let mut next = board.clone();
    next.tasks.retain(|task| task.id != task_id);
    next
}

/// Flips one subtask's completion flag. Appends no history.
pub fn toggle_subtask(board: &BoardData, task_id: &str, subtask_id: &str) -> BoardData {
    with_task(board, task_id, "toggle_subtask", |task| {
        if let Some(sub) = task.subtasks.iter_mut().find(|sub| sub.id == subtask_id) {
            sub.completed = !sub.completed;
        }
    })
}

/// Appends a new uncompleted subtask. Blank titles are a no-op.
pub fn add_subtask(board: &BoardData, task_id: &str, title: &str) -> BoardData {
    let title = title.trim();
    if title.is_empty() {
        debug!("event=rule_rejected module=rules rule=add_subtask reason=blank_title");
        return board.clone();
    }
    with_task(board, task_id, "add_subtask", |task| {
        task.subtasks.push(Subtask::new(title));
    })
}

/// Adds a free-text tag; exact case-sensitive duplicates and blanks are no-ops.
pub fn add_tag(board: &BoardData, task_id: &str, tag: &str) -> BoardData {
    let tag = tag.trim();
    if tag.is_empty() {
        debug!("event=rule_rejected module=rules rule=add_tag reason=blank_tag");
        return board.clone();
    }
    with_task(board, task_id, "add_tag", |task| {
        if !task.tags.iter().any(|existing| existing == tag) {
            task.tags.push(tag.to_string());
        }
    })
}

/// Removes a tag by exact match.
pub fn remove_tag(board: &BoardData, task_id: &str, tag: &str) -> BoardData {
    with_task(board, task_id, "remove_tag", |task| {
        task.tags.retain(|existing| existing != tag);
    })
}

/// Adds assignee initials, normalized to at most 2 uppercase characters.
///
/// # Contract
/// - Blank input is a no-op.
/// - A task already holding 4 assignees rejects the 5th as a no-op.
pub fn add_assignee(board: &BoardData, task_id: &str, initials: &str) -> BoardData {
    let normalized: String = initials
        .trim()
        .to_uppercase()
        .chars()
        .take(MAX_ASSIGNEE_CHARS)
        .collect();
    if normalized.is_empty() {
        debug!("event=rule_rejected module=rules rule=add_assignee reason=blank_input");
        return board.clone();
    }
    with_task(board, task_id, "add_assignee", move |task| {
        if task.assignees.len() >= MAX_ASSIGNEES {
            debug!(
                "event=rule_rejected module=rules rule=add_assignee reason=cap_reached task_id={}",
                task.id
            );
            return;
        }
        task.assignees.push(normalized);
    })
}

/// Removes every assignee entry exactly matching the given initials.
pub fn remove_assignee(board: &BoardData, task_id: &str, initials: &str) -> BoardData {
    with_task(board, task_id, "remove_assignee", |task| {
        task.assignees.retain(|existing| existing != initials);
    })
}

/// Adds elapsed whole seconds to a task's accumulated work time.
///
/// Time only ever grows through this path; the timer layer calls it with one
/// second per tick. Appends no history.
pub fn accumulate_time(board: &BoardData, task_id: &str, seconds: u64) -> BoardData {
    if seconds == 0 {
        return board.clone();
    }
    with_task(board, task_id, "accumulate_time", |task| {
        task.time_spent = task.time_spent.saturating_add(seconds);
    })
}

/// Clones the board and applies `mutate` to the task with the given id.
///
/// Returns the clone unchanged (and logs at debug) when the id does not
/// resolve, which is what makes every rule a silent no-op on unknown ids.
fn with_task<F>(board: &BoardData, task_id: &str, rule: &str, mutate: F) -> BoardData
where
    F: FnOnce(&mut Task),
{
    let mut next = board.clone();
    match next.tasks.iter_mut().find(|task| task.id == task_id) {
        Some(task) => mutate(task),
        None => {
            debug!("event=rule_rejected module=rules rule={rule} reason=unknown_task task_id={task_id}");
        }
    }
    next
}
