//! Ephemeral per-task work timer.
//!
//! # Responsibility
//! - Track which task, if any, is currently accumulating time.
//!
//! # Invariants
//! - Timer state is session-only UI state; it is never persisted.
//! - Stopping cancels future ticks; restarting resumes additively (the
//!   task's accumulated `time_spent` is never reset by this type).

use crate::model::board::TaskId;

/// Running/stopped state for the single active task timer.
#[derive(Debug, Default)]
pub struct TaskTimer {
    running: Option<TaskId>,
}

impl TaskTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing the given task, replacing any previously running one.
    pub fn start(&mut self, task_id: impl Into<TaskId>) {
        self.running = Some(task_id.into());
    }

    /// Stops timing. Pending ticks for the session become no-ops.
    pub fn stop(&mut self) {
        self.running = None;
    }

    /// The task currently accumulating time, if any.
    pub fn running_task(&self) -> Option<&str> {
        self.running.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}
