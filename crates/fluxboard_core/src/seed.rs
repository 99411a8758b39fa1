//! Fixed demo dataset used on first run and after corrupt loads.
//!
//! # Responsibility
//! - Provide the seeded columns and demo tasks the board degrades to
//!   whenever no valid persisted document exists.
//!
//! # Invariants
//! - Column ids here are the only ones the modeled interface ever creates.
//! - Seeded content is deterministic for a given `now_ms`; only generated
//!   history ids differ between calls.

use crate::model::board::{BoardData, Column, HistoryEntry, Priority, Subtask, Task};

const DAY_MS: i64 = 86_400_000;

fn column(id: &str, title: &str, color: &str) -> Column {
    Column {
        id: id.to_string(),
        title: title.to_string(),
        color: color.to_string(),
    }
}

fn subtask(id: &str, title: &str, completed: bool) -> Subtask {
    Subtask {
        id: id.to_string(),
        title: title.to_string(),
        completed,
    }
}

/// RFC 3339 rendering of an epoch-milliseconds instant, date precision.
///
/// Good enough for demo due dates; the core never parses these back.
fn due_in(now_ms: i64, days: i64) -> Option<String> {
    let target_ms = now_ms + days * DAY_MS;
    let days_since_epoch = target_ms.div_euclid(DAY_MS);
    let (year, month, day) = civil_from_days(days_since_epoch);
    Some(format!("{year:04}-{month:02}-{day:02}T00:00:00Z"))
}

// Howard Hinnant's civil-from-days algorithm.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let days = days + 719_468;
    let era = days.div_euclid(146_097);
    let doe = days.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

/// Builds the fixed seed board around the given instant.
pub fn seed_board(now_ms: i64) -> BoardData {
    BoardData {
        columns: vec![
            column("backlog", "BACKLOG", "zinc-600"),
            column("todo", "TO DO", "zinc-400"),
            column("in-progress", "IN PROGRESS", "amber-400"),
            column("review", "REVIEW", "violet-500"),
            column("done", "DONE", "emerald-400"),
        ],
        tasks: vec![
            Task {
                id: "t-1".to_string(),
                column_id: "todo".to_string(),
                title: "Shape the interface".to_string(),
                description: "Build a moodboard for the new UI, leaning on brutalist layouts and Swiss typography.".to_string(),
                due_date: due_in(now_ms, 2),
                priority: Priority::High,
                subtasks: vec![
                    subtask("s-1", "Collect references", true),
                    subtask("s-2", "Pick a palette", false),
                    subtask("s-3", "Sketch the grid", false),
                ],
                tags: vec!["Design".to_string(), "UX".to_string()],
                accent_color: "#f43f5e".to_string(),
                assignees: vec!["MK".to_string(), "AD".to_string()],
                time_spent: 3600,
                history: vec![
                    HistoryEntry::new("TASK CREATED", now_ms - 100_000),
                    HistoryEntry::new("LOGGED 1H OF WORK", now_ms - 5_000),
                ],
                created_at: now_ms,
            },
            Task {
                id: "t-2".to_string(),
                column_id: "in-progress".to_string(),
                title: "Modular grid".to_string(),
                description: "Define the responsive grid for the main section. CSS Grid with subgrid support.".to_string(),
                due_date: due_in(now_ms, 5),
                priority: Priority::Medium,
                subtasks: vec![subtask("s-2-1", "Tailwind config", true)],
                tags: vec!["Dev".to_string(), "Frontend".to_string()],
                accent_color: "#eab308".to_string(),
                assignees: vec!["MK".to_string()],
                time_spent: 1200,
                history: Vec::new(),
                created_at: now_ms - 100_000,
            },
            Task {
                id: "t-3".to_string(),
                column_id: "review".to_string(),
                title: "Asset pipeline pass".to_string(),
                description: "Compress imagery and video to webm/avif, then re-check load performance.".to_string(),
                due_date: due_in(now_ms, -1),
                priority: Priority::High,
                subtasks: Vec::new(),
                tags: vec!["Performance".to_string(), "Dev".to_string()],
                accent_color: "#8b5cf6".to_string(),
                assignees: vec!["PL".to_string()],
                time_spent: 5400,
                history: Vec::new(),
                created_at: now_ms - 200_000,
            },
            Task {
                id: "t-4".to_string(),
                column_id: "backlog".to_string(),
                title: "Design system".to_string(),
                description: "Component library in Figma. Buttons, inputs, interaction states.".to_string(),
                due_date: None,
                priority: Priority::Medium,
                subtasks: vec![
                    subtask("s-4-1", "Primary button", false),
                    subtask("s-4-2", "Secondary button", false),
                    subtask("s-4-3", "Inputs", false),
                ],
                tags: vec!["Design".to_string(), "System".to_string()],
                accent_color: "#06b6d4".to_string(),
                assignees: vec!["AD".to_string(), "MK".to_string()],
                time_spent: 0,
                history: Vec::new(),
                created_at: now_ms - 50_000,
            },
            Task {
                id: "t-5".to_string(),
                column_id: "done".to_string(),
                title: "Client briefing".to_string(),
                description: "Kick-off meeting: requirements and budget locked in.".to_string(),
                due_date: due_in(now_ms, -10),
                priority: Priority::Low,
                subtasks: vec![
                    subtask("s-5-1", "Meeting notes", true),
                    subtask("s-5-2", "Send the offer", true),
                ],
                tags: vec!["Meeting".to_string(), "Biz".to_string()],
                accent_color: "#22c55e".to_string(),
                assignees: vec!["CE".to_string()],
                time_spent: 1800,
                history: Vec::new(),
                created_at: now_ms - 1_000_000,
            },
            Task {
                id: "t-6".to_string(),
                column_id: "in-progress".to_string(),
                title: "API integration".to_string(),
                description: "Wire the dashboard view to the endpoints. Handle 4xx/5xx failures.".to_string(),
                due_date: due_in(now_ms, 1),
                priority: Priority::High,
                subtasks: Vec::new(),
                tags: vec!["Backend".to_string(), "API".to_string()],
                accent_color: "#f97316".to_string(),
                assignees: vec!["PL".to_string(), "MK".to_string()],
                time_spent: 7200,
                history: Vec::new(),
                created_at: now_ms - 40_000,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::seed_board;

    const NOW_MS: i64 = 1_700_000_000_000;

    #[test]
    fn seed_has_five_columns_and_every_task_resolves() {
        let board = seed_board(NOW_MS);
        assert_eq!(board.columns.len(), 5);
        assert!(!board.tasks.is_empty());
        for task in &board.tasks {
            assert!(board.has_column(&task.column_id), "dangling seed column for {}", task.id);
            assert!(task.assignees.len() <= 4);
            assert!(task.assignees.iter().all(|a| a.chars().count() <= 2));
        }
    }

    #[test]
    fn seed_is_deterministic_for_fixed_instant() {
        let first = seed_board(NOW_MS);
        let second = seed_board(NOW_MS);
        assert_eq!(first.columns, second.columns);
        assert_eq!(first.tasks.len(), second.tasks.len());
        for (a, b) in first.tasks.iter().zip(&second.tasks) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.due_date, b.due_date);
            assert_eq!(a.created_at, b.created_at);
        }
    }

    #[test]
    fn due_dates_render_as_rfc3339_dates() {
        let board = seed_board(NOW_MS);
        let due = board.task("t-1").unwrap().due_date.clone().unwrap();
        assert!(due.ends_with("T00:00:00Z"));
        assert_eq!(due.len(), "2023-11-16T00:00:00Z".len());
    }
}
