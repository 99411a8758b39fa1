//! Task mutation rules.
//!
//! # Responsibility
//! - Compute a full replacement `BoardData` from one user action.
//! - Enforce input constraints (blank titles, assignee cap, duplicate tags)
//!   as silent no-ops independently of the interaction layer.
//!
//! # Invariants
//! - Rules are pure: `(current board, params, now) -> new board`, no I/O.
//! - Move, create and update append exactly one history entry; all other
//!   rules leave `Task.history` untouched.

pub mod board_rules;
