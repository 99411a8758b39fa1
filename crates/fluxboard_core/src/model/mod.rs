//! Canonical board domain model.
//!
//! # Responsibility
//! - Define the data structures shared by rules, store and persistence.
//! - Keep one wire shape: the persisted JSON document serializes exactly
//!   these types.
//!
//! # Invariants
//! - Every task/subtask/history id is a stable opaque string, never reused.
//! - `Task.history` is append-only; nothing in this crate edits or removes
//!   entries once written.

pub mod board;
