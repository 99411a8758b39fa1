//! Persistence adapter over the scoped key-value store.
//!
//! # Responsibility
//! - Serialize the board document and theme to their fixed keys.
//! - Convert every storage failure into a logged fallback; nothing here
//!   propagates an error to the caller.

pub mod board_adapter;
