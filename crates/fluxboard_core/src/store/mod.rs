//! Board store: the owned application context.
//!
//! # Responsibility
//! - Hold the current board document and theme as the single source of
//!   truth for the session.
//! - Funnel every mutation through one entry point that swaps the whole
//!   document and re-persists it.

pub mod board_store;
