//! Read-time task filtering.
//!
//! # Responsibility
//! - Shape per-column task views for the rendering layer.
//! - Surface tasks whose column reference dangles instead of losing them.
//!
//! # Invariants
//! - Filtering never mutates stored data.

pub mod query;
