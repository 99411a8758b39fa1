//! Wall-clock access.
//!
//! The mutation rules take timestamps as parameters; this is the single
//! place the store reads the clock, so tests can pass fixed instants.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as Unix epoch milliseconds.
///
/// Clamps to 0 for clocks set before the epoch instead of panicking.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
