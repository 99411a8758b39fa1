//! Board and theme persistence over two independent keys.
//!
//! # Responsibility
//! - Whole-document JSON save/load of `BoardData` under `fluxboard_v4_data`.
//! - Bare-string save/load of `Theme` under `fluxboard_theme_v2`.
//!
//! # Invariants
//! - Loads never fail: absence, storage errors and corrupt JSON all degrade
//!   to the seed board or the default theme, logged for diagnostics.
//! - Saves are best-effort: failures are logged and swallowed; the caller's
//!   in-memory state stays authoritative for the session.

use crate::model::board::{BoardData, Theme};
use crate::seed::seed_board;
use crate::storage::KeyValueStore;
use log::{debug, error, warn};

/// Fixed key holding the JSON board document.
pub const BOARD_KEY: &str = "fluxboard_v4_data";

/// Fixed key holding the bare theme string.
pub const THEME_KEY: &str = "fluxboard_theme_v2";

/// Persistence boundary between the board store and the key-value primitive.
pub struct BoardAdapter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> BoardAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serializes and writes the whole board document, best-effort.
    pub fn save_board(&self, board: &BoardData) {
        let payload = match serde_json::to_string(board) {
            Ok(payload) => payload,
            Err(err) => {
                error!("event=board_save module=adapter status=error reason=serialize error={err}");
                return;
            }
        };
        match self.store.set(BOARD_KEY, &payload) {
            Ok(()) => debug!(
                "event=board_save module=adapter status=ok bytes={}",
                payload.len()
            ),
            Err(err) => {
                error!("event=board_save module=adapter status=error reason=store_set error={err}");
            }
        }
    }

    /// Loads the persisted board, falling back to the seed dataset.
    ///
    /// `now_ms` anchors the seed's relative due dates when a fallback is
    /// needed; it is unused on the happy path.
    pub fn load_board(&self, now_ms: i64) -> BoardData {
        let stored = match self.store.get(BOARD_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                error!("event=board_load module=adapter status=error reason=store_get error={err}");
                return seed_board(now_ms);
            }
        };

        let Some(payload) = stored else {
            debug!("event=board_load module=adapter status=ok source=seed reason=absent");
            return seed_board(now_ms);
        };

        match serde_json::from_str::<BoardData>(&payload) {
            Ok(board) => {
                debug!(
                    "event=board_load module=adapter status=ok source=store tasks={}",
                    board.tasks.len()
                );
                board
            }
            Err(err) => {
                warn!("event=board_load module=adapter status=error reason=parse error={err}");
                seed_board(now_ms)
            }
        }
    }

    /// Writes the theme string, best-effort.
    pub fn save_theme(&self, theme: Theme) {
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            error!("event=theme_save module=adapter status=error error={err}");
        }
    }

    /// Loads the persisted theme, treating anything unrecognized as absent.
    pub fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                warn!("event=theme_load module=adapter status=error reason=unknown_value value={value}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                error!("event=theme_load module=adapter status=error reason=store_get error={err}");
                Theme::default()
            }
        }
    }
}
