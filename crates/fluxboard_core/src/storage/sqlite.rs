//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Open file or in-memory stores and bring the schema up to date.
//! - Implement the `KeyValueStore` contract over one `kv_entries` table.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Returned stores have the schema fully applied; a database written by a
//!   newer binary is rejected instead of partially read.

use super::{KeyValueStore, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv_entries (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Key-value store persisted in a SQLite database.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

/// Opens a store file and applies the schema.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=store_open module=storage status=start mode=file");

    let result = Connection::open(path)
        .map_err(StorageError::from)
        .and_then(bootstrap);
    log_open_outcome("file", started_at, &result);
    result
}

/// Opens an in-memory store and applies the schema.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store_in_memory() -> StorageResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=store_open module=storage status=start mode=memory");

    let result = Connection::open_in_memory()
        .map_err(StorageError::from)
        .and_then(bootstrap);
    log_open_outcome("memory", started_at, &result);
    result
}

fn bootstrap(conn: Connection) -> StorageResult<SqliteKeyValueStore> {
    conn.busy_timeout(Duration::from_secs(5))?;

    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if db_version > SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if db_version < SCHEMA_VERSION {
        conn.execute_batch(SCHEMA_SQL)?;
        conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    }

    Ok(SqliteKeyValueStore { conn })
}

fn log_open_outcome(mode: &str, started_at: Instant, result: &StorageResult<SqliteKeyValueStore>) {
    match result {
        Ok(_) => info!(
            "event=store_open module=storage status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=storage status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{open_store_in_memory, KeyValueStore};

    #[test]
    fn set_get_remove_roundtrip() {
        let store = open_store_in_memory().unwrap();

        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "first").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("first"));

        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }
}
