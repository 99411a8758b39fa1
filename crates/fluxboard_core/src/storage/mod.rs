//! Scoped key-value storage primitive.
//!
//! # Responsibility
//! - Define the string-keyed get/set/remove contract the persistence
//!   adapter depends on.
//! - Keep SQLite details inside the storage boundary.
//!
//! # Invariants
//! - The adapter never assumes durability or availability beyond this
//!   contract; every caller above it must tolerate failed operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::{open_store, open_store_in_memory, SqliteKeyValueStore};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for bootstrap and key-value operations.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// The backing database was written by a newer schema than this binary.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed store with get/set/remove semantics.
///
/// This is the only capability the core requires from its persistence
/// collaborator. Implementations may fail on any call; callers above the
/// adapter boundary treat failures as absence (reads) or best-effort (writes).
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
