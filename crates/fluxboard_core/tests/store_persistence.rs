use fluxboard_core::{
    open_store, open_store_in_memory, seed_board, BoardAction, BoardAdapter, BoardData,
    BoardStore, KeyValueStore, StorageError, StorageResult, TaskDraft, Theme, BOARD_KEY,
    THEME_KEY,
};

const NOW_MS: i64 = 1_700_000_000_000;

/// Store double that accepts reads but fails every write.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}

/// Store double whose reads fail outright.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}

#[test]
fn board_roundtrips_through_a_healthy_store() {
    let adapter = BoardAdapter::new(open_store_in_memory().unwrap());
    let board = seed_board(NOW_MS);

    adapter.save_board(&board);
    let loaded = adapter.load_board(NOW_MS + 1);

    assert_eq!(loaded, board);
}

#[test]
fn absent_board_falls_back_to_seed() {
    let adapter = BoardAdapter::new(open_store_in_memory().unwrap());
    let loaded = adapter.load_board(NOW_MS);

    let seed = seed_board(NOW_MS);
    assert_eq!(loaded.columns, seed.columns);
    assert_eq!(loaded.tasks.len(), seed.tasks.len());
}

#[test]
fn corrupt_board_document_falls_back_to_seed() {
    let store = open_store_in_memory().unwrap();
    store.set(BOARD_KEY, "{not json at all").unwrap();

    let adapter = BoardAdapter::new(store);
    let loaded = adapter.load_board(NOW_MS);

    assert_eq!(loaded.columns, seed_board(NOW_MS).columns);
}

#[test]
fn failed_board_read_falls_back_to_seed() {
    let adapter = BoardAdapter::new(BrokenStore);
    let loaded = adapter.load_board(NOW_MS);
    assert_eq!(loaded.columns, seed_board(NOW_MS).columns);
    assert_eq!(adapter.load_theme(), Theme::Void);
}

#[test]
fn theme_roundtrips_and_unknown_values_default_to_void() {
    let store = open_store_in_memory().unwrap();
    let adapter = BoardAdapter::new(store);

    assert_eq!(adapter.load_theme(), Theme::Void);

    adapter.save_theme(Theme::Paper);
    assert_eq!(adapter.load_theme(), Theme::Paper);

    adapter.save_theme(Theme::Void);
    assert_eq!(adapter.load_theme(), Theme::Void);
}

#[test]
fn unknown_persisted_theme_is_treated_as_absent() {
    let store = open_store_in_memory().unwrap();
    store.set(THEME_KEY, "neon").unwrap();

    let adapter = BoardAdapter::new(store);
    assert_eq!(adapter.load_theme(), Theme::Void);
}

#[test]
fn store_open_rejects_future_schema_versions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    drop(conn);

    match open_store(&path) {
        Err(StorageError::UnsupportedSchemaVersion {
            db_version: 99,
            latest_supported,
        }) => assert!(latest_supported < 99),
        other => panic!("expected schema rejection, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    let board = seed_board(NOW_MS);
    {
        let adapter = BoardAdapter::new(open_store(&path).unwrap());
        adapter.save_board(&board);
        adapter.save_theme(Theme::Paper);
    }

    let adapter = BoardAdapter::new(open_store(&path).unwrap());
    assert_eq!(adapter.load_board(NOW_MS + 1), board);
    assert_eq!(adapter.load_theme(), Theme::Paper);
}

#[test]
fn store_opens_with_seed_and_persists_applied_actions() {
    let mut store = BoardStore::open(BoardAdapter::new(open_store_in_memory().unwrap()));
    assert_eq!(store.board().columns.len(), 5);

    let id = store
        .apply(BoardAction::CreateTask {
            draft: TaskDraft::new("Persisted task", "todo"),
        })
        .unwrap();
    store.apply(BoardAction::MoveTask {
        task_id: id.clone(),
        target_column_id: "done".to_string(),
    });

    let task = store.board().task(&id).unwrap();
    assert_eq!(task.column_id, "done");
    assert_eq!(task.history.len(), 2);
}

#[test]
fn reopening_the_same_backing_store_restores_applied_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    let id = {
        let mut store = BoardStore::open(BoardAdapter::new(open_store(&path).unwrap()));
        store
            .apply(BoardAction::CreateTask {
                draft: TaskDraft::new("Survives restart", "backlog"),
            })
            .unwrap()
    };

    let reopened = BoardStore::open(BoardAdapter::new(open_store(&path).unwrap()));
    let task = reopened.board().task(&id).unwrap();
    assert_eq!(task.title, "Survives restart");
    assert_eq!(task.column_id, "backlog");
}

#[test]
fn failed_saves_are_swallowed_and_memory_stays_authoritative() {
    let mut store = BoardStore::open(BoardAdapter::new(ReadOnlyStore));
    let before = store.board().tasks.len();

    let id = store
        .apply(BoardAction::CreateTask {
            draft: TaskDraft::new("Only in memory", "todo"),
        })
        .unwrap();

    assert_eq!(store.board().tasks.len(), before + 1);
    assert_eq!(store.board().task(&id).unwrap().title, "Only in memory");

    store.set_theme(Theme::Paper);
    assert_eq!(store.theme(), Theme::Paper);
}

#[test]
fn replace_swaps_the_whole_document() {
    let mut store = BoardStore::open(BoardAdapter::new(open_store_in_memory().unwrap()));
    let empty = BoardData::default();

    store.replace(empty.clone());
    assert_eq!(store.board(), &empty);
}
