//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `fluxboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use fluxboard_core::{open_store_in_memory, BoardAdapter, BoardStore};

fn main() {
    println!("fluxboard_core version={}", fluxboard_core::core_version());

    let store = match open_store_in_memory() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let board = BoardStore::open(BoardAdapter::new(store));
    println!("theme={}", board.theme().as_str());
    for column in &board.board().columns {
        println!(
            "column id={} title={} tasks={}",
            column.id,
            column.title,
            board.column_view(&column.id, "").len()
        );
    }
}
