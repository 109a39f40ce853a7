//! Shared setup for integration tests.

#![allow(dead_code)]

pub mod fixtures;

use bilingual_reader_lib::config::AppConfig;
use bilingual_reader_lib::db::SqliteRepository;
use bilingual_reader_lib::state::AppState;
use bilingual_reader_lib::bootstrap;
use reader_core::Book;
use std::path::{Path, PathBuf};

/// State backed by an in-memory database.
pub fn memory_state(book: Book) -> AppState {
    let repo = SqliteRepository::open_in_memory().expect("in-memory database");
    AppState::load(repo, book).expect("load state")
}

pub fn config_at(dir: &Path) -> AppConfig {
    AppConfig {
        db_path: db_path(dir),
        log_filter: "warn".to_string(),
    }
}

pub fn db_path(dir: &Path) -> PathBuf {
    dir.join("data").join("reader.db")
}

/// Bootstrap against a database file, as a fresh process would.
pub fn start(dir: &Path, book: Book) -> AppState {
    bootstrap(&config_at(dir), Some(book)).expect("bootstrap")
}
