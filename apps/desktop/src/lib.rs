//! Desktop application layer for the bilingual reader.
//!
//! Owns the reader state, persists it to SQLite and exposes the commands a UI
//! shell calls.

pub mod commands;
pub mod config;
pub mod data;
pub mod db;
pub mod logging;
pub mod state;

use anyhow::Context;
use config::AppConfig;
use db::SqliteRepository;
use reader_core::Book;
use state::AppState;
use tracing::info;

/// Open the database and build the state for `book`.
///
/// Falls back to the bundled sample book when no document is given.
pub fn bootstrap(config: &AppConfig, book: Option<Book>) -> anyhow::Result<AppState> {
    if let Some(parent) = config
        .db_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    let repository = SqliteRepository::open(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    info!(path = %config.db_path.display(), "opened database");

    let book = book.unwrap_or_else(data::sample_book);
    AppState::load(repository, book).context("failed to load reader state")
}

/// Configure from the environment, start logging and bootstrap.
pub fn run() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();
    logging::init(&config.log_filter);
    bootstrap(&config, None)
}
