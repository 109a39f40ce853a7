//! Repository pattern for database access.
//!
//! Flashcards and settings live in two independent named records, each a JSON
//! snapshot rewritten in full on every save.

use crate::db::error::DbError;
use crate::db::schema::{INIT_SCHEMA_VERSION, SCHEMA, SCHEMA_VERSION};
use chrono::Utc;
use reader_core::types::{DeckSnapshot, Settings};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Record holding the flashcard deck snapshot.
pub const FLASHCARD_RECORD: &str = "flashcard-storage";

/// Record holding the display settings.
pub const SETTINGS_RECORD: &str = "settings-storage";

/// Raw access to named records.
pub trait RecordRepository {
    fn get_record(&self, name: &str) -> Result<Option<String>>;
    fn put_record(&self, name: &str, payload: &str) -> Result<()>;
    fn delete_record(&self, name: &str) -> Result<()>;
}

/// Repository for the flashcard deck.
pub trait FlashcardRepository {
    fn load_flashcards(&self) -> Result<Option<DeckSnapshot>>;
    fn save_flashcards(&self, snapshot: &DeckSnapshot) -> Result<()>;
}

/// Repository for display settings.
pub trait SettingsRepository {
    /// Stored settings, or defaults on first launch.
    fn load_settings(&self) -> Result<Settings>;
    fn save_settings(&self, settings: &Settings) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(INIT_SCHEMA_VERSION, params![SCHEMA_VERSION])?;
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i32> {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .map_err(Into::into)
    }

    fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.get_record(name)? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_string(value)?;
        self.put_record(name, &payload)
    }
}

impl RecordRepository for SqliteRepository {
    fn get_record(&self, name: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT payload FROM records WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn put_record(&self, name: &str, payload: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO records (name, payload, updated_at) VALUES (?1, ?2, ?3)",
            params![name, payload, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn delete_record(&self, name: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM records WHERE name = ?1", params![name])?;
        Ok(())
    }
}

impl FlashcardRepository for SqliteRepository {
    fn load_flashcards(&self) -> Result<Option<DeckSnapshot>> {
        self.load_json(FLASHCARD_RECORD)
    }

    fn save_flashcards(&self, snapshot: &DeckSnapshot) -> Result<()> {
        self.save_json(FLASHCARD_RECORD, snapshot)
    }
}

impl SettingsRepository for SqliteRepository {
    fn load_settings(&self) -> Result<Settings> {
        Ok(self
            .load_json::<Settings>(SETTINGS_RECORD)?
            .unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.save_json(SETTINGS_RECORD, settings)
    }
}
