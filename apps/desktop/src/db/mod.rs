//! Local SQLite persistence for flashcards and settings.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{
    FlashcardRepository, RecordRepository, SettingsRepository, SqliteRepository,
    FLASHCARD_RECORD, SETTINGS_RECORD,
};
