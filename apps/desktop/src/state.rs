//! Application state.

use crate::db::{DbError, FlashcardRepository, SettingsRepository, SqliteRepository};
use reader_core::{Book, Deck, Settings};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// The active document with its deck and the display settings.
///
/// Book and deck are only ever replaced together.
#[derive(Debug)]
pub struct ReaderState {
    pub book: Book,
    pub deck: Deck,
    pub settings: Settings,
}

/// Global application state.
///
/// Lock order: `reader` before `repository`.
pub struct AppState {
    pub repository: Arc<Mutex<SqliteRepository>>,
    pub reader: Mutex<ReaderState>,
}

impl AppState {
    /// Build the state for `book`.
    ///
    /// Saved progress is restored when it was taken from the same book with the
    /// same words; otherwise the deck starts fresh and the new snapshot is saved.
    /// Unreadable records are replaced rather than blocking startup.
    pub fn load(repository: SqliteRepository, book: Book) -> Result<Self, DbError> {
        let settings = match repository.load_settings() {
            Ok(settings) => settings,
            Err(DbError::Json(e)) => {
                warn!(error = %e, "discarding unreadable settings");
                let settings = Settings::default();
                repository.save_settings(&settings)?;
                settings
            }
            Err(e) => return Err(e),
        };
        let mut deck = Deck::for_book(&book);

        let restored = match repository.load_flashcards() {
            Ok(Some(snapshot)) => deck.restore_progress(&snapshot),
            Ok(None) => false,
            Err(DbError::Json(e)) => {
                warn!(error = %e, "discarding unreadable flashcard snapshot");
                false
            }
            Err(e) => return Err(e),
        };

        if restored {
            info!(
                book = deck.book_id().unwrap_or_default(),
                cards = deck.len(),
                "restored flashcard progress"
            );
        } else {
            repository.save_flashcards(&deck.snapshot())?;
            info!(book = %book.id, cards = deck.len(), "initialized flashcard deck");
        }

        Ok(Self {
            repository: Arc::new(Mutex::new(repository)),
            reader: Mutex::new(ReaderState {
                book,
                deck,
                settings,
            }),
        })
    }
}
