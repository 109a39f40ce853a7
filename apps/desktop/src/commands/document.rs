//! Document commands.

use crate::db::FlashcardRepository;
use crate::state::AppState;
use reader_core::session;
use reader_core::{Book, Deck, SessionScope};
use tracing::info;

use super::CommandError;

#[derive(Debug, serde::Serialize)]
pub struct LoadBookResult {
    pub book_id: String,
    pub card_count: usize,
    pub default_scope: SessionScope,
}

/// Make `book` the active document.
///
/// The deck is rebuilt from scratch for the new book and saved before the
/// swap, so book and deck never disagree.
pub fn load_book(book: Book, state: &AppState) -> Result<LoadBookResult, CommandError> {
    let mut reader = state.reader.lock().expect("reader lock");

    let deck = Deck::for_book(&book);
    let card_count = deck.len();
    {
        let repo = state.repository.lock().expect("repository lock");
        repo.save_flashcards(&deck.snapshot())?;
    }

    let skipped = book.word_count() - card_count;
    info!(book = %book.id, cards = card_count, skipped, "loaded book");

    let result = LoadBookResult {
        book_id: book.id.clone(),
        card_count,
        default_scope: session::default_scope(&book),
    };
    reader.book = book;
    reader.deck = deck;
    Ok(result)
}

/// The active document.
pub fn get_book(state: &AppState) -> Result<Book, CommandError> {
    let reader = state.reader.lock().expect("reader lock");
    Ok(reader.book.clone())
}

/// Range preselected on the quiz setup screen.
pub fn default_scope(state: &AppState) -> Result<SessionScope, CommandError> {
    let reader = state.reader.lock().expect("reader lock");
    Ok(session::default_scope(&reader.book))
}

/// Words covered by `scope`, shown before a quiz starts.
pub fn scope_word_count(scope: SessionScope, state: &AppState) -> Result<usize, CommandError> {
    let reader = state.reader.lock().expect("reader lock");
    Ok(session::scope_word_count(&reader.book, scope))
}
