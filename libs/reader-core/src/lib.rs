//! Core library for the bilingual reader.
//!
//! Provides:
//! - Document model (Book, Chapter, Paragraph, Word)
//! - Flashcard deck that tracks the active book's vocabulary
//! - Mastery counter updates for again/hard/good/easy ratings
//! - Session selection: scope word sets, due queue, progress
//! - Typed-answer checking
//! - Display settings shared with the UI

pub mod deck;
pub mod document;
pub mod error;
pub mod mastery;
pub mod matching;
pub mod session;
pub mod types;

pub use deck::Deck;
pub use document::{Book, Chapter, Paragraph, Word};
pub use error::{CoreError, Result};
pub use mastery::{apply_rating, next_mastery, ReviewOutcome};
pub use matching::{check_answer, compare_answers, MatchResult, MatchingMode};
pub use session::{
    default_scope, due_queue, scope_word_count, session_word_ids, Session, SessionProgress,
    SessionStatus,
};
pub use types::{
    DeckSnapshot, Flashcard, FontSize, Rating, ScriptFont, SessionScope, Settings, Theme,
    MAX_MASTERY,
};
