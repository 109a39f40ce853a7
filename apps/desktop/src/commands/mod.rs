//! Commands exposed to the UI shell.
//!
//! Each command locks the reader state, mutates it, saves the affected
//! snapshot and only then returns, so the next view always reflects the last
//! write.

pub mod document;
pub mod settings;
pub mod study;

pub use document::{default_scope, get_book, load_book, scope_word_count, LoadBookResult};
pub use settings::{
    get_settings, save_settings, set_font_size, set_script_font, set_theme,
    set_translation_language, toggle_rtl, toggle_word_by_word,
};
pub use study::{
    check_typed_answer, get_cards, get_session, reset_progress, submit_review, ReviewRequest,
    ReviewResponse, SessionView,
};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::db::DbError> for CommandError {
    fn from(e: crate::db::DbError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<reader_core::CoreError> for CommandError {
    fn from(e: reader_core::CoreError) -> Self {
        Self { message: e.to_string() }
    }
}
