//! Core types for the reader: flashcards, ratings, session scopes and settings.

use crate::document::Word;
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest mastery level. Cards at this level are mastered and leave the queue.
pub const MAX_MASTERY: u8 = 5;

/// Rating given by the reviewer for the card on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// All ratings in button order.
    pub const ALL: [Rating; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            other => Err(CoreError::InvalidRating {
                value: other.to_string(),
            }),
        }
    }
}

/// A word of the active document together with its review state.
///
/// Identity is the word id. `last_reviewed` is stored as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub l2: String,
    pub l1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub mastery: u8,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Flashcard {
    /// Fresh card for a word: mastery 0, never reviewed.
    pub fn from_word(word: &Word) -> Self {
        Self {
            id: word.id.clone(),
            l2: word.l2.clone(),
            l1: word.l1.clone(),
            pronunciation: word.pronunciation.clone(),
            mastery: 0,
            last_reviewed: None,
        }
    }

    pub fn is_mastered(&self) -> bool {
        self.mastery >= MAX_MASTERY
    }

    /// Queue ordering key. A card that was never reviewed sorts as epoch 0.
    pub fn review_key(&self) -> (u8, i64) {
        (
            self.mastery,
            self.last_reviewed.map_or(0, |t| t.timestamp_millis()),
        )
    }
}

/// Persisted shape of the deck: a full snapshot of every card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    /// Book the cards were built from. Snapshots without one are never restored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    pub cards: Vec<Flashcard>,
}

/// Inclusive paragraph-number range that defines a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScope {
    pub start_paragraph_number: u32,
    pub end_paragraph_number: u32,
}

impl SessionScope {
    pub fn new(start_paragraph_number: u32, end_paragraph_number: u32) -> Self {
        Self {
            start_paragraph_number,
            end_paragraph_number,
        }
    }

    /// A reversed range selects nothing.
    pub fn is_empty(&self) -> bool {
        self.start_paragraph_number > self.end_paragraph_number
    }

    pub fn contains(&self, paragraph_number: u32) -> bool {
        self.start_paragraph_number <= paragraph_number
            && paragraph_number <= self.end_paragraph_number
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Sepia,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

/// Reading font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    Base,
    Lg,
}

impl Default for FontSize {
    fn default() -> Self {
        Self::Base
    }
}

/// Script font used for the L2 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptFont {
    Uthmani,
    Indopak,
    LatinSerif,
}

impl Default for ScriptFont {
    fn default() -> Self {
        Self::Uthmani
    }
}

/// Display preferences. Read-only context for the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub font_size: FontSize,
    pub show_word_by_word: bool,
    pub translation_language: String,
    pub script_font: ScriptFont,
    pub is_rtl: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: FontSize::default(),
            show_word_by_word: true,
            translation_language: "English".to_string(),
            script_font: ScriptFont::default(),
            is_rtl: true,
        }
    }
}

impl Settings {
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
    }

    pub fn toggle_word_by_word(&mut self) {
        self.show_word_by_word = !self.show_word_by_word;
    }

    pub fn set_translation_language(&mut self, language: impl Into<String>) {
        self.translation_language = language.into();
    }

    pub fn set_script_font(&mut self, font: ScriptFont) {
        self.script_font = font;
    }

    pub fn toggle_rtl(&mut self) {
        self.is_rtl = !self.is_rtl;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn rating_parses_known_values() {
        for rating in Rating::ALL {
            assert_eq!(rating.as_str().parse::<Rating>().unwrap(), rating);
        }
    }

    #[test]
    fn rating_rejects_unknown_value() {
        let err = "medium".parse::<Rating>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidRating {
                value: "medium".to_string()
            }
        );
    }

    #[test]
    fn flashcard_serializes_last_reviewed_as_millis() {
        let card = Flashcard {
            id: "w1".into(),
            l2: "كُنْتُ".into(),
            l1: "I was".into(),
            pronunciation: None,
            mastery: 2,
            last_reviewed: Some(Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["lastReviewed"], 1_700_000_000_123i64);
        assert!(json.get("pronunciation").is_none());

        let never = Flashcard {
            last_reviewed: None,
            ..card
        };
        let json = serde_json::to_value(&never).unwrap();
        assert!(json["lastReviewed"].is_null());
    }

    #[test]
    fn review_key_treats_never_reviewed_as_epoch() {
        let card = Flashcard {
            id: "w1".into(),
            l2: "a".into(),
            l1: "b".into(),
            pronunciation: None,
            mastery: 3,
            last_reviewed: None,
        };
        assert_eq!(card.review_key(), (3, 0));
    }

    #[test]
    fn reversed_scope_is_empty() {
        let scope = SessionScope::new(4, 2);
        assert!(scope.is_empty());
        assert!(!scope.contains(3));
        assert!(SessionScope::new(2, 2).contains(2));
    }

    #[test]
    fn settings_defaults_match_first_launch() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, FontSize::Base);
        assert!(settings.show_word_by_word);
        assert_eq!(settings.translation_language, "English");
        assert_eq!(settings.script_font, ScriptFont::Uthmani);
        assert!(settings.is_rtl);
    }

    #[test]
    fn settings_use_camel_case_keys() {
        let mut settings = Settings::default();
        settings.set_script_font(ScriptFont::LatinSerif);
        settings.toggle_rtl();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["scriptFont"], "latin-serif");
        assert_eq!(json["isRtl"], false);
        assert_eq!(json["fontSize"], "base");
        assert_eq!(json["showWordByWord"], true);
    }
}
