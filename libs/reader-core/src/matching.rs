//! Typed-answer checking for the review screen.
//!
//! The reader may type the L1 gloss before revealing it. Checking is advisory:
//! only the rating changes the deck.

use crate::types::Flashcard;
use serde::{Deserialize, Serialize};

/// Similarity required by [`MatchingMode::Fuzzy`] unless told otherwise.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// How strictly a typed answer must match the gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::CaseInsensitive
    }
}

/// Outcome of checking a typed answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    /// 0.0 to 1.0.
    pub similarity: f64,
    pub matching_mode: MatchingMode,
    pub typed_normalized: String,
    pub correct_normalized: String,
}

/// Check `typed` against the card's L1 gloss.
pub fn check_answer(
    typed: &str,
    card: &Flashcard,
    mode: MatchingMode,
    fuzzy_threshold: f64,
) -> MatchResult {
    compare_answers(typed, &card.l1, mode, fuzzy_threshold)
}

/// Compare two answers after trimming both ends. Inner spacing counts.
pub fn compare_answers(
    typed: &str,
    correct: &str,
    mode: MatchingMode,
    fuzzy_threshold: f64,
) -> MatchResult {
    let typed_normalized = typed.trim().to_string();
    let correct_normalized = correct.trim().to_string();

    let similarity = match mode {
        MatchingMode::Exact => exact_score(typed_normalized == correct_normalized),
        MatchingMode::CaseInsensitive => exact_score(
            typed_normalized.to_lowercase() == correct_normalized.to_lowercase(),
        ),
        MatchingMode::Fuzzy => similarity(
            &typed_normalized.to_lowercase(),
            &correct_normalized.to_lowercase(),
        ),
    };
    let is_correct = match mode {
        MatchingMode::Fuzzy => similarity >= fuzzy_threshold,
        _ => similarity == 1.0,
    };

    MatchResult {
        is_correct,
        similarity,
        matching_mode: mode,
        typed_normalized,
        correct_normalized,
    }
}

fn exact_score(equal: bool) -> f64 {
    if equal {
        1.0
    } else {
        0.0
    }
}

/// Edit distance counted in chars, so Arabic and other multi-byte scripts work.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}

/// `1 - distance / longer length`; two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}
