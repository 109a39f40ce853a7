//! Mastery counter updates.
//!
//! Not a spaced repetition scheduler: a rating moves a card along a 0..=5
//! counter and stamps the review time, nothing more.

use crate::types::{Flashcard, Rating, MAX_MASTERY};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of applying a rating to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    pub card_id: String,
    pub rating: Rating,
    pub mastery_before: u8,
    pub mastery_after: u8,
    pub reviewed_at: DateTime<Utc>,
}

/// Mastery after `rating`, given the current level.
///
/// `Hard` demotes to 1 regardless of the current level.
pub fn next_mastery(current: u8, rating: Rating) -> u8 {
    let current = current.min(MAX_MASTERY);
    match rating {
        Rating::Again => 0,
        Rating::Hard => 1,
        Rating::Good => (current + 1).min(MAX_MASTERY),
        Rating::Easy => (current + 2).min(MAX_MASTERY),
    }
}

/// Apply `rating` to `card` in place.
///
/// The stored review time never moves backwards: an earlier `now` keeps the
/// existing timestamp.
pub fn apply_rating(card: &mut Flashcard, rating: Rating, now: DateTime<Utc>) -> ReviewOutcome {
    let mastery_before = card.mastery;
    card.mastery = next_mastery(card.mastery, rating);

    let reviewed_at = match card.last_reviewed {
        Some(previous) if previous > now => previous,
        _ => now,
    };
    card.last_reviewed = Some(reviewed_at);

    ReviewOutcome {
        card_id: card.id.clone(),
        rating,
        mastery_before,
        mastery_after: card.mastery,
        reviewed_at,
    }
}
