//! Flashcard deck for the active document.
//!
//! The deck always holds exactly the words of the current book. Loading a new
//! book replaces every card; progress is never merged across documents.

use crate::document::{Book, Word};
use crate::mastery::{apply_rating, ReviewOutcome};
use crate::types::{DeckSnapshot, Flashcard, Rating, MAX_MASTERY};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Ordered card collection with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    book_id: Option<String>,
    cards: Vec<Flashcard>,
    index: HashMap<String, usize>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck with one fresh card per word.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut deck = Self::new();
        deck.initialize(words);
        deck
    }

    /// Deck for `book`, tagged with its id so saved progress can be matched.
    pub fn for_book(book: &Book) -> Self {
        let mut deck = Self::from_words(book.words());
        deck.book_id = Some(book.id.clone());
        deck
    }

    /// Replace every card with fresh ones for `words`, in the given order.
    ///
    /// A repeated id keeps its first occurrence. The deck no longer belongs to
    /// any book afterwards. Returns the new card count.
    pub fn initialize<'a>(&mut self, words: impl IntoIterator<Item = &'a Word>) -> usize {
        self.book_id = None;
        self.replace(words.into_iter().map(Flashcard::from_word))
    }

    fn replace(&mut self, cards: impl Iterator<Item = Flashcard>) -> usize {
        self.cards.clear();
        self.index.clear();
        for card in cards {
            if self.index.contains_key(&card.id) {
                continue;
            }
            self.index.insert(card.id.clone(), self.cards.len());
            self.cards.push(card);
        }
        self.cards.len()
    }

    /// Rate one card. Unknown ids leave the deck untouched and return `None`.
    pub fn update_card_mastery(
        &mut self,
        card_id: &str,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> Option<ReviewOutcome> {
        let position = *self.index.get(card_id)?;
        Some(apply_rating(&mut self.cards[position], rating, now))
    }

    /// Forget all progress while keeping membership.
    pub fn reset_progress(&mut self) {
        for card in &mut self.cards {
            card.mastery = 0;
            card.last_reviewed = None;
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn get(&self, card_id: &str) -> Option<&Flashcard> {
        self.index.get(card_id).map(|&i| &self.cards[i])
    }

    pub fn book_id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Carry review progress over from a saved snapshot of this same deck.
    ///
    /// Applies only when the snapshot was taken from the same book and holds
    /// exactly this deck's ids in the same order. Returns whether it did.
    pub fn restore_progress(&mut self, snapshot: &DeckSnapshot) -> bool {
        let same_book = self.book_id.is_some() && snapshot.book_id == self.book_id;
        let same_cards = same_book
            && snapshot.cards.len() == self.cards.len()
            && snapshot
                .cards
                .iter()
                .zip(&self.cards)
                .all(|(saved, card)| saved.id == card.id);
        if !same_cards {
            return false;
        }
        for (card, saved) in self.cards.iter_mut().zip(&snapshot.cards) {
            card.mastery = saved.mastery.min(MAX_MASTERY);
            card.last_reviewed = saved.last_reviewed;
        }
        true
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            book_id: self.book_id.clone(),
            cards: self.cards.clone(),
        }
    }
}
