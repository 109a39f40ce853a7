//! Review session selection.
//!
//! A session is a paragraph-number range. Its due queue is recomputed from the
//! deck after every mutation; there is no cached queue to go stale.

use crate::deck::Deck;
use crate::document::Book;
use crate::types::{Flashcard, SessionScope};
use serde::Serialize;
use std::collections::HashSet;

/// Paragraphs offered by default when setting up a quiz.
const DEFAULT_SCOPE_PARAGRAPHS: u32 = 3;

/// Word ids of every paragraph in `scope`, across all chapters.
pub fn session_word_ids(book: &Book, scope: SessionScope) -> HashSet<String> {
    if scope.is_empty() {
        return HashSet::new();
    }
    book.paragraphs()
        .filter(|p| scope.contains(p.paragraph_number))
        .flat_map(|p| p.words.iter().map(|w| w.id.clone()))
        .collect()
}

/// Cards still to review, least known first.
///
/// Mastered cards are dropped. Ties on mastery go to the card reviewed longest
/// ago, and never-reviewed cards come first. The sort is stable, so equal keys
/// keep deck order.
pub fn due_queue<'a>(cards: &'a [Flashcard], word_ids: &HashSet<String>) -> Vec<&'a Flashcard> {
    let mut queue: Vec<&Flashcard> = cards
        .iter()
        .filter(|c| word_ids.contains(&c.id) && !c.is_mastered())
        .collect();
    queue.sort_by_key(|c| c.review_key());
    queue
}

/// Initial quiz range: the first three paragraphs, or fewer if the book is short.
pub fn default_scope(book: &Book) -> SessionScope {
    let count = u32::try_from(book.paragraph_count()).unwrap_or(u32::MAX);
    SessionScope::new(1, count.clamp(1, DEFAULT_SCOPE_PARAGRAPHS))
}

/// Number of words in the scope's paragraphs, counting repeats.
pub fn scope_word_count(book: &Book, scope: SessionScope) -> usize {
    book.paragraphs()
        .filter(|p| scope.contains(p.paragraph_number))
        .map(|p| p.words.len())
        .sum()
}

/// Mastered versus total cards for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionProgress {
    pub mastered_count: usize,
    pub total_count: usize,
}

impl SessionProgress {
    /// Fraction in `0.0..=1.0`; an empty session reports 0.
    pub fn fraction(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.mastered_count as f64 / self.total_count as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// What the review screen should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "card", rename_all = "snake_case")]
pub enum SessionStatus {
    /// The deck has not been built yet.
    Loading,
    Reviewing(Flashcard),
    Complete,
}

/// A review session bound to one book and scope.
#[derive(Debug, Clone)]
pub struct Session {
    scope: SessionScope,
    word_ids: HashSet<String>,
}

impl Session {
    pub fn new(book: &Book, scope: SessionScope) -> Self {
        Self {
            scope,
            word_ids: session_word_ids(book, scope),
        }
    }

    pub fn scope(&self) -> SessionScope {
        self.scope
    }

    pub fn word_ids(&self) -> &HashSet<String> {
        &self.word_ids
    }

    pub fn due_queue<'a>(&self, deck: &'a Deck) -> Vec<&'a Flashcard> {
        due_queue(deck.cards(), &self.word_ids)
    }

    /// Top of the due queue.
    pub fn current_card<'a>(&self, deck: &'a Deck) -> Option<&'a Flashcard> {
        self.due_queue(deck).into_iter().next()
    }

    pub fn is_complete(&self, deck: &Deck) -> bool {
        self.current_card(deck).is_none()
    }

    pub fn progress(&self, deck: &Deck) -> SessionProgress {
        let mastered_count = deck
            .cards()
            .iter()
            .filter(|c| self.word_ids.contains(&c.id) && c.is_mastered())
            .count();
        SessionProgress {
            mastered_count,
            total_count: self.word_ids.len(),
        }
    }

    pub fn status(&self, deck: &Deck) -> SessionStatus {
        if deck.is_empty() {
            return SessionStatus::Loading;
        }
        match self.current_card(deck) {
            Some(card) => SessionStatus::Reviewing(card.clone()),
            None => SessionStatus::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Chapter, Paragraph, Word};
    use crate::types::{Rating, MAX_MASTERY};
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn paragraph(number: u32, ids: &[&str]) -> Paragraph {
        Paragraph {
            id: format!("p{number}"),
            paragraph_number: number,
            words: ids.iter().map(|id| Word::new(*id, *id, *id)).collect(),
            translation_l1: String::new(),
        }
    }

    fn book(chapters: Vec<Vec<Paragraph>>) -> Book {
        Book {
            id: "book".into(),
            title: "Book".into(),
            author: "Author".into(),
            language_code: "ar".into(),
            chapters: chapters
                .into_iter()
                .enumerate()
                .map(|(i, paragraphs)| Chapter {
                    number: i as u32 + 1,
                    title: format!("Chapter {}", i + 1),
                    paragraphs,
                })
                .collect(),
        }
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn card(id: &str, mastery: u8, last_reviewed: Option<i64>) -> Flashcard {
        Flashcard {
            id: id.into(),
            l2: id.into(),
            l1: id.into(),
            pronunciation: None,
            mastery,
            last_reviewed: last_reviewed.map(at),
        }
    }

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn queue_ids(queue: &[&Flashcard]) -> Vec<String> {
        queue.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn word_ids_union_across_chapters() {
        let book = book(vec![
            vec![paragraph(1, &["a"]), paragraph(2, &["b"])],
            vec![paragraph(1, &["c"]), paragraph(3, &["d"])],
        ]);
        let ids = session_word_ids(&book, SessionScope::new(1, 2));
        assert_eq!(ids, set(&["a", "b", "c"]));
    }

    #[test]
    fn reversed_scope_selects_nothing() {
        let book = book(vec![vec![paragraph(1, &["a"]), paragraph(2, &["b"])]]);
        assert!(session_word_ids(&book, SessionScope::new(2, 1)).is_empty());
        assert_eq!(scope_word_count(&book, SessionScope::new(2, 1)), 0);
    }

    #[test]
    fn queue_orders_by_mastery_then_oldest_review() {
        let cards = vec![
            card("A", 2, Some(100)),
            card("B", 0, None),
            card("C", 0, Some(50)),
        ];
        let queue = due_queue(&cards, &set(&["A", "B", "C"]));
        assert_eq!(queue_ids(&queue), vec!["B", "C", "A"]);
    }

    #[test]
    fn queue_excludes_mastered_and_out_of_scope_cards() {
        let cards = vec![
            card("in", 1, None),
            card("done", MAX_MASTERY, None),
            card("out", 0, None),
        ];
        let queue = due_queue(&cards, &set(&["in", "done"]));
        assert_eq!(queue_ids(&queue), vec!["in"]);
    }

    #[test]
    fn queue_sort_is_stable_on_equal_keys() {
        let cards = vec![
            card("z", 1, Some(10)),
            card("y", 1, Some(10)),
            card("x", 1, Some(10)),
        ];
        let queue = due_queue(&cards, &set(&["x", "y", "z"]));
        assert_eq!(queue_ids(&queue), vec!["z", "y", "x"]);
    }

    #[test]
    fn all_mastered_scope_is_complete_at_full_progress() {
        let book = book(vec![vec![paragraph(1, &["a", "b"])]]);
        let mut deck = Deck::from_words(book.words());
        for id in ["a", "b"] {
            for _ in 0..3 {
                deck.update_card_mastery(id, Rating::Easy, at(1));
            }
        }

        let session = Session::new(&book, SessionScope::new(1, 1));

        assert!(session.due_queue(&deck).is_empty());
        assert!(session.is_complete(&deck));
        assert_eq!(session.status(&deck), SessionStatus::Complete);
        let progress = session.progress(&deck);
        assert_eq!(progress.mastered_count, 2);
        assert_eq!(progress.total_count, 2);
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn rating_recomputes_current_card() {
        let book = book(vec![vec![paragraph(1, &["a", "b"])]]);
        let mut deck = Deck::from_words(book.words());
        let session = Session::new(&book, SessionScope::new(1, 1));

        assert_eq!(session.current_card(&deck).unwrap().id, "a");
        deck.update_card_mastery("a", Rating::Good, at(10));
        assert_eq!(session.current_card(&deck).unwrap().id, "b");
        deck.update_card_mastery("b", Rating::Good, at(20));
        // Both at mastery 1; "a" was reviewed earlier.
        assert_eq!(session.current_card(&deck).unwrap().id, "a");
    }

    #[test]
    fn empty_deck_reports_loading() {
        let book = book(vec![vec![paragraph(1, &["a"])]]);
        let session = Session::new(&book, SessionScope::new(1, 1));
        assert_eq!(session.status(&Deck::new()), SessionStatus::Loading);
    }

    #[test]
    fn empty_session_progress_is_zero() {
        let progress = SessionProgress {
            mastered_count: 0,
            total_count: 0,
        };
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn default_scope_covers_at_most_three_paragraphs() {
        let long = book(vec![
            vec![paragraph(1, &["a"]), paragraph(2, &["b"])],
            vec![paragraph(3, &["c"]), paragraph(4, &["d"])],
        ]);
        assert_eq!(default_scope(&long), SessionScope::new(1, 3));

        let short = book(vec![vec![paragraph(1, &["a"])]]);
        assert_eq!(default_scope(&short), SessionScope::new(1, 1));

        let empty = book(vec![]);
        assert_eq!(default_scope(&empty), SessionScope::new(1, 1));
    }

    #[test]
    fn scope_word_count_counts_repeats() {
        let book = book(vec![vec![paragraph(1, &["a", "b"]), paragraph(2, &["c"])]]);
        assert_eq!(scope_word_count(&book, SessionScope::new(1, 2)), 3);
        assert_eq!(scope_word_count(&book, SessionScope::new(2, 9)), 1);
    }
}
