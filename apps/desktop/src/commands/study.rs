//! Study session commands.

use crate::db::FlashcardRepository;
use crate::state::{AppState, ReaderState};
use chrono::Utc;
use reader_core::matching::{check_answer, MatchResult, MatchingMode, DEFAULT_FUZZY_THRESHOLD};
use reader_core::{Flashcard, Rating, ReviewOutcome, Session, SessionScope, SessionStatus};
use tracing::{debug, info};

use super::CommandError;

/// Everything the review screen renders for one scope.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SessionView {
    pub scope: SessionScope,
    #[serde(flatten)]
    pub status: SessionStatus,
    pub due_count: usize,
    pub mastered_count: usize,
    pub total_count: usize,
    /// Fraction in `0.0..=1.0`.
    pub progress: f64,
}

impl SessionView {
    pub fn current_card(&self) -> Option<&Flashcard> {
        match &self.status {
            SessionStatus::Reviewing(card) => Some(card),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ReviewRequest {
    pub card_id: String,
    pub rating: String,
    pub scope: SessionScope,
}

#[derive(Debug, serde::Serialize)]
pub struct ReviewResponse {
    /// `None` when the card id is not in the deck.
    pub outcome: Option<ReviewOutcome>,
    pub session: SessionView,
}

fn session_view(reader: &ReaderState, scope: SessionScope) -> SessionView {
    let session = Session::new(&reader.book, scope);
    let progress = session.progress(&reader.deck);
    SessionView {
        scope: session.scope(),
        status: session.status(&reader.deck),
        due_count: session.due_queue(&reader.deck).len(),
        mastered_count: progress.mastered_count,
        total_count: progress.total_count,
        progress: progress.fraction(),
    }
}

/// Current card and progress for a scope.
pub fn get_session(scope: SessionScope, state: &AppState) -> Result<SessionView, CommandError> {
    let reader = state.reader.lock().expect("reader lock");
    Ok(session_view(&reader, scope))
}

/// Apply a rating, save the deck, then compute the next view.
pub fn submit_review(
    request: ReviewRequest,
    state: &AppState,
) -> Result<ReviewResponse, CommandError> {
    let rating: Rating = request.rating.parse()?;
    let mut reader = state.reader.lock().expect("reader lock");

    let mut deck = reader.deck.clone();
    let outcome = deck.update_card_mastery(&request.card_id, rating, Utc::now());

    match &outcome {
        Some(outcome) => {
            {
                let repo = state.repository.lock().expect("repository lock");
                repo.save_flashcards(&deck.snapshot())?;
            }
            reader.deck = deck;
            info!(
                card = %outcome.card_id,
                rating = %outcome.rating,
                from = outcome.mastery_before,
                to = outcome.mastery_after,
                "applied review"
            );
        }
        None => debug!(card = %request.card_id, "ignoring review for unknown card"),
    }

    Ok(ReviewResponse {
        outcome,
        session: session_view(&reader, request.scope),
    })
}

/// Compare a typed gloss with the card's answer. `None` for unknown cards.
pub fn check_typed_answer(
    card_id: String,
    typed_answer: String,
    mode: Option<MatchingMode>,
    state: &AppState,
) -> Result<Option<MatchResult>, CommandError> {
    let reader = state.reader.lock().expect("reader lock");
    Ok(reader.deck.get(&card_id).map(|card| {
        check_answer(
            &typed_answer,
            card,
            mode.unwrap_or_default(),
            DEFAULT_FUZZY_THRESHOLD,
        )
    }))
}

/// Forget all review progress for the active book.
pub fn reset_progress(state: &AppState) -> Result<(), CommandError> {
    let mut reader = state.reader.lock().expect("reader lock");

    let mut deck = reader.deck.clone();
    deck.reset_progress();
    {
        let repo = state.repository.lock().expect("repository lock");
        repo.save_flashcards(&deck.snapshot())?;
    }
    reader.deck = deck;

    info!(cards = reader.deck.len(), "reset review progress");
    Ok(())
}

/// Every card of the active deck in document order.
pub fn get_cards(state: &AppState) -> Result<Vec<Flashcard>, CommandError> {
    let reader = state.reader.lock().expect("reader lock");
    Ok(reader.deck.cards().to_vec())
}
