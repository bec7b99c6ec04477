//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Every card has already been drawn.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when building a stacked deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card was supplied more than once.
    #[error("{0} appears more than once in the deck")]
    DuplicateCard(Card),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::Empty => Self::EmptyDeck,
        }
    }
}
