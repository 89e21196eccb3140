use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("invalid card string: {0:?} (too short)")]
    TooShort(String),
    #[error("invalid card string: {0:?} (invalid length)")]
    InvalidLength(String),
    #[error("invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("invalid suit: {0:?}")]
    InvalidSuit(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("cannot deal {requested} cards, only {remaining} available")]
    NotEnoughCards { requested: usize, remaining: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] CardParseError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Expected {min} to {max} cards, got {actual}")]
    WrongCardCount { min: usize, max: usize, actual: usize },
}
