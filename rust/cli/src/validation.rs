//! Input parsing and validation for card arguments.
//!
//! Everything typed on the command line is checked here before it reaches
//! the engine: card notation, card counts and duplicates.

use std::collections::HashSet;

use handrank_engine::cards::{parse_cards, Card};
use handrank_engine::errors::EngineError;
use handrank_engine::evaluator::validate_cards;

use crate::error::CliError;

/// Smallest card group the best-hand search accepts.
pub const MIN_CARDS: usize = 5;
/// Largest card group accepted on the command line.
pub const MAX_CARDS: usize = 7;

/// Parses a 5 to 7 card group with no repeated card.
///
/// Tokens may be separated by whitespace or commas, so both
/// `handrank eval Ah Kh Qh Jh Th` and `handrank eval "Ah,Kh,Qh,Jh,Th"` work.
///
/// # Example
///
/// ```rust
/// # use handrank_cli::validation::parse_hand_input;
/// assert_eq!(parse_hand_input("Ah Kh Qh Jh Th 2c").unwrap().len(), 6);
/// assert!(parse_hand_input("Ah Kh Qh Jh").is_err());
/// assert!(parse_hand_input("Ah Kh Qh Jh Ah").is_err());
/// ```
pub fn parse_hand_input(text: &str) -> Result<Vec<Card>, CliError> {
    let cards = parse_cards(text)?;
    validate_cards(&cards, MIN_CARDS, MAX_CARDS)?;
    Ok(cards)
}

/// Fails when any card appears in both groups.
pub fn ensure_disjoint(first: &[Card], second: &[Card]) -> Result<(), CliError> {
    let seen: HashSet<&Card> = first.iter().collect();
    match second.iter().find(|c| seen.contains(c)) {
        Some(&card) => Err(EngineError::DuplicateCard(card).into()),
        None => Ok(()),
    }
}
