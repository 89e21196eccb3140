//! Card and hand formatters for terminal display.
//!
//! This module provides pure functions for formatting cards, boards and
//! classified hands for terminal output. Ranks always use the one-character
//! notation (2-9, T, J, Q, K, A); suits follow the configured [`CardStyle`].
//!
//! - **ASCII style**: `h d c s` letters, identical to the parser's notation
//! - **Unicode style**: `♥ ♦ ♣ ♠` symbols
//!
//! ## Example
//!
//! ```rust
//! use handrank_engine::cards::{Card, Rank, Suit};
//! use handrank_cli::formatters::{format_card, format_board, CardStyle};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert_eq!(format_card(&ace_spades, CardStyle::Ascii), "As");
//! assert_eq!(format_card(&ace_spades, CardStyle::Unicode), "A♠");
//! assert_eq!(format_board(&[ace_spades], CardStyle::Ascii), "[As]");
//! ```

use handrank_engine::cards::{Card, Rank, Suit};
use handrank_engine::hand::Hand;
use serde::{Deserialize, Serialize};

/// How suits are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Ascii,
    Unicode,
}

impl CardStyle {
    pub fn parse(s: &str) -> Option<CardStyle> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Some(CardStyle::Ascii),
            "unicode" => Some(CardStyle::Unicode),
            _ => None,
        }
    }
}

pub fn format_suit(suit: &Suit, style: CardStyle) -> String {
    match style {
        CardStyle::Unicode => match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string(),
        CardStyle::Ascii => suit.symbol().to_string(),
    }
}

pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

/// Format a Card as a string combining rank and suit, e.g. "As" or "A♠".
pub fn format_card(card: &Card, style: CardStyle) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit, style))
}

/// Space-separated cards without brackets, e.g. "Ah Kd".
pub fn format_cards(cards: &[Card], style: CardStyle) -> String {
    cards
        .iter()
        .map(|c| format_card(c, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a board (list of cards) as a string in bracket notation.
///
/// Returns "[]" for an empty board.
pub fn format_board(cards: &[Card], style: CardStyle) -> String {
    format!("[{}]", format_cards(cards, style))
}

/// Tiebreaker ranks separated by spaces; "-" when there are none.
pub fn format_tiebreakers(ranks: &[Rank]) -> String {
    if ranks.is_empty() {
        return "-".to_string();
    }
    ranks.iter().map(format_rank).collect::<Vec<_>>().join(" ")
}

/// One-line summary of a classified hand, e.g. "Full House [Kh Kd Kc 7s 7h]".
pub fn format_hand(hand: &Hand, style: CardStyle) -> String {
    format!(
        "{} {}",
        hand.category(),
        format_board(hand.cards(), style)
    )
}
