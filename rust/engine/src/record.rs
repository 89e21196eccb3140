use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::showdown::{Outcome, Showdown};

/// Flat, text-only view of a classified hand.
/// Cards use the two-letter notation and tiebreakers the rank symbols.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandSummary {
    /// Human-readable category name (e.g. "Full House")
    pub category: String,
    /// The five cards that make up the hand
    pub cards: Vec<String>,
    /// Tiebreaker ranks, most significant first
    pub tiebreakers: Vec<String>,
}

impl From<&Hand> for HandSummary {
    fn from(hand: &Hand) -> Self {
        Self {
            category: hand.category().to_string(),
            cards: hand.cards().iter().map(ToString::to_string).collect(),
            tiebreakers: hand.tiebreakers().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Complete record of a heads-up showdown, serialized as one JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownRecord {
    /// RNG seed the deck was shuffled with, when known
    #[serde(default)]
    pub seed: Option<u64>,
    /// Hole cards per player
    pub hole: [Vec<String>; 2],
    /// The five community cards
    pub board: Vec<String>,
    /// Best five-card hand per player
    pub hands: [HandSummary; 2],
    pub outcome: Outcome,
}

impl ShowdownRecord {
    pub fn new(showdown: &Showdown, seed: Option<u64>) -> Self {
        let cards_of = |cards: &[crate::cards::Card]| -> Vec<String> {
            cards.iter().map(ToString::to_string).collect()
        };
        let [h1, h2] = showdown.best_hands();
        Self {
            seed,
            hole: [
                cards_of(showdown.hole_cards(0)),
                cards_of(showdown.hole_cards(1)),
            ],
            board: cards_of(showdown.board()),
            hands: [h1.into(), h2.into()],
            outcome: showdown.outcome(),
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
