use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories, weakest first. Discriminant order is strength order and
/// the comparator relies on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    /// All categories, weakest to strongest.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified 5-card hand.
///
/// Only the evaluator builds these. `tiebreakers` holds the ranks needed to
/// order hands within one category, most significant first; see
/// [`crate::evaluator`] for the per-category layout.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; 5],
    category: HandCategory,
    tiebreakers: Vec<Rank>,
}

impl Hand {
    pub(crate) fn new(cards: [Card; 5], category: HandCategory, tiebreakers: Vec<Rank>) -> Self {
        Self {
            cards,
            category,
            tiebreakers,
        }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn tiebreakers(&self) -> &[Rank] {
        &self.tiebreakers
    }

    /// True when `self` strictly outranks `other`.
    pub fn beats(&self, other: &Hand) -> bool {
        compare_hands(self, other).is_gt()
    }
}

/// Orders two hands by category, then tiebreakers element by element.
///
/// Only the common prefix of the tiebreaker lists is compared, so two Royal
/// Flushes (empty lists) are equal. Which physical cards make up the hand
/// never matters.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => compare_tiebreakers(&a.tiebreakers, &b.tiebreakers),
        ord => ord,
    }
}

fn compare_tiebreakers(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}
