//! Five-card classification and best-of-N search.
//!
//! Tiebreaker layout per category, most significant first:
//!
//! | Category | Tiebreakers |
//! |---|---|
//! | Royal Flush | none |
//! | Straight Flush, Straight | high card of the run (the wheel A-2-3-4-5 is 5) |
//! | Four of a Kind | quad rank, kicker |
//! | Full House | trips rank, pair rank |
//! | Flush, High Card | all five ranks, descending |
//! | Three of a Kind | trips rank, two kickers descending |
//! | Two Pair | high pair, low pair, kicker |
//! | One Pair | pair rank, three kickers descending |

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::cards::{Card, Rank};
use crate::combinations::Combinations;
use crate::errors::EngineError;
use crate::hand::{compare_hands, Hand, HandCategory};

pub const HAND_SIZE: usize = 5;

const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
const BROADWAY: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

/// Occurrence count per rank, indexed by `rank.value() - 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RankCounts([u8; 13]);

impl RankCounts {
    fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 13];
        for c in cards {
            counts[(c.rank.value() - 2) as usize] += 1;
        }
        Self(counts)
    }

    /// Ranks that occur exactly `n` times, highest first.
    fn ranks_with(&self, n: u8) -> Vec<Rank> {
        (0..13u8)
            .rev()
            .filter(|&i| self.0[i as usize] == n)
            .filter_map(|i| Rank::from_value(i + 2))
            .collect()
    }

    fn max_count(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Everything the category checks need to know about five cards.
#[derive(Debug, Clone)]
struct HandProfile {
    counts: RankCounts,
    ranks_desc: [Rank; 5],
    flush: bool,
    straight_high: Option<Rank>,
}

impl HandProfile {
    fn new(cards: &[Card; 5]) -> Self {
        let counts = RankCounts::from_cards(cards);
        debug_assert!(
            counts.max_count() <= 4,
            "five distinct cards cannot share a rank five times"
        );
        debug_assert!(
            counts.ranks_with(3).len() + counts.ranks_with(4).len() <= 1,
            "at most one rank can hold three or more of five cards"
        );

        let mut ranks_desc = cards.map(|c| c.rank);
        ranks_desc.sort_unstable_by(|a, b| b.cmp(a));
        let flush = cards.iter().all(|c| c.suit == cards[0].suit);

        Self {
            counts,
            ranks_desc,
            flush,
            straight_high: straight_high(&ranks_desc),
        }
    }

    fn singles(&self) -> Vec<Rank> {
        self.counts.ranks_with(1)
    }
}

/// High card of a five-rank straight, given ranks sorted descending.
/// The wheel reports Five; any repeated rank rules a straight out.
fn straight_high(ranks_desc: &[Rank; 5]) -> Option<Rank> {
    if *ranks_desc == WHEEL {
        return Some(Rank::Five);
    }
    ranks_desc
        .windows(2)
        .all(|w| w[0].value() == w[1].value() + 1)
        .then_some(ranks_desc[0])
}

type Detector = fn(&HandProfile) -> Option<Vec<Rank>>;

/// Category checks, strongest first. The first match wins, so a weaker
/// entry never sees a hand a stronger one already claimed.
const CATEGORY_CHECKS: [(HandCategory, Detector); 10] = [
    (HandCategory::RoyalFlush, royal_flush),
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::OnePair, one_pair),
    (HandCategory::HighCard, high_card),
];

fn royal_flush(p: &HandProfile) -> Option<Vec<Rank>> {
    (p.flush && p.ranks_desc == BROADWAY).then(Vec::new)
}

fn straight_flush(p: &HandProfile) -> Option<Vec<Rank>> {
    if !p.flush {
        return None;
    }
    p.straight_high.map(|high| vec![high])
}

fn four_of_a_kind(p: &HandProfile) -> Option<Vec<Rank>> {
    let quads = p.counts.ranks_with(4);
    let kickers = p.singles();
    match (quads.as_slice(), kickers.as_slice()) {
        ([quad], [kicker]) => Some(vec![*quad, *kicker]),
        _ => None,
    }
}

fn full_house(p: &HandProfile) -> Option<Vec<Rank>> {
    let trips = p.counts.ranks_with(3);
    let pairs = p.counts.ranks_with(2);
    match (trips.as_slice(), pairs.as_slice()) {
        ([trip], [pair]) => Some(vec![*trip, *pair]),
        _ => None,
    }
}

fn flush(p: &HandProfile) -> Option<Vec<Rank>> {
    (p.flush && p.straight_high.is_none()).then(|| p.ranks_desc.to_vec())
}

fn straight(p: &HandProfile) -> Option<Vec<Rank>> {
    if p.flush {
        return None;
    }
    p.straight_high.map(|high| vec![high])
}

fn three_of_a_kind(p: &HandProfile) -> Option<Vec<Rank>> {
    let trips = p.counts.ranks_with(3);
    let kickers = p.singles();
    match (trips.as_slice(), kickers.as_slice()) {
        ([trip], [k1, k2]) => Some(vec![*trip, *k1, *k2]),
        _ => None,
    }
}

fn two_pair(p: &HandProfile) -> Option<Vec<Rank>> {
    if p.counts.max_count() >= 3 {
        return None;
    }
    let pairs = p.counts.ranks_with(2);
    let kickers = p.singles();
    match (pairs.as_slice(), kickers.as_slice()) {
        ([high, low], [kicker]) => Some(vec![*high, *low, *kicker]),
        _ => None,
    }
}

fn one_pair(p: &HandProfile) -> Option<Vec<Rank>> {
    if p.counts.max_count() >= 3 {
        return None;
    }
    let pairs = p.counts.ranks_with(2);
    let kickers = p.singles();
    match (pairs.as_slice(), kickers.as_slice()) {
        ([pair], [k1, k2, k3]) => Some(vec![*pair, *k1, *k2, *k3]),
        _ => None,
    }
}

fn high_card(p: &HandProfile) -> Option<Vec<Rank>> {
    Some(p.ranks_desc.to_vec())
}

/// Classifies exactly five cards. Returns `None` for any other count.
pub fn evaluate_hand(cards: &[Card]) -> Option<Hand> {
    let five: [Card; HAND_SIZE] = cards.try_into().ok()?;
    Some(classify(five))
}

fn classify(cards: [Card; HAND_SIZE]) -> Hand {
    let profile = HandProfile::new(&cards);
    for (category, detect) in CATEGORY_CHECKS {
        if let Some(tiebreakers) = detect(&profile) {
            return Hand::new(cards, category, tiebreakers);
        }
    }
    // high_card always matches; kept for exhaustiveness
    Hand::new(cards, HandCategory::HighCard, profile.ranks_desc.to_vec())
}

/// Finds the strongest five-card hand among `cards`.
///
/// Five cards are classified directly. Larger inputs are expanded into every
/// five-card subset; the first subset seeds the result and a later one only
/// replaces it when strictly stronger, so exact ties keep the earliest subset
/// in enumeration order. Returns `None` for fewer than five cards.
pub fn find_best_hand(cards: &[Card]) -> Option<Hand> {
    if cards.len() < HAND_SIZE {
        debug!(count = cards.len(), "too few cards for a best hand");
        return None;
    }
    if cards.len() == HAND_SIZE {
        return evaluate_hand(cards);
    }

    let mut best: Option<Hand> = None;
    let mut evaluated = 0usize;
    for selection in Combinations::new(cards.len(), HAND_SIZE) {
        let mut five = [cards[selection[0]]; HAND_SIZE];
        for (slot, &i) in five.iter_mut().zip(&selection) {
            *slot = cards[i];
        }
        let hand = classify(five);
        evaluated += 1;
        trace!(?selection, category = %hand.category(), "evaluated subset");
        if best.as_ref().map_or(true, |b| compare_hands(&hand, b).is_gt()) {
            best = Some(hand);
        }
    }

    if let Some(hand) = &best {
        debug!(
            cards = cards.len(),
            subsets = evaluated,
            category = %hand.category(),
            "best hand found"
        );
    }
    best
}

/// Checks a card group before it reaches the evaluator: its size must lie
/// in `min..=max` and no card may appear twice.
pub fn validate_cards(cards: &[Card], min: usize, max: usize) -> Result<(), EngineError> {
    if cards.len() < min || cards.len() > max {
        return Err(EngineError::WrongCardCount {
            min,
            max,
            actual: cards.len(),
        });
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(EngineError::DuplicateCard(c));
        }
    }
    Ok(())
}
