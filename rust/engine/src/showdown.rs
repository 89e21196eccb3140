use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::evaluator::find_best_hand;
use crate::hand::{compare_hands, Hand};

pub const HOLE_CARDS: usize = 2;
pub const BOARD_CARDS: usize = 5;

/// Result of comparing the two players' best hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerOne,
    PlayerTwo,
    Split,
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::PlayerOne,
            Ordering::Less => Outcome::PlayerTwo,
            Ordering::Equal => Outcome::Split,
        }
    }
}

/// A heads-up deal: two hole cards per player and a shared five-card board,
/// with each player's best five-card hand already resolved.
#[derive(Debug, Clone)]
pub struct Showdown {
    hole: [[Card; HOLE_CARDS]; 2],
    board: [Card; BOARD_CARDS],
    best: [Hand; 2],
}

impl Showdown {
    /// Deals player one, then player two, then the board, from the top of
    /// `deck`.
    pub fn deal(deck: &mut Deck) -> Result<Self, EngineError> {
        let p1 = deal_exact::<HOLE_CARDS>(deck)?;
        let p2 = deal_exact::<HOLE_CARDS>(deck)?;
        let board = deal_exact::<BOARD_CARDS>(deck)?;
        Self::from_cards([p1, p2], board)
    }

    pub fn from_cards(
        hole: [[Card; HOLE_CARDS]; 2],
        board: [Card; BOARD_CARDS],
    ) -> Result<Self, EngineError> {
        let best_for = |h: &[Card; HOLE_CARDS]| {
            let mut seven = h.to_vec();
            seven.extend_from_slice(&board);
            find_best_hand(&seven).ok_or(EngineError::WrongCardCount {
                min: 5,
                max: 7,
                actual: seven.len(),
            })
        };
        let best = [best_for(&hole[0])?, best_for(&hole[1])?];
        Ok(Self { hole, board, best })
    }

    pub fn hole_cards(&self, player: usize) -> &[Card; HOLE_CARDS] {
        &self.hole[player]
    }

    pub fn board(&self) -> &[Card; BOARD_CARDS] {
        &self.board
    }

    pub fn best_hands(&self) -> &[Hand; 2] {
        &self.best
    }

    pub fn outcome(&self) -> Outcome {
        compare_hands(&self.best[0], &self.best[1]).into()
    }
}

fn deal_exact<const N: usize>(deck: &mut Deck) -> Result<[Card; N], EngineError> {
    let cards = deck.deal(N)?;
    cards.try_into().map_err(|v: Vec<Card>| EngineError::WrongCardCount {
        min: N,
        max: N,
        actual: v.len(),
    })
}
