//! # handrank-engine: Poker Hand Ranking Core
//!
//! Classifies five-card poker hands into one of ten categories with an
//! ordered tiebreaker list, finds the strongest five-card hand among 5, 6 or
//! 7 cards, and orders two classified hands to decide a winner.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), notation and parsing
//! - [`deck`] - Deterministic deck shuffling with an owned ChaCha20 RNG
//! - [`combinations`] - k-subset enumeration over an ordered sequence
//! - [`hand`] - Hand categories, classified hands and the hand comparator
//! - [`evaluator`] - Five-card classification and best-hand search
//! - [`showdown`] - Heads-up deal and winner determination
//! - [`record`] - Serializable hand and showdown summaries
//! - [`errors`] - Error types for parsing, dealing and input validation
//!
//! ## Quick Start
//!
//! ```rust
//! use handrank_engine::cards::parse_cards;
//! use handrank_engine::evaluator::find_best_hand;
//! use handrank_engine::hand::HandCategory;
//!
//! // Evaluate a 7-card poker hand
//! let cards = parse_cards("Ah Ad Ac As Kh Qd Jc").unwrap();
//! let best = find_best_hand(&cards).unwrap();
//! assert_eq!(best.category(), HandCategory::FourOfAKind);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use handrank_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal(7).unwrap(), deck2.deal(7).unwrap());
//! ```

pub mod cards;
pub mod combinations;
pub mod deck;
pub mod errors;
pub mod evaluator;
pub mod hand;
pub mod record;
pub mod showdown;
