use std::collections::HashSet;

use handrank_engine::cards::Card;
use handrank_engine::deck::Deck;
use handrank_engine::errors::DeckError;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.deal(10).unwrap(), d2.deal(10).unwrap());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.deal(10).unwrap(),
        d2.deal(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn injected_rng_matches_seeded_constructor() {
    let mut d1 = Deck::from_rng(ChaCha20Rng::seed_from_u64(9));
    let mut d2 = Deck::new_with_seed(9);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.deal(52).unwrap(), d2.deal(52).unwrap());
}

#[test]
fn shuffle_keeps_all_cards() {
    let mut deck = Deck::new_with_seed(77);
    deck.shuffle();
    let cards: Vec<Card> = deck.deal(52).unwrap();
    let set: HashSet<Card> = cards.into_iter().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn deal_removes_from_the_top() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let hole = deck.deal(2).unwrap();
    let board = deck.deal(5).unwrap();
    assert_eq!(deck.remaining(), 45);
    assert!(hole.iter().all(|c| !board.contains(c)));
}

#[test]
fn dealing_too_many_fails() {
    let mut deck = Deck::new_with_seed(5);
    deck.burn_card();
    assert_eq!(
        deck.deal(52),
        Err(DeckError::NotEnoughCards {
            requested: 52,
            remaining: 51
        })
    );
    assert_eq!(deck.remaining(), 51);
}
