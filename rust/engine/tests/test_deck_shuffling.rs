use std::collections::HashSet;

use limitduel_engine::cards::Card;
use limitduel_engine::deck::{CardSource, Deck};

#[test]
fn deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle_and_reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.try_deal().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.try_deal().is_none(),
        "after 52 cards, deck should be empty"
    );
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle_and_reset();
    d2.shuffle_and_reset();
    // Compare first 10 cards
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle_and_reset();
    d2.shuffle_and_reset();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn dealing_shrinks_and_reset_replenishes() {
    let mut deck = Deck::new_unseeded();
    deck.shuffle_and_reset();
    let dealt: HashSet<Card> = (0..9).map(|_| deck.deal_card()).collect();
    assert_eq!(dealt.len(), 9);
    assert_eq!(deck.remaining(), 43);
    deck.shuffle_and_reset();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn exhausted_deck_rebuilds_before_dealing() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle_and_reset();
    for _ in 0..52 {
        deck.deal_card();
    }
    assert_eq!(deck.remaining(), 0);
    let _ = deck.deal_card();
    assert_eq!(deck.remaining(), 51);
}
