#![allow(dead_code)]

use limitduel_engine::cards::{parse_cards, Card};
use limitduel_engine::config::TableConfig;
use limitduel_engine::deck::CardSource;
use limitduel_engine::engine::Engine;
use limitduel_engine::game::TableSnapshot;
use limitduel_engine::player::{PlayerAction, PlayerId};

/// Deals the same fixed sequence every round:
/// player 0's two cards, player 1's two cards, flop, turn, river.
#[derive(Debug)]
pub struct RiggedDeck {
    cards: Vec<Card>,
    pos: usize,
}

impl RiggedDeck {
    pub fn new(order: &str) -> Self {
        Self {
            cards: parse_cards(order).unwrap(),
            pos: 0,
        }
    }
}

impl CardSource for RiggedDeck {
    fn shuffle_and_reset(&mut self) {
        self.pos = 0;
    }

    fn deal_card(&mut self) -> Card {
        let c = self.cards[self.pos];
        self.pos += 1;
        c
    }
}

pub fn rigged(order: &str) -> Engine<RiggedDeck> {
    Engine::with_card_source(TableConfig::default(), RiggedDeck::new(order))
}

pub fn seeded(seed: u64) -> Engine {
    Engine::new(TableConfig::with_seed(seed))
}

/// Small blind completes, then every street is checked through to showdown.
pub fn check_down<D: CardSource>(engine: &mut Engine<D>) -> TableSnapshot {
    let call = PlayerAction::CheckOrCall;
    engine.apply_action(PlayerId::Player0, call).unwrap();
    let mut snap = engine.apply_action(PlayerId::Player1, call).unwrap();
    // Post-flop a check by player 0 closes the street.
    for _ in 0..3 {
        snap = engine.apply_action(PlayerId::Player0, call).unwrap();
    }
    snap
}
