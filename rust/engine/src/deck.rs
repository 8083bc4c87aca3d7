use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Where the engine gets its cards from.
///
/// [`Deck`] is the only production implementation; the trait exists so a
/// table can be driven from a fixed card order.
pub trait CardSource {
    /// Rebuild all 52 cards and shuffle them.
    fn shuffle_and_reset(&mut self);
    /// Deal the next card without replacement.
    fn deal_card(&mut self) -> Card;
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn new_unseeded() -> Self {
        Self::with_rng(ChaCha20Rng::from_rng(&mut rand::rng()))
    }

    fn with_rng(rng: ChaCha20Rng) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Deals the next card, or `None` once all 52 are out.
    pub fn try_deal(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl CardSource for Deck {
    fn shuffle_and_reset(&mut self) {
        self.shuffle();
    }

    fn deal_card(&mut self) -> Card {
        if let Some(c) = self.try_deal() {
            return c;
        }
        tracing::warn!("deck exhausted; rebuilding and reshuffling 52 cards");
        self.shuffle();
        match self.try_deal() {
            Some(c) => c,
            None => unreachable!("a freshly shuffled deck holds 52 cards"),
        }
    }
}
