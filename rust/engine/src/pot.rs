use serde::{Deserialize, Serialize};

/// Chips committed by both players during the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    amount: u32,
}

/// How a tied pot is divided between the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Paid to each player
    pub share: u32,
    /// Left over after the even division (0 or 1)
    pub remainder: u32,
}

impl Pot {
    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn add(&mut self, chips: u32) {
        self.amount += chips;
    }

    /// Empties the pot, returning everything in it.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }

    /// Empties the pot into two equal shares.
    pub fn split(&mut self) -> Split {
        let total = self.take();
        Split {
            share: total / 2,
            remainder: total % 2,
        }
    }
}
