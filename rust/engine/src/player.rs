use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// One of the two seats at a heads-up table.
/// `Player0` posts the small blind and acts first on every street.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PlayerId {
    /// Small blind
    Player0,
    /// Big blind
    Player1,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::Player0, PlayerId::Player1];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::Player0 => PlayerId::Player1,
            PlayerId::Player1 => PlayerId::Player0,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index())
    }
}

/// What a player can ask to do on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Check when nothing is owed, otherwise call the current bet
    CheckOrCall,
    /// Raise this street's bet to the given total (clamped to the street cap)
    Bet(u32),
    /// Give up the pot
    Fold,
}

/// Represents a seated player with their chip stack, street bet, and hole cards.
/// Manages chip operations (betting, adding chips) and card management.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    /// Current chip stack
    stack: u32,
    /// Chips put in on the current street
    street_bet: u32,
    /// Hole cards (up to 2 cards)
    hole: [Option<Card>; 2],
    connected: bool,
}

impl Player {
    pub fn new(id: PlayerId, stack: u32) -> Self {
        Self {
            id,
            stack,
            street_bet: 0,
            hole: [None, None],
            connected: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    pub fn is_connected(&self) -> bool {
        self.connected
    }
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards, once dealt.
    pub fn hand(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn give_hand(&mut self, cards: [Card; 2]) {
        self.hole = [Some(cards[0]), Some(cards[1])];
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub fn reset_street_bet(&mut self) {
        self.street_bet = 0;
    }

    /// Moves `amount` from the stack into this street's bet.
    pub fn bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                needed: amount,
                stack: self.stack,
            });
        }
        self.stack -= amount;
        self.street_bet += amount;
        Ok(())
    }
}
