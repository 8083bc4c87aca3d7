use thiserror::Error;

use crate::cards::Card;
use crate::game::Phase;
use crate::player::PlayerId;

/// Everything the engine can refuse to do.
///
/// The first group are illegal actions: the request is rejected and the
/// table is left exactly as it was. The second group are precondition
/// violations raised by an adapter feeding the engine bad input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Action not allowed during {actual:?}")]
    WrongPhase { actual: Phase },
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("Insufficient chips: need {needed}, stack {stack}")]
    InsufficientChips { needed: u32, stack: u32 },
    #[error("Bet to {amount} does not raise the current bet of {current}")]
    NotARaise { amount: u32, current: u32 },

    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Two connected players are required to start a round")]
    NotEnoughPlayers,
    #[error("{player} cannot post blind {blind} from stack {stack}")]
    CannotPostBlind {
        player: PlayerId,
        blind: u32,
        stack: u32,
    },
    #[error("Hand evaluation needs 7 cards, got {got}")]
    InvalidHandSize { got: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Cannot parse card {0:?}")]
    InvalidCard(String),
}

impl GameError {
    /// True for rejections of a player's action, as opposed to integration
    /// errors on the adapter side.
    pub fn is_illegal_action(&self) -> bool {
        matches!(
            self,
            GameError::WrongPhase { .. }
                | GameError::NotPlayersTurn { .. }
                | GameError::InsufficientChips { .. }
                | GameError::NotARaise { .. }
        )
    }
}
