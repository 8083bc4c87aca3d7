use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRanking;
use crate::player::PlayerId;
use crate::pot::Pot;

/// Where the table is in the life of a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// No round has been started yet
    PreDeal,
    /// Waiting for the active player to act
    Betting,
    /// Community cards are being dealt between streets
    Dealing,
    /// Both hands are being compared
    Showdown,
    /// The pot has been awarded; a new round may start
    RoundOver,
}

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The street that follows, or `None` after the river.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Community cards dealt when this street opens.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

/// Table-wide state of the round in progress.
///
/// Per-player chips and cards live on [`crate::player::Player`]; this holds
/// everything shared between the two seats.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub phase: Phase,
    pub street: Street,
    pub active_player: PlayerId,
    /// Closing the street requires action to come back to this player
    pub action_target: PlayerId,
    /// Highest street total posted on this street
    pub current_bet: u32,
    pub pot: Pot,
    pub community: Vec<Card>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            phase: Phase::PreDeal,
            street: Street::Preflop,
            active_player: PlayerId::Player0,
            action_target: PlayerId::Player1,
            current_bet: 0,
            pot: Pot::default(),
            community: Vec::with_capacity(5),
        }
    }
}

/// Both hands as revealed at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownSummary {
    /// Hole cards, indexed by player
    pub hands: [[Card; 2]; 2],
    /// Best hand of each player, indexed by player
    pub rankings: [HandRanking; 2],
    /// One winner, or both on a tie
    pub winners: Vec<PlayerId>,
}

/// Public view of the table handed to presentation after every change.
///
/// Hole cards are not part of it until showdown; adapters deliver each
/// player's own cards through [`crate::engine::Engine::hole_cards`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Rounds started on this table, counting the current one
    pub hand_number: u32,
    pub phase: Phase,
    pub street: Street,
    pub active_player: PlayerId,
    pub pot: u32,
    pub current_bet: u32,
    pub stacks: [u32; 2],
    pub street_bets: [u32; 2],
    pub connected: [bool; 2],
    pub community: Vec<Card>,
    /// Present only when the last round ended by showdown
    #[serde(default)]
    pub showdown: Option<ShowdownSummary>,
}

impl TableSnapshot {
    pub fn stack(&self, player: PlayerId) -> u32 {
        self.stacks[player.index()]
    }

    pub fn street_bet(&self, player: PlayerId) -> u32 {
        self.street_bets[player.index()]
    }

    /// Whether `player` may act right now.
    pub fn is_turn_of(&self, player: PlayerId) -> bool {
        self.phase == Phase::Betting && self.active_player == player
    }
}
