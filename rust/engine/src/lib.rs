//! # limitduel-engine: Heads-Up Fixed-Limit Hold'em Rules
//!
//! Rules engine for a two-player, fixed-limit Texas Hold'em table. Tracks
//! chip stacks, the pot and per-street betting, and ranks hands at showdown.
//! Rendering, transport and lobby handling belong to adapters built on top:
//! they feed intents in and render the [`game::TableSnapshot`] that comes back.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Seven-card hand evaluation and strength comparison
//! - [`engine`] - Round state machine: blinds, turns, streets, settlement
//! - [`game`] - Phases, streets, round state and snapshots
//! - [`player`] - Seats, stacks and player actions
//! - [`pot`] - Pot accounting and split pots
//! - [`rules`] - Fixed-limit action validation
//! - [`config`] - Table stakes from defaults, TOML and environment
//! - [`logger`] - Hand history records and JSONL export
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use limitduel_engine::cards::{Card, Rank, Suit};
//! use limitduel_engine::hand::{evaluate, HandCategory};
//!
//! // Evaluate a 7-card poker hand
//! let cards = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Spades, rank: Rank::King },
//!     Card { suit: Suit::Spades, rank: Rank::Queen },
//!     Card { suit: Suit::Spades, rank: Rank::Jack },
//!     Card { suit: Suit::Spades, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Hearts, rank: Rank::Three },
//! ];
//!
//! let ranking = evaluate(&cards);
//! assert_eq!(ranking.category, HandCategory::RoyalFlush);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use limitduel_engine::config::TableConfig;
//! use limitduel_engine::engine::Engine;
//! use limitduel_engine::game::Phase;
//! use limitduel_engine::player::{PlayerAction, PlayerId};
//!
//! let mut engine = Engine::new(TableConfig::with_seed(42));
//! engine.start_round().unwrap();
//!
//! // The small blind gives up; the big blind collects both blinds.
//! let snap = engine.apply_action(PlayerId::Player0, PlayerAction::Fold).unwrap();
//! assert_eq!(snap.phase, Phase::RoundOver);
//! assert_eq!(snap.stacks, [9, 11]);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
