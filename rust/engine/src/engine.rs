use std::cmp::Ordering;

use chrono::Utc;

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::{CardSource, Deck};
use crate::errors::GameError;
use crate::game::{Phase, RoundState, ShowdownSummary, Street, TableSnapshot};
use crate::hand::{compare_hands, evaluate, HandRanking};
use crate::logger::{format_hand_id, ActionRecord, HandRecord, ShowdownInfo};
use crate::player::{Player, PlayerAction, PlayerId};
use crate::rules::{validate_action, ValidatedAction};

/// Heads-up fixed-limit table: the single authority over chips, cards and
/// turn order.
///
/// Every inbound intent runs to completion before it returns, including
/// any street advance or showdown it triggers, and hands back the
/// resulting [`TableSnapshot`]. A rejected intent returns an error and
/// leaves the table untouched.
///
/// # Examples
///
/// ```
/// use limitduel_engine::config::TableConfig;
/// use limitduel_engine::engine::Engine;
/// use limitduel_engine::game::{Phase, Street};
/// use limitduel_engine::player::{PlayerAction, PlayerId};
///
/// let mut engine = Engine::new(TableConfig::with_seed(12345));
/// let snap = engine.start_round().unwrap();
/// assert_eq!(snap.pot, 3);
///
/// // Small blind completes, big blind checks: the flop is dealt.
/// engine.apply_action(PlayerId::Player0, PlayerAction::CheckOrCall).unwrap();
/// let snap = engine.apply_action(PlayerId::Player1, PlayerAction::CheckOrCall).unwrap();
/// assert_eq!(snap.phase, Phase::Betting);
/// assert_eq!(snap.street, Street::Flop);
/// assert_eq!(snap.community.len(), 3);
/// ```
#[derive(Debug)]
pub struct Engine<D = Deck> {
    config: TableConfig,
    deck: D,
    players: [Player; 2],
    round: RoundState,
    hand_number: u32,
    date: String,
    showdown: Option<ShowdownSummary>,
    record: Option<HandRecord>,
}

impl Engine<Deck> {
    /// A table with both seats already taken.
    pub fn new(config: TableConfig) -> Self {
        let deck = match config.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new_unseeded(),
        };
        Self::with_card_source(config, deck)
    }

    /// A table waiting for both players to join.
    pub fn empty(config: TableConfig) -> Self {
        let mut engine = Self::new(config);
        for p in &mut engine.players {
            p.set_connected(false);
        }
        engine
    }
}

impl<D: CardSource> Engine<D> {
    pub fn with_card_source(config: TableConfig, deck: D) -> Self {
        let players = PlayerId::BOTH.map(|id| {
            let mut p = Player::new(id, config.starting_stack);
            p.set_connected(true);
            p
        });
        Self {
            config,
            deck,
            players,
            round: RoundState::default(),
            hand_number: 0,
            date: Utc::now().format("%Y%m%d").to_string(),
            showdown: None,
            record: None,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Private cards of one player, for delivery to that player only.
    pub fn hole_cards(&self, player: PlayerId) -> Option<[Card; 2]> {
        self.players[player.index()].hand()
    }

    /// History of the current round, or of the last one once it is over.
    pub fn last_hand_record(&self) -> Option<&HandRecord> {
        self.record.as_ref()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            hand_number: self.hand_number,
            phase: self.round.phase,
            street: self.round.street,
            active_player: self.round.active_player,
            pot: self.round.pot.amount(),
            current_bet: self.round.current_bet,
            stacks: self.players.each_ref().map(Player::stack),
            street_bets: self.players.each_ref().map(Player::street_bet),
            connected: self.players.each_ref().map(Player::is_connected),
            community: self.round.community.clone(),
            showdown: self.showdown.clone(),
        }
    }

    pub fn on_player_joined(&mut self, player: PlayerId) -> TableSnapshot {
        self.players[player.index()].set_connected(true);
        tracing::info!(%player, "player joined");
        self.snapshot()
    }

    /// Frees the seat. A player leaving mid-round forfeits the pot.
    pub fn on_player_left(&mut self, player: PlayerId) -> TableSnapshot {
        self.players[player.index()].set_connected(false);
        tracing::info!(%player, phase = ?self.round.phase, "player left");
        if self.round.phase == Phase::Betting {
            self.win_by_forfeit(player.other(), "opponent left");
        }
        self.snapshot()
    }

    /// Posts the blinds, deals hole cards and opens pre-flop betting.
    ///
    /// # Errors
    ///
    /// - [`GameError::WrongPhase`] - A round is still in progress
    /// - [`GameError::InvalidConfig`] - The stakes fail [`TableConfig::validate`]
    /// - [`GameError::NotEnoughPlayers`] - A seat is empty
    /// - [`GameError::CannotPostBlind`] - A stack cannot cover its blind
    pub fn start_round(&mut self) -> Result<TableSnapshot, GameError> {
        let result = self.try_start_round();
        if let Err(e) = &result {
            tracing::debug!(error = %e, "start_round refused");
        }
        result
    }

    fn try_start_round(&mut self) -> Result<TableSnapshot, GameError> {
        match self.round.phase {
            Phase::PreDeal | Phase::RoundOver => {}
            actual => return Err(GameError::WrongPhase { actual }),
        }
        self.config
            .validate()
            .map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        if !self.players.iter().all(Player::is_connected) {
            return Err(GameError::NotEnoughPlayers);
        }
        let blinds = [self.config.small_blind, self.config.big_blind];
        for (p, &blind) in self.players.iter().zip(&blinds) {
            if p.stack() < blind {
                return Err(GameError::CannotPostBlind {
                    player: p.id(),
                    blind,
                    stack: p.stack(),
                });
            }
        }

        self.deck.shuffle_and_reset();
        self.hand_number += 1;
        self.showdown = None;
        self.round = RoundState::default();

        for (p, &blind) in self.players.iter_mut().zip(&blinds) {
            p.reset_street_bet();
            p.clear_cards();
            p.bet(blind)?;
            self.round.pot.add(blind);
        }
        self.round.current_bet = self.config.big_blind;
        self.round.action_target = PlayerId::Player1;
        self.round.active_player = PlayerId::Player0;

        let hole_cards: [[Card; 2]; 2] =
            std::array::from_fn(|_| [self.deck.deal_card(), self.deck.deal_card()]);
        for (p, hole) in self.players.iter_mut().zip(hole_cards) {
            p.give_hand(hole);
        }

        self.round.phase = Phase::Betting;
        self.round.street = Street::Preflop;

        let hand_id = format_hand_id(&self.date, self.hand_number);
        tracing::info!(hand_id = %hand_id, pot = self.round.pot.amount(), "round started");
        self.record = Some(HandRecord {
            hand_id,
            seed: self.config.seed,
            hole_cards,
            actions: Vec::new(),
            board: Vec::new(),
            result: None,
            ts: None,
            meta: None,
            showdown: None,
        });
        Ok(self.snapshot())
    }

    /// Applies one player's action and any transitions it triggers.
    ///
    /// # Errors
    ///
    /// - [`GameError::WrongPhase`] - No betting is in progress
    /// - [`GameError::NotPlayersTurn`] - `player` is not the active player
    /// - [`GameError::InsufficientChips`] - The stack cannot cover the call or bet
    /// - [`GameError::NotARaise`] - The bet does not exceed the current bet
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: PlayerAction,
    ) -> Result<TableSnapshot, GameError> {
        let result = self.try_apply_action(player, action);
        if let Err(e) = &result {
            tracing::debug!(%player, ?action, error = %e, "action rejected");
        }
        result
    }

    fn try_apply_action(
        &mut self,
        player: PlayerId,
        action: PlayerAction,
    ) -> Result<TableSnapshot, GameError> {
        if self.round.phase != Phase::Betting {
            return Err(GameError::WrongPhase {
                actual: self.round.phase,
            });
        }
        if player != self.round.active_player {
            return Err(GameError::NotPlayersTurn {
                expected: self.round.active_player,
                actual: player,
            });
        }
        let seat = &self.players[player.index()];
        let validated = validate_action(
            seat.stack(),
            seat.street_bet(),
            self.round.current_bet,
            self.config.bet_cap,
            action,
        )?;

        match validated {
            ValidatedAction::Fold => {}
            ValidatedAction::Check => {}
            ValidatedAction::Call(amount) => {
                self.players[player.index()].bet(amount)?;
                self.round.pot.add(amount);
            }
            ValidatedAction::Bet { total, delta } => {
                self.players[player.index()].bet(delta)?;
                self.round.pot.add(delta);
                self.round.current_bet = total;
                self.round.action_target = player;
            }
        }
        tracing::debug!(%player, ?validated, pot = self.round.pot.amount(), "action applied");
        if let Some(rec) = &mut self.record {
            rec.actions.push(ActionRecord {
                player,
                street: self.round.street,
                action,
            });
        }

        if validated == ValidatedAction::Fold {
            self.win_by_forfeit(player.other(), "fold");
        } else {
            self.advance_turn(player);
        }
        Ok(self.snapshot())
    }

    fn advance_turn(&mut self, actor: PlayerId) {
        let current_bet = self.round.current_bet;
        let matched = self.players.iter().all(|p| p.street_bet() == current_bet);
        if matched && actor == self.round.action_target {
            self.advance_street();
        } else {
            self.round.active_player = actor.other();
        }
    }

    fn advance_street(&mut self) {
        for p in &mut self.players {
            p.reset_street_bet();
        }
        self.round.current_bet = 0;
        self.round.action_target = PlayerId::Player0;
        self.round.active_player = PlayerId::Player0;

        let Some(next) = self.round.street.next() else {
            self.round.phase = Phase::Showdown;
            self.showdown();
            return;
        };
        self.round.phase = Phase::Dealing;
        for _ in 0..next.cards_dealt() {
            let card = self.deck.deal_card();
            self.round.community.push(card);
        }
        self.round.street = next;
        self.round.phase = Phase::Betting;
        tracing::debug!(street = ?next, board = ?self.round.community, "street dealt");
    }

    fn showdown(&mut self) {
        let hands = match (self.players[0].hand(), self.players[1].hand()) {
            (Some(a), Some(b)) => [a, b],
            _ => unreachable!("showdown is only reached after hole cards are dealt"),
        };
        let board = &self.round.community;
        let rankings: [HandRanking; 2] = hands.map(|hole| evaluate(&seven_cards(hole, board)));

        let winners = match compare_hands(&rankings[0], &rankings[1]) {
            Ordering::Greater => vec![PlayerId::Player0],
            Ordering::Less => vec![PlayerId::Player1],
            Ordering::Equal => PlayerId::BOTH.to_vec(),
        };

        let result = if let &[winner] = winners.as_slice() {
            let amount = self.round.pot.take();
            self.players[winner.index()].add_chips(amount);
            format!("{winner} wins {amount} at showdown")
        } else {
            let split = self.round.pot.split();
            for p in &mut self.players {
                p.add_chips(split.share);
            }
            // The odd chip goes to the big blind.
            self.players[PlayerId::Player1.index()].add_chips(split.remainder);
            format!("split pot, {} each", split.share)
        };

        let notes = format!(
            "{}: {}; {}: {}",
            PlayerId::Player0,
            rankings[0],
            PlayerId::Player1,
            rankings[1]
        );
        let info = ShowdownInfo {
            winners: winners.clone(),
            notes: Some(notes),
        };
        self.showdown = Some(ShowdownSummary {
            hands,
            rankings,
            winners,
        });
        self.finish_round(result, Some(info));
    }

    fn win_by_forfeit(&mut self, winner: PlayerId, reason: &str) {
        let amount = self.round.pot.take();
        self.players[winner.index()].add_chips(amount);
        self.finish_round(format!("{winner} wins {amount} by {reason}"), None);
    }

    fn finish_round(&mut self, result: String, showdown: Option<ShowdownInfo>) {
        self.round.phase = Phase::RoundOver;
        tracing::info!(
            hand = self.hand_number,
            stacks = ?self.players.each_ref().map(Player::stack),
            "{result}"
        );
        if let Some(rec) = &mut self.record {
            rec.board = self.round.community.clone();
            rec.result = Some(result);
            rec.showdown = showdown;
        }
    }
}

fn seven_cards(hole: [Card; 2], board: &[Card]) -> [Card; 7] {
    let mut cards = [hole[0]; 7];
    cards[1] = hole[1];
    cards[2..].copy_from_slice(board);
    cards
}
