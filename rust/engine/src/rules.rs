use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Total a single player may have in front of them on one street.
pub const STREET_BET_CAP: u32 = 5;
pub const SMALL_BLIND: u32 = 1;
pub const BIG_BLIND: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to move in to match the current bet
    Call(u32),
    /// New street total and the chips it costs on top of what is already in
    Bet { total: u32, delta: u32 },
}

/// Validates a player action against the fixed-limit betting rules.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`]
/// carrying the exact chip movement. Bets are clamped to `bet_cap` before
/// they are checked. There is no all-in: a player who cannot cover a call
/// or a bet is refused and may only fold.
///
/// # Arguments
///
/// * `stack` - Player's remaining chip stack
/// * `street_bet` - Chips the player already put in on this street
/// * `current_bet` - Highest street total posted so far
/// * `bet_cap` - Maximum street total a bet may reach
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::InsufficientChips`] - The stack cannot cover the call or bet
/// - [`GameError::NotARaise`] - The clamped bet does not exceed `current_bet`
///
/// # Examples
///
/// ```
/// use limitduel_engine::rules::{validate_action, ValidatedAction};
/// use limitduel_engine::player::PlayerAction;
///
/// // Small blind completing pre-flop
/// let result = validate_action(9, 1, 2, 5, PlayerAction::CheckOrCall);
/// assert_eq!(result, Ok(ValidatedAction::Call(1)));
///
/// // Bets above the cap are clamped
/// let result = validate_action(9, 1, 2, 5, PlayerAction::Bet(8));
/// assert_eq!(result, Ok(ValidatedAction::Bet { total: 5, delta: 4 }));
/// ```
///
/// ```
/// use limitduel_engine::rules::validate_action;
/// use limitduel_engine::player::PlayerAction;
/// use limitduel_engine::errors::GameError;
///
/// // Betting the amount already posted is not a raise
/// let result = validate_action(9, 1, 2, 5, PlayerAction::Bet(2));
/// assert!(matches!(result, Err(GameError::NotARaise { .. })));
/// ```
pub fn validate_action(
    stack: u32,
    street_bet: u32,
    current_bet: u32,
    bet_cap: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::CheckOrCall => {
            let to_call = current_bet.saturating_sub(street_bet);
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack < to_call {
                Err(GameError::InsufficientChips {
                    needed: to_call,
                    stack,
                })
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(requested) => {
            let total = requested.min(bet_cap);
            if total <= current_bet {
                return Err(GameError::NotARaise {
                    amount: total,
                    current: current_bet,
                });
            }
            let delta = total - street_bet;
            if stack < delta {
                return Err(GameError::InsufficientChips {
                    needed: delta,
                    stack,
                });
            }
            Ok(ValidatedAction::Bet { total, delta })
        }
    }
}
