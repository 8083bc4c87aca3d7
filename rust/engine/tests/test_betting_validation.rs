use limitduel_engine::errors::GameError;
use limitduel_engine::player::PlayerAction as A;
use limitduel_engine::rules::{validate_action, ValidatedAction, STREET_BET_CAP};

#[test]
fn check_when_nothing_owed() {
    let va = validate_action(8, 2, 2, STREET_BET_CAP, A::CheckOrCall).unwrap();
    assert_eq!(va, ValidatedAction::Check);
}

#[test]
fn call_moves_the_difference() {
    let va = validate_action(9, 1, 2, STREET_BET_CAP, A::CheckOrCall).unwrap();
    assert_eq!(va, ValidatedAction::Call(1));
}

#[test]
fn short_call_is_refused_not_all_in() {
    let err = validate_action(1, 0, 3, STREET_BET_CAP, A::CheckOrCall).unwrap_err();
    assert_eq!(err, GameError::InsufficientChips { needed: 3, stack: 1 });
}

#[test]
fn bet_over_cap_is_clamped() {
    let va = validate_action(9, 1, 2, STREET_BET_CAP, A::Bet(8)).unwrap();
    assert_eq!(va, ValidatedAction::Bet { total: 5, delta: 4 });
}

#[test]
fn bet_equal_to_current_is_not_a_raise() {
    let err = validate_action(9, 1, 2, STREET_BET_CAP, A::Bet(2)).unwrap_err();
    assert_eq!(err, GameError::NotARaise { amount: 2, current: 2 });
}

#[test]
fn bet_below_current_is_not_a_raise() {
    let err = validate_action(9, 0, 3, STREET_BET_CAP, A::Bet(1)).unwrap_err();
    assert!(matches!(err, GameError::NotARaise { .. }));
}

#[test]
fn bet_when_capped_cannot_raise_further() {
    let err = validate_action(9, 2, 5, STREET_BET_CAP, A::Bet(7)).unwrap_err();
    assert_eq!(err, GameError::NotARaise { amount: 5, current: 5 });
}

#[test]
fn bet_beyond_stack_is_refused() {
    let err = validate_action(2, 1, 2, STREET_BET_CAP, A::Bet(4)).unwrap_err();
    assert_eq!(err, GameError::InsufficientChips { needed: 3, stack: 2 });
}

#[test]
fn fold_is_always_valid() {
    assert_eq!(
        validate_action(0, 0, 5, STREET_BET_CAP, A::Fold),
        Ok(ValidatedAction::Fold)
    );
}

#[test]
fn illegal_action_classification() {
    assert!(GameError::NotARaise { amount: 2, current: 2 }.is_illegal_action());
    assert!(GameError::InsufficientChips { needed: 1, stack: 0 }.is_illegal_action());
    assert!(!GameError::NotEnoughPlayers.is_illegal_action());
    assert!(!GameError::InvalidHandSize { got: 3 }.is_illegal_action());
}
