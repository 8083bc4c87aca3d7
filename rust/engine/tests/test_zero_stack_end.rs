use limitduel_engine::config::TableConfig;
use limitduel_engine::engine::Engine;
use limitduel_engine::errors::GameError;
use limitduel_engine::player::{PlayerAction as A, PlayerId as P};

#[test]
fn zero_stack_prevents_new_round() {
    let config = TableConfig {
        starting_stack: 2,
        ..TableConfig::with_seed(1)
    };
    let mut eng = Engine::new(config);
    // Player 0 loses 2 chips: call the big blind, then fold to a raise
    eng.start_round().unwrap();
    eng.apply_action(P::Player0, A::CheckOrCall).unwrap();
    eng.apply_action(P::Player1, A::CheckOrCall).unwrap();
    eng.apply_action(P::Player0, A::Fold).unwrap();
    assert_eq!(eng.snapshot().stacks, [0, 4]);

    let err = eng.start_round().unwrap_err();
    assert_eq!(
        err,
        GameError::CannotPostBlind {
            player: P::Player0,
            blind: 1,
            stack: 0
        }
    );
}

#[test]
fn stack_below_big_blind_prevents_new_round() {
    let config = TableConfig {
        starting_stack: 3,
        ..TableConfig::with_seed(2)
    };
    let mut eng = Engine::new(config);
    // Big blind folds the first action it gets after a raise
    eng.start_round().unwrap();
    eng.apply_action(P::Player0, A::Bet(3)).unwrap();
    eng.apply_action(P::Player1, A::Fold).unwrap();
    assert_eq!(eng.snapshot().stacks, [5, 1]);

    let err = eng.start_round().unwrap_err();
    assert!(matches!(
        err,
        GameError::CannotPostBlind {
            player: P::Player1,
            ..
        }
    ));
}
