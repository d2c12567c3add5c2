//! Greedy AI integration tests.

mod common;

use common::*;
use grid_duel::presentation::Presenter;
use grid_duel::{AiController, GameResult, GameState, InputEvent, PlayError, PlayerId, RecordingSink};

fn ai_state() -> GameState {
    let mut state = bare_state();
    state.current_player = PlayerId::TWO;
    state
}

/// Test the attack pass runs before any movement.
#[test]
fn test_attacks_before_moves() {
    let mut state = ai_state();
    let walker = spawn(&mut state, PlayerId::TWO, pos(7, 0), 1, 3, &[]);
    let fighter = spawn(&mut state, PlayerId::TWO, pos(3, 2), 2, 3, &[]);
    let target = spawn(&mut state, PlayerId::ONE, pos(2, 2), 1, 3, &[]);
    let mut sink = RecordingSink::new();
    let mut out = Presenter::instant(&mut sink);

    let summary = AiController::take_turn(&mut state, &mut out);

    assert_eq!(summary.attacks, vec![(fighter, target)]);
    assert!(summary.moves.iter().any(|&(id, _)| id == walker));
    assert!(summary.moves.iter().all(|&(id, _)| id != fighter));
    assert_eq!(state.unit(target).unwrap().health, 1);
}

/// Test that movement closes Manhattan distance to the enemy avatar.
#[test]
fn test_moves_close_distance() {
    let mut state = ai_state();
    let goal = pos(1, 2);
    let units: Vec<_> = [pos(8, 0), pos(8, 4), pos(6, 4)]
        .into_iter()
        .map(|at| spawn(&mut state, PlayerId::TWO, at, 1, 1, &[]))
        .collect();
    let before: Vec<u32> = units
        .iter()
        .map(|&id| state.unit(id).unwrap().position.manhattan(goal))
        .collect();
    let mut sink = RecordingSink::new();
    let mut out = Presenter::instant(&mut sink);

    AiController::take_turn(&mut state, &mut out);

    for (id, was) in units.iter().zip(before) {
        let now = state.unit(*id).unwrap().position.manhattan(goal);
        assert!(now < was, "{id} did not advance");
    }
}

/// Test sleeping units are left alone.
#[test]
fn test_sleeping_units_idle() {
    let mut state = ai_state();
    let id = state.alloc_unit_id();
    state.spawn(grid_duel::Unit::new(id, "Nap", "n", PlayerId::TWO, 1, 1), pos(6, 0));
    let mut sink = RecordingSink::new();
    let mut out = Presenter::instant(&mut sink);

    let summary = AiController::take_turn(&mut state, &mut out);

    assert!(summary.moves.iter().all(|&(unit, _)| unit != id));
    assert_eq!(state.unit(id).unwrap().position, pos(6, 0));
}

/// Test the AI stops once the game is decided.
#[test]
fn test_stops_after_win() {
    let mut state = ai_state();
    let enemy = state.avatars[PlayerId::ONE];
    state.unit_mut(enemy).unwrap().health = 1;
    state.players[PlayerId::ONE].health = 1;
    spawn(&mut state, PlayerId::TWO, pos(2, 2), 3, 3, &[]);
    let late = spawn(&mut state, PlayerId::TWO, pos(8, 4), 1, 1, &[]);
    let mut sink = RecordingSink::new();
    let mut out = Presenter::instant(&mut sink);

    let summary = AiController::take_turn(&mut state, &mut out);

    assert!(state.is_over());
    assert_eq!(summary.attacks.len(), 1);
    assert!(summary.moves.is_empty());
    assert_eq!(state.unit(late).unwrap().position, pos(8, 4));
    assert!(!state.guards.ai_acting);
}

/// Test a passive human against the AI: the AI avatar walks over and
/// trades blows until it wins, and the guards never stay set.
#[test]
fn test_ai_wins_against_passive_player() {
    let mut game = vs_ai_game();
    for _ in 0..20 {
        if game.state().is_over() {
            break;
        }
        game.handle(InputEvent::EndTurn).unwrap();
        assert!(!game.state().guards.any());
        if !game.state().is_over() {
            assert_eq!(game.state().current_player, PlayerId::ONE);
        }
    }

    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::TWO)));
    assert_eq!(game.handle(InputEvent::EndTurn), Err(PlayError::GameOver));
    assert!(game.sink().notifications().contains(&"Player 2 wins!"));
}
