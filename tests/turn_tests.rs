//! Turn controller integration tests.

mod common;

use common::*;
use grid_duel::cards::CardId;
use grid_duel::presentation::Presenter;
use grid_duel::{
    GameAction, GameBuilder, GameConfig, InputEvent, PlayerId, RecordingSink, TurnController, Unit,
};

// =============================================================================
// Draw Tests
// =============================================================================

/// Test that ending a turn into a full hand skips the draw.
#[test]
fn test_full_hand_skips_draw() {
    let mut game = hot_seat_game();
    set_hand(&mut game, PlayerId::TWO, &[11, 12, 13, 14, 16, 17]);
    let deck_before = game.state().deck_size(PlayerId::TWO);
    game.sink_mut().clear();

    game.handle(InputEvent::EndTurn).unwrap();

    assert_eq!(game.state().hand(PlayerId::TWO).len(), 6);
    assert_eq!(game.state().deck_size(PlayerId::TWO), deck_before);
    assert_eq!(game.sink().notifications(), vec!["Hand is full (6 cards)"]);
}

/// Test that the AI's skipped draw is announced like a human's.
#[test]
fn test_full_hand_skips_draw_for_ai() {
    let mut game = vs_ai_game();
    set_hand(&mut game, PlayerId::TWO, &[11, 12, 13, 14, 16, 17]);
    let deck_before = game.state().deck_size(PlayerId::TWO);
    game.sink_mut().clear();

    game.handle(InputEvent::EndTurn).unwrap();

    assert_eq!(game.state().current_player, PlayerId::ONE);
    assert_eq!(game.state().hand(PlayerId::TWO).len(), 6);
    assert_eq!(game.state().deck_size(PlayerId::TWO), deck_before);
    assert_eq!(game.sink().notifications(), vec!["Hand is full (6 cards)"]);
}

/// Test that an empty deck only notifies.
#[test]
fn test_empty_deck_notifies() {
    init_tracing();
    let mut game = GameBuilder::new()
        .config(GameConfig::default().with_ai_player(None))
        .deck(PlayerId::TWO, vec![CardId::new(11)])
        .build(RecordingSink::new());
    game.sink_mut().clear();

    game.handle(InputEvent::EndTurn).unwrap();

    // The single card went to the opening hand.
    assert_eq!(game.state().hand(PlayerId::TWO), &[CardId::new(11)]);
    assert_eq!(game.state().deck_size(PlayerId::TWO), 0);
    assert_eq!(
        game.sink().notifications(),
        vec!["Deck is empty, cannot draw more cards!"]
    );
}

// =============================================================================
// Turn Switch Tests
// =============================================================================

/// Test that every unit is reset on every switch, whoever owns it.
#[test]
fn test_switch_resets_all_units() {
    let mut state = two_human_state();
    let tired = spawn(&mut state, PlayerId::ONE, pos(3, 2), 1, 1, &[]);
    {
        let unit = state.unit_mut(tired).unwrap();
        unit.moves = 1;
        unit.attacks = 1;
    }
    let fresh = state.alloc_unit_id();
    state.spawn(Unit::new(fresh, "New", "n", PlayerId::TWO, 1, 1), pos(6, 2));

    with_out(|out| TurnController::end_turn(&mut state, out));

    for unit in state.units() {
        assert_eq!((unit.moves, unit.attacks, unit.sleeping), (0, 0, false));
    }
}

/// Test that mana follows the turn counter with no cap.
#[test]
fn test_mana_is_uncapped() {
    let mut state = two_human_state();
    let mut sink = RecordingSink::new();
    let mut out = Presenter::instant(&mut sink);
    for _ in 0..30 {
        TurnController::end_turn(&mut state, &mut out);
    }

    assert_eq!(state.current_player, PlayerId::ONE);
    assert_eq!(state.turn, 16);
    assert_eq!(state.players[PlayerId::ONE].mana, 17);
    assert_eq!(state.players[PlayerId::TWO].mana, 16);
}

/// Test that the AI's turn completes inside the human's end turn.
#[test]
fn test_end_turn_runs_ai_and_returns() {
    let mut game = vs_ai_game();
    let ai_avatar = game.state().avatars[PlayerId::TWO];

    game.handle(InputEvent::EndTurn).unwrap();

    let state = game.state();
    assert_eq!(state.current_player, PlayerId::ONE);
    assert_eq!(state.turn, 2);
    assert_eq!(state.players[PlayerId::ONE].mana, 3);
    assert_eq!(state.unit(ai_avatar).unwrap().position, pos(5, 2));
    assert!(!state.guards.any());
}

/// Test that turn ends and AI moves land in the history.
#[test]
fn test_history_records_both_players() {
    let mut game = vs_ai_game();
    game.handle(InputEvent::EndTurn).unwrap();

    let history = game.state().history();
    let players: Vec<_> = history.iter().map(|r| (r.player, r.action.clone())).collect();
    assert_eq!(players[0], (PlayerId::ONE, GameAction::EndTurn));
    assert!(players
        .iter()
        .any(|(p, a)| *p == PlayerId::TWO && matches!(a, GameAction::Move { .. })));
    assert_eq!(players.last().unwrap(), &(PlayerId::TWO, GameAction::EndTurn));
}

/// Test that the new human player sees their ready units.
#[test]
fn test_ready_units_highlighted_after_switch() {
    let mut game = hot_seat_game();
    game.handle(InputEvent::EndTurn).unwrap();

    let avatar_tile = game.state().avatar(PlayerId::TWO).unwrap().position;
    assert_eq!(
        game.state().board.tile(avatar_tile).highlight,
        grid_duel::Highlight::Movable
    );
    let own = game.state().avatar(PlayerId::ONE).unwrap().position;
    assert_eq!(game.state().board.tile(own).highlight, grid_duel::Highlight::None);
}
