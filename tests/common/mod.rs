//! Shared fixtures for integration tests.

#![allow(dead_code)]

use grid_duel::cards::CardId;
use grid_duel::presentation::Presenter;
use grid_duel::{
    Ability, Game, GameBuilder, GameConfig, GameState, PlayerId, Position, RecordingSink, Unit, UnitId,
};

/// Install a test-writer subscriber so `RUST_LOG`-style output shows up
/// under `cargo test -- --nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

pub fn pos(x: u8, y: u8) -> Position {
    Position::new_unchecked(x, y)
}

/// Fresh state with the standard config, no cards.
pub fn bare_state() -> GameState {
    GameState::new(GameConfig::default(), 42)
}

/// Fresh state where both seats are human.
pub fn two_human_state() -> GameState {
    GameState::new(GameConfig::default().with_ai_player(None), 42)
}

/// Run `f` with an instant presenter over a fresh recording sink.
pub fn with_out<T>(f: impl FnOnce(&mut Presenter<'_>) -> T) -> (T, RecordingSink) {
    let mut sink = RecordingSink::new();
    let value = {
        let mut out = Presenter::instant(&mut sink);
        f(&mut out)
    };
    (value, sink)
}

/// Place an awake unit with the given abilities.
pub fn spawn(
    state: &mut GameState,
    owner: PlayerId,
    at: Position,
    attack: u32,
    health: u32,
    abilities: &[Ability],
) -> UnitId {
    let id = state.alloc_unit_id();
    let mut unit = Unit::new(id, "Unit", "unit", owner, attack, health);
    unit.abilities.extend(abilities.iter().cloned());
    unit.reset_turn_status();
    state.spawn(unit, at).expect("tile should be empty")
}

/// Standard game against the AI, standard decks, seed 42.
pub fn vs_ai_game() -> Game {
    init_tracing();
    GameBuilder::new().seed(42).build(RecordingSink::new())
}

/// Standard game with both seats human.
pub fn hot_seat_game() -> Game {
    init_tracing();
    GameBuilder::new()
        .seed(42)
        .config(GameConfig::default().with_ai_player(None))
        .build(RecordingSink::new())
}

/// Replace a player's hand with the given card ids.
pub fn set_hand(game: &mut Game, player: PlayerId, cards: &[u32]) {
    game.state_mut().players[player].hand = cards.iter().map(|&c| CardId::new(c)).collect();
}

pub fn set_mana(game: &mut Game, player: PlayerId, mana: u32) {
    game.state_mut().players[player].mana = mana;
}
