//! Highlight bookkeeping.
//!
//! The tile sets on `GameState` decide legality; tile flags and
//! `HighlightTile` commands only mirror them for display.

use crate::board::{Highlight, Position};
use crate::core::{GameState, UnitId};
use crate::presentation::{Command, Presenter};
use crate::range::{self, TileList};

fn mark(state: &mut GameState, out: &mut Presenter<'_>, tile: Position, highlight: Highlight) {
    state.board.set_highlight(tile, highlight);
    out.emit(Command::HighlightTile { tile, highlight });
}

/// Clear every highlighted tile and the legality sets.
///
/// Idempotent: a second call finds nothing to clear and emits nothing.
pub fn clear_highlights(state: &mut GameState, out: &mut Presenter<'_>) {
    let lit: Vec<Position> = state
        .board
        .tiles()
        .filter(|t| t.highlight != Highlight::None)
        .map(|t| t.position)
        .collect();
    for tile in lit {
        mark(state, out, tile, Highlight::None);
    }
    state.highlights.summonable.clear();
    state.highlights.movable.clear();
    state.highlights.attackable.clear();
}

/// Light up the current player's units that can still act.
///
/// Nothing is shown on the AI's turn.
pub fn highlight_ready_units(state: &mut GameState, out: &mut Presenter<'_>) {
    if state.is_ai_turn() || state.is_over() {
        return;
    }
    let tiles: Vec<Position> = range::ready_units(state, state.current_player)
        .into_iter()
        .filter_map(|id| state.unit(id).map(|u| u.position))
        .collect();
    for tile in tiles {
        mark(state, out, tile, Highlight::Movable);
    }
}

/// Show where a selected unit can move and what it can attack.
pub fn show_unit_options(state: &mut GameState, out: &mut Presenter<'_>, unit: UnitId) {
    let moves = if range::can_move(state, unit) {
        range::movable_tiles(state, unit)
    } else {
        TileList::new()
    };
    let attacks = if range::can_attack(state, unit) {
        range::attackable_tiles(state, unit)
    } else {
        TileList::new()
    };
    for &tile in &moves {
        state.highlights.movable.insert(tile);
        mark(state, out, tile, Highlight::Movable);
    }
    for &tile in &attacks {
        state.highlights.attackable.insert(tile);
        mark(state, out, tile, Highlight::Attackable);
    }
}

/// Show where the selected creature card can be summoned.
pub fn show_summon_tiles(state: &mut GameState, out: &mut Presenter<'_>, tiles: &[Position]) {
    for &tile in tiles {
        state.highlights.summonable.insert(tile);
        mark(state, out, tile, Highlight::Summonable);
    }
}
