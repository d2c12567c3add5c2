//! Player input.
//!
//! Every event is checked against the game-over flag, the re-entrancy
//! guards and the turn owner before it does anything. Rejections never
//! panic and never change state.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Position;
use crate::cards::CardRegistry;
use crate::combat::CombatResolver;
use crate::core::{GameState, PlayError, UnitId};
use crate::effects::EffectRegistry;
use crate::presentation::Presenter;
use crate::turn::{
    clear_highlights, deselect_card, highlight_ready_units, play_card, select_card, show_unit_options,
    TurnController,
};
use crate::units::move_unit;

/// An input from the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pick the card in hand slot 1..=6.
    SelectCard(usize),
    /// Click the tile at board coordinates.
    ClickTile { x: i32, y: i32 },
    EndTurn,
    /// Click outside the board and hand.
    ClickElsewhere,
    /// The front end finished animating a move.
    UnitStopped(UnitId),
}

impl InputEvent {
    #[must_use]
    pub fn click(x: i32, y: i32) -> Self {
        InputEvent::ClickTile { x, y }
    }
}

/// Drop all selection state and show the ready units again.
fn reset_selection(state: &mut GameState, out: &mut Presenter<'_>) {
    deselect_card(state, out);
    state.selection.clear();
    clear_highlights(state, out);
    highlight_ready_units(state, out);
}

fn select_unit_at(state: &mut GameState, out: &mut Presenter<'_>, tile: Position) {
    let Some(unit) = state
        .unit_at(tile)
        .filter(|u| u.owner == state.current_player && u.is_alive())
        .map(|u| u.id)
    else {
        return;
    };
    clear_highlights(state, out);
    state.selection.unit = Some(unit);
    show_unit_options(state, out, unit);
}

fn click_tile(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    cards: &CardRegistry,
    effects: &EffectRegistry,
    tile: Position,
) -> Result<(), PlayError> {
    if let Some(selected) = state.selection.card {
        let result = play_card(state, out, cards, effects, selected.index, tile).map(|_| ());
        reset_selection(state, out);
        return result;
    }

    if let Some(unit) = state.selection.unit {
        let result = if state.highlights.attackable.contains(&tile) {
            CombatResolver::attack(state, out, unit, tile).map(|_| ())
        } else if state.highlights.movable.contains(&tile) {
            move_unit(state, out, unit, tile)
        } else {
            // Anything else drops the selection; another friendly unit
            // becomes the new one.
            reset_selection(state, out);
            select_unit_at(state, out, tile);
            return Ok(());
        };
        reset_selection(state, out);
        return result;
    }

    select_unit_at(state, out, tile);
    Ok(())
}

/// Apply one input event.
pub(crate) fn apply(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    cards: &CardRegistry,
    effects: &EffectRegistry,
    event: InputEvent,
) -> Result<(), PlayError> {
    if let InputEvent::UnitStopped(unit) = event {
        if state.guards.acknowledge_move(unit) {
            trace!(unit = %unit, "move acknowledged");
        } else {
            trace!(unit = %unit, moving = ?state.guards.unit_moving, "stray move acknowledgement");
        }
        return Ok(());
    }
    if state.is_over() {
        return Err(PlayError::GameOver);
    }
    if state.guards.any() {
        return Err(PlayError::Busy);
    }
    if state.is_ai_turn() {
        return Err(PlayError::NotYourTurn(state.current_player));
    }

    match event {
        InputEvent::SelectCard(slot) => select_card(state, out, cards, effects, slot).map(|_| ()),
        InputEvent::ClickTile { x, y } => {
            let tile = Position::new(x, y).ok_or(PlayError::OffBoard { x, y })?;
            click_tile(state, out, cards, effects, tile)
        }
        InputEvent::EndTurn => {
            TurnController::end_turn(state, out);
            Ok(())
        }
        InputEvent::ClickElsewhere => {
            reset_selection(state, out);
            Ok(())
        }
        InputEvent::UnitStopped(_) => Ok(()),
    }
}
