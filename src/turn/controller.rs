//! End of turn and the hand-over to the next player.

use tracing::info;

use super::hand::{deselect_card, draw_card};
use super::highlight::{clear_highlights, highlight_ready_units};
use crate::ai::AiController;
use crate::core::{GameAction, GameState, PlayerId, UnitId};
use crate::presentation::Presenter;

pub struct TurnController;

impl TurnController {
    /// End the current player's turn.
    ///
    /// If the next player is the AI, its whole turn runs before this
    /// returns and control comes back to the human.
    pub fn end_turn(state: &mut GameState, out: &mut Presenter<'_>) {
        if state.is_over() {
            return;
        }
        Self::switch_turn(state, out);

        if state.is_ai_turn() && !state.is_over() {
            AiController::take_turn(state, out);
            if !state.is_over() {
                Self::switch_turn(state, out);
            }
        }
    }

    /// Hand the turn to the opponent.
    ///
    /// 1. Clear the selection and highlights.
    /// 2. Swap players; the turn counter advances when player 1 is next.
    /// 3. Reset every unit's budget.
    /// 4. Set mana to `turn + 1` and draw a card.
    /// 5. Light up ready units for a human player.
    pub fn switch_turn(state: &mut GameState, out: &mut Presenter<'_>) {
        state.record(GameAction::EndTurn);

        deselect_card(state, out);
        state.selection.clear();
        clear_highlights(state, out);

        let next = state.current_player.opponent();
        state.current_player = next;
        if next == PlayerId::ONE {
            state.turn += 1;
        }
        state.start_turn_sequence();

        let live: Vec<UnitId> = state.live_units().iter().copied().collect();
        for id in live {
            if let Some(unit) = state.unit_mut(id) {
                unit.reset_turn_status();
            }
        }

        let mana = state.turn + 1;
        state.players[next].mana = mana;
        out.player_mana(next, mana);
        draw_card(state, out, next);

        highlight_ready_units(state, out);
        info!(turn = state.turn, player = %next, mana, "turn started");
    }
}
