//! Hand management and card play.

use tracing::debug;

use super::highlight::{clear_highlights, show_summon_tiles};
use crate::board::Position;
use crate::cards::{CardKind, CardRegistry};
use crate::core::{DrawOutcome, GameAction, GameState, PlayError, PlayerId, SelectedCard};
use crate::effects::{CardEffect, EffectRegistry, EffectResolver};
use crate::presentation::{Command, Presenter};

/// Draw one card for `player`, notifying when nothing happens.
///
/// Skipped draws notify for either seat, the AI included.
pub fn draw_card(state: &mut GameState, out: &mut Presenter<'_>, player: PlayerId) -> DrawOutcome {
    let outcome = state.draw_card(player);
    match outcome {
        DrawOutcome::Drawn(card) => {
            let slot = state.hand(player).len();
            out.emit(Command::DrawCard {
                player,
                slot,
                card,
                highlighted: false,
            });
        }
        DrawOutcome::HandFull => {
            out.notify(format!("Hand is full ({} cards)", state.config.hand_limit));
        }
        DrawOutcome::DeckEmpty => out.notify("Deck is empty, cannot draw more cards!"),
    }
    debug!(player = %player, ?outcome, "draw");
    outcome
}

/// Redraw hand slots from `first` (0-based) onwards after a removal.
fn redraw_from(state: &GameState, out: &mut Presenter<'_>, player: PlayerId, first: usize, old_len: usize) {
    for slot in first + 1..=old_len {
        out.emit(Command::DeleteCard { player, slot });
    }
    for (index, &card) in state.hand(player).iter().enumerate().skip(first) {
        out.emit(Command::DrawCard {
            player,
            slot: index + 1,
            card,
            highlighted: false,
        });
    }
}

/// Drop the card selection and its highlight.
pub fn deselect_card(state: &mut GameState, out: &mut Presenter<'_>) {
    if let Some(selected) = state.selection.card.take() {
        let player = state.current_player;
        if state.hand(player).get(selected.index) == Some(&selected.card) {
            out.emit(Command::DrawCard {
                player,
                slot: selected.index + 1,
                card: selected.card,
                highlighted: false,
            });
        }
    }
}

/// Select the card in hand slot `slot` (1-based) for the current player.
///
/// Creature cards light up their summon tiles. Selecting a card drops
/// any unit selection.
pub fn select_card(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    cards: &CardRegistry,
    effects: &EffectRegistry,
    slot: usize,
) -> Result<SelectedCard, PlayError> {
    let player = state.current_player;
    let index = slot.checked_sub(1).ok_or(PlayError::EmptySlot(slot))?;
    let card = *state.hand(player).get(index).ok_or(PlayError::EmptySlot(slot))?;
    let definition = cards.get(card).ok_or(PlayError::UnknownCard(card))?;

    deselect_card(state, out);
    state.selection.unit = None;
    clear_highlights(state, out);

    let selected = SelectedCard { index, card };
    state.selection.card = Some(selected);
    out.emit(Command::DrawCard {
        player,
        slot,
        card,
        highlighted: true,
    });

    if definition.is_creature() {
        let tiles = EffectResolver::summon_tiles(state, effects.get(&definition.name), player);
        show_summon_tiles(state, out, &tiles);
    }
    debug!(player = %player, slot, card = %definition.name, "card selected");
    Ok(selected)
}

/// Play the card at hand `index` (0-based) on `at`.
///
/// Order: mana, effect lookup, target validation and effect, then payment
/// and hand removal. Any error leaves mana, hand and board as they were.
pub fn play_card(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    cards: &CardRegistry,
    effects: &EffectRegistry,
    index: usize,
    at: Position,
) -> Result<GameAction, PlayError> {
    if state.is_over() {
        return Err(PlayError::GameOver);
    }
    let player = state.current_player;
    let card_id = *state.hand(player).get(index).ok_or(PlayError::EmptySlot(index + 1))?;
    let card = cards.get(card_id).ok_or(PlayError::UnknownCard(card_id))?;

    let have = state.players[player].mana;
    if have < card.mana_cost {
        return Err(PlayError::InsufficientMana {
            have,
            need: card.mana_cost,
        });
    }
    let effect = effects
        .get(&card.name)
        .ok_or_else(|| PlayError::EffectNotImplemented(card.name.clone()))?;

    let action = match (&card.kind, effect) {
        (CardKind::Creature { .. }, CardEffect::Creature { .. }) => {
            let unit = EffectResolver::play_creature(state, out, card, effect, at)?;
            GameAction::Summon {
                card: card_id,
                unit,
                at,
            }
        }
        (CardKind::Spell, CardEffect::Spell(spell)) => {
            EffectResolver::cast_spell(state, out, spell, at)?;
            GameAction::Cast { card: card_id, at }
        }
        _ => return Err(PlayError::EffectNotImplemented(card.name.clone())),
    };

    let seat = &mut state.players[player];
    seat.mana -= card.mana_cost;
    let mana = seat.mana;
    let old_len = seat.hand.len();
    seat.hand.remove(index);
    out.player_mana(player, mana);
    redraw_from(state, out, player, index, old_len);

    if state.selection.card.is_some_and(|s| s.index == index) {
        state.selection.card = None;
    }
    state.record(action.clone());
    debug!(player = %player, card = %card.name, tile = %at, mana, "card played");
    Ok(action)
}
