//! Putting new units on the board.

use tracing::debug;

use crate::board::Position;
use crate::cards::{CardDefinition, CardKind, TokenSpec};
use crate::core::{GameState, PlayError, PlayerId, UnitId};
use crate::presentation::{EffectAnimation, Presenter};
use crate::triggers::AbilityEngine;
use crate::units::{Ability, AbilityKind, Unit};

/// Summon a token on `at`. Returns `None` if the tile is taken.
pub fn summon_token(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    token: &TokenSpec,
    owner: PlayerId,
    at: Position,
) -> Option<UnitId> {
    if !state.board.is_empty(at) {
        return None;
    }
    let id = state.alloc_unit_id();
    let unit = Unit::new(id, token.name, token.template, owner, token.attack, token.health);
    state.spawn(unit, at)?;

    out.effect(EffectAnimation::Summon, at);
    if let Some(unit) = state.unit(id) {
        out.draw_unit(unit);
    }
    debug!(unit = %id, owner = %owner, tile = %at, token = token.name, "token summoned");
    Some(id)
}

/// Summon a token on a random empty tile next to `center`.
pub fn summon_token_near(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    token: &TokenSpec,
    owner: PlayerId,
    center: Position,
) -> Option<UnitId> {
    let open: Vec<Position> = center.neighbours().filter(|&p| state.board.is_empty(p)).collect();
    let at = *state.rng.choose(&open)?;
    summon_token(state, out, token, owner, at)
}

/// Summon a creature card's unit and run its summon protocol.
///
/// 1. Place the unit (asleep).
/// 2. Attach `abilities` in order; Rush wakes it.
/// 3. Fire its Opening Gambits.
pub fn summon_creature(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    card: &CardDefinition,
    owner: PlayerId,
    at: Position,
    abilities: &[Ability],
) -> Result<UnitId, PlayError> {
    let CardKind::Creature {
        template,
        attack,
        health,
    } = &card.kind
    else {
        return Err(PlayError::InvalidTarget("not a creature card"));
    };
    if !state.board.is_empty(at) {
        return Err(PlayError::IllegalTile(at));
    }

    let id = state.alloc_unit_id();
    let mut unit = Unit::new(id, card.name.clone(), template.clone(), owner, *attack, *health);
    unit.abilities.extend(abilities.iter().cloned());
    if unit.has(AbilityKind::Rush) {
        unit.reset_turn_status();
    }
    state.spawn(unit, at).ok_or(PlayError::IllegalTile(at))?;

    out.effect(EffectAnimation::Summon, at);
    if let Some(unit) = state.unit(id) {
        out.draw_unit(unit);
    }
    debug!(unit = %id, card = %card.name, owner = %owner, tile = %at, "creature summoned");

    AbilityEngine::fire_on_summon(state, out, id);
    Ok(id)
}
