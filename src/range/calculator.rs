//! Legal tile sets for summoning, moving and attacking.
//!
//! Every function here is a pure read of `GameState`. Results list tiles
//! in discovery order (neighbour order, then board order) without
//! duplicates, so callers that pick "the first" get a stable answer.

use smallvec::SmallVec;

use super::provoke::{adjacent_provokers, is_provoked};
use crate::board::Position;
use crate::core::{GameState, PlayerId, UnitId};
use crate::units::{AbilityKind, Unit};

/// A set of tiles. Twelve covers a ground unit's full neighbourhood.
pub type TileList = SmallVec<[Position; 12]>;

fn push_unique(tiles: &mut TileList, pos: Position) {
    if !tiles.contains(&pos) {
        tiles.push(pos);
    }
}

/// Empty tiles touching any unit `player` owns, avatar included.
#[must_use]
pub fn summonable_tiles(state: &GameState, player: PlayerId) -> TileList {
    let mut tiles = TileList::new();
    for unit in state.units_of(player).filter(|u| u.is_alive()) {
        for pos in unit.position.neighbours() {
            if state.board.is_empty(pos) {
                push_unique(&mut tiles, pos);
            }
        }
    }
    tiles
}

/// Every empty tile on the board.
#[must_use]
pub fn empty_tiles(state: &GameState) -> TileList {
    state.board.empty_positions().collect()
}

/// Tiles the unit may move to this turn.
///
/// Ground units reach the eight neighbours plus the four orthogonal
/// two-step jumps; Flying reaches every empty tile. Units that do not
/// belong to the player whose turn it is get nothing.
#[must_use]
pub fn movable_tiles(state: &GameState, unit: UnitId) -> TileList {
    let Some(unit) = state.unit(unit) else {
        return TileList::new();
    };
    if unit.owner != state.current_player {
        return TileList::new();
    }
    if state.config.enforce_provoke && is_provoked(state, unit.id) {
        return TileList::new();
    }
    if unit.has(AbilityKind::Flying) {
        return empty_tiles(state);
    }
    unit.position
        .neighbours()
        .chain(unit.position.jumps())
        .filter(|&pos| state.board.is_empty(pos))
        .collect()
}

fn is_enemy_target(state: &GameState, unit: &Unit, pos: Position) -> bool {
    state
        .unit_at(pos)
        .is_some_and(|other| other.owner != unit.owner && other.is_alive())
}

/// Neighbouring tiles holding an enemy unit.
#[must_use]
pub fn attackable_tiles(state: &GameState, unit: UnitId) -> TileList {
    let Some(unit) = state.unit(unit) else {
        return TileList::new();
    };
    if state.config.enforce_provoke {
        let provokers = adjacent_provokers(state, unit.id);
        if !provokers.is_empty() {
            return provokers;
        }
    }
    unit.position
        .neighbours()
        .filter(|&pos| is_enemy_target(state, unit, pos))
        .collect()
}

/// Awake, with move budget, and not pinned by Provoke.
#[must_use]
pub fn can_move(state: &GameState, unit: UnitId) -> bool {
    let Some(u) = state.unit(unit) else {
        return false;
    };
    u.is_alive() && u.can_move() && !(state.config.enforce_provoke && is_provoked(state, unit))
}

/// Awake, with attack budget, and an enemy in range.
#[must_use]
pub fn can_attack(state: &GameState, unit: UnitId) -> bool {
    state
        .unit(unit)
        .is_some_and(|u| u.is_alive() && u.has_attack_budget())
        && !attackable_tiles(state, unit).is_empty()
}

/// Units of `player` that can still move or attack, in summon order.
#[must_use]
pub fn ready_units(state: &GameState, player: PlayerId) -> Vec<UnitId> {
    state
        .units_of(player)
        .map(|u| u.id)
        .filter(|&id| can_move(state, id) || can_attack(state, id))
        .collect()
}
