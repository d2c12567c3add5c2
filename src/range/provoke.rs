//! Provoke detection.
//!
//! A unit standing next to an enemy Provoke-bearer is *provoked*. Whether
//! that restricts anything is controlled by `GameConfig::enforce_provoke`:
//! when off (the default), these predicates are informational only and the
//! range calculator ignores them.

use super::calculator::TileList;
use crate::core::{GameState, UnitId};
use crate::units::AbilityKind;

/// Tiles of enemy Provoke-bearers adjacent to `unit`.
#[must_use]
pub fn adjacent_provokers(state: &GameState, unit: UnitId) -> TileList {
    let Some(unit) = state.unit(unit) else {
        return TileList::new();
    };
    unit.position
        .neighbours()
        .filter(|&pos| {
            state.unit_at(pos).is_some_and(|other| {
                other.owner != unit.owner && other.is_alive() && other.has(AbilityKind::Provoke)
            })
        })
        .collect()
}

/// Whether `unit` is adjacent to an enemy with Provoke.
#[must_use]
pub fn is_provoked(state: &GameState, unit: UnitId) -> bool {
    !adjacent_provokers(state, unit).is_empty()
}
