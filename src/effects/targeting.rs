//! Spell targeting.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::{GameState, PlayError, PlayerId, UnitId};

/// What the clicked tile must hold for a spell to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRule {
    /// Any living enemy unit, avatar included.
    EnemyUnit,
    /// A living enemy unit that is not an avatar.
    EnemyMinion,
    /// The tile is only the trigger; the spell picks its own targets.
    AnyTile,
}

impl TargetRule {
    /// Check `at` against this rule for `caster`.
    ///
    /// Returns the targeted unit, if the rule names one.
    pub fn validate(self, state: &GameState, caster: PlayerId, at: Position) -> Result<Option<UnitId>, PlayError> {
        if self == TargetRule::AnyTile {
            return Ok(None);
        }
        let unit = state
            .unit_at(at)
            .filter(|u| u.is_alive())
            .ok_or(PlayError::InvalidTarget("choose an enemy unit"))?;
        if unit.owner == caster {
            return Err(PlayError::InvalidTarget("choose an enemy unit"));
        }
        if self == TargetRule::EnemyMinion && unit.is_avatar() {
            return Err(PlayError::InvalidTarget("avatars cannot be chosen"));
        }
        Ok(Some(unit.id))
    }
}
