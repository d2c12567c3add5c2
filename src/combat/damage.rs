//! Damage, healing, buffs and unit removal.
//!
//! Every health change in the game goes through here so that avatar
//! health stays mirrored on the player, the front end sees each change,
//! and removal always broadcasts Deathwatch before the unit leaves the
//! board.
//!
//! Damage is split in two steps so the combat state machine can observe
//! the death check as its own phase:
//!
//! 1. [`apply_damage`]: consult Artifacts, lower health (floored at 0),
//!    fire Zeal if an avatar was hurt.
//! 2. [`resolve_death`]: remove the unit if it has reached 0.
//!
//! [`strike`] runs both, for spells and abilities.

use tracing::{debug, info};

use crate::core::{GameResult, GameState, UnitId};
use crate::presentation::{Command, EffectAnimation, Pace, Presenter, UnitAnimation};
use crate::triggers::AbilityEngine;

/// What happened to a pending hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Zero damage, or the target was missing or already dying.
    Ignored,
    /// An Artifact absorbed it; health unchanged.
    Prevented,
    /// Health was lowered to `remaining`.
    Dealt { remaining: u32 },
}

impl DamageOutcome {
    #[must_use]
    pub fn was_dealt(self) -> bool {
        matches!(self, DamageOutcome::Dealt { .. })
    }
}

/// Lower `target`'s health by `amount`, unless an Artifact prevents it.
///
/// Does not remove the unit; see [`resolve_death`].
pub fn apply_damage(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    target: UnitId,
    amount: u32,
) -> DamageOutcome {
    if amount == 0 || !state.unit(target).is_some_and(|u| u.is_alive()) {
        return DamageOutcome::Ignored;
    }

    if AbilityEngine::consult_on_hurt(state, out, target, amount) {
        debug!(unit = %target, amount, "damage prevented");
        return DamageOutcome::Prevented;
    }

    let Some(unit) = state.unit_mut(target) else {
        return DamageOutcome::Ignored;
    };
    unit.health = unit.health.saturating_sub(amount);
    let remaining = unit.health;
    let avatar_of = unit.avatar_of;

    out.animate(target, UnitAnimation::Hit);
    out.emit(Command::SetUnitHealth {
        unit: target,
        health: remaining,
    });
    if let Some((player, health)) = state.sync_player_health(target) {
        out.player_health(player, health);
    }
    out.pause(Pace::Step);
    debug!(unit = %target, amount, remaining, "damage dealt");

    if let Some(player) = avatar_of {
        AbilityEngine::fire_avatar_damaged(state, out, player, amount);
    }

    DamageOutcome::Dealt { remaining }
}

/// Remove `target` if its health has reached 0. Returns whether it died.
pub fn resolve_death(state: &mut GameState, out: &mut Presenter<'_>, target: UnitId) -> bool {
    match state.unit(target) {
        Some(unit) if unit.health == 0 && !unit.dying => destroy_unit(state, out, target),
        _ => false,
    }
}

/// Remove a unit from play regardless of health.
///
/// Deathwatch is broadcast while the unit still occupies its tile; then it
/// is detached. A unit already being removed is left alone, so every unit
/// is destroyed exactly once.
pub fn destroy_unit(state: &mut GameState, out: &mut Presenter<'_>, target: UnitId) -> bool {
    let Some(unit) = state.unit_mut(target) else {
        return false;
    };
    if unit.dying {
        return false;
    }
    unit.dying = true;
    let (owner, at) = (unit.owner, unit.position);

    out.animate(target, UnitAnimation::Death);
    out.pause(Pace::Animation);

    AbilityEngine::broadcast_death(state, out, target, owner, at);

    let before = state.result;
    state.detach(target);
    out.emit(Command::DeleteUnit { unit: target });
    info!(unit = %target, owner = %owner, tile = %at, "unit destroyed");

    if state.result != before {
        match state.result {
            Some(GameResult::Winner(player)) => out.notify(format!("{player} wins!")),
            Some(GameResult::Draw) => out.notify("Draw!"),
            None => {}
        }
    }
    true
}

/// Damage then death check, for non-combat sources.
pub fn strike(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    target: UnitId,
    amount: u32,
) -> DamageOutcome {
    let outcome = apply_damage(state, out, target, amount);
    if outcome.was_dealt() {
        resolve_death(state, out, target);
    }
    outcome
}

/// Heal up to max health. Returns the amount restored.
pub fn heal_unit(state: &mut GameState, out: &mut Presenter<'_>, target: UnitId, amount: u32) -> u32 {
    let Some(unit) = state.unit_mut(target) else {
        return 0;
    };
    if !unit.is_alive() {
        return 0;
    }
    let healed = unit.heal(amount);
    if healed > 0 {
        let (health, at) = (unit.health, unit.position);
        out.effect(EffectAnimation::Buff, at);
        out.emit(Command::SetUnitHealth {
            unit: target,
            health,
        });
        if let Some((player, health)) = state.sync_player_health(target) {
            out.player_health(player, health);
        }
    }
    healed
}

/// Grant attack and health (health also raises max health).
pub fn buff_unit(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    target: UnitId,
    attack: u32,
    health: u32,
) -> bool {
    let Some(unit) = state.unit_mut(target) else {
        return false;
    };
    if !unit.is_alive() {
        return false;
    }
    unit.buff(attack, health);
    let at = unit.position;
    let snapshot = unit.clone();
    out.effect(EffectAnimation::Buff, at);
    out.unit_stats(&snapshot);
    if health > 0 {
        if let Some((player, health)) = state.sync_player_health(target) {
            out.player_health(player, health);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::core::{GameConfig, PlayerId};
    use crate::presentation::RecordingSink;
    use crate::units::{Ability, Artifact, Unit};

    fn pos(x: u8, y: u8) -> Position {
        Position::new_unchecked(x, y)
    }

    fn setup() -> (GameState, UnitId) {
        let mut state = GameState::new(GameConfig::default(), 3);
        let id = state.alloc_unit_id();
        state.spawn(Unit::new(id, "Target", "t", PlayerId::TWO, 1, 4), pos(5, 2));
        (state, id)
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let (mut state, id) = setup();
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        let outcome = apply_damage(&mut state, &mut out, id, 9);
        assert_eq!(outcome, DamageOutcome::Dealt { remaining: 0 });
        assert_eq!(state.unit(id).unwrap().health, 0);
        // Not removed until the death check.
        assert!(state.board.occupant(pos(5, 2)).is_some());

        assert!(resolve_death(&mut state, &mut out, id));
        assert!(state.unit(id).is_none());
        assert!(state.board.is_empty(pos(5, 2)));
    }

    #[test]
    fn test_zero_damage_is_ignored() {
        let (mut state, id) = setup();
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        assert_eq!(apply_damage(&mut state, &mut out, id, 0), DamageOutcome::Ignored);
        drop(out);
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_avatar_damage_mirrors_player_health() {
        let mut state = GameState::new(GameConfig::default(), 3);
        let avatar = state.avatars[PlayerId::TWO];
        let mut sink = RecordingSink::new();
        {
            let mut out = Presenter::instant(&mut sink);
            strike(&mut state, &mut out, avatar, 5);
        }

        assert_eq!(state.players[PlayerId::TWO].health, 15);
        assert!(sink.commands().contains(&Command::SetPlayerHealth {
            player: PlayerId::TWO,
            health: 15
        }));
    }

    #[test]
    fn test_artifact_prevents_and_wears_out() {
        let mut state = GameState::new(GameConfig::default(), 3);
        let avatar = state.avatars[PlayerId::ONE];
        state.unit_mut(avatar).unwrap().abilities.push(Ability::Artifact(Artifact {
            name: "Shield".into(),
            robustness: 2,
            on_hit: None,
        }));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        assert_eq!(apply_damage(&mut state, &mut out, avatar, 3), DamageOutcome::Prevented);
        assert_eq!(apply_damage(&mut state, &mut out, avatar, 3), DamageOutcome::Prevented);
        assert!(state.unit(avatar).unwrap().artifact().is_none());
        assert_eq!(
            apply_damage(&mut state, &mut out, avatar, 3),
            DamageOutcome::Dealt { remaining: 17 }
        );
    }

    #[test]
    fn test_destroy_only_once() {
        let (mut state, id) = setup();
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        assert!(destroy_unit(&mut state, &mut out, id));
        assert!(!destroy_unit(&mut state, &mut out, id));
        drop(out);
        assert_eq!(sink.count(|c| matches!(c, Command::DeleteUnit { .. })), 1);
    }

    #[test]
    fn test_killing_avatar_decides_game() {
        let mut state = GameState::new(GameConfig::default(), 3);
        let avatar = state.avatars[PlayerId::TWO];
        let mut sink = RecordingSink::new();
        {
            let mut out = Presenter::instant(&mut sink);
            strike(&mut state, &mut out, avatar, 20);
        }

        assert_eq!(state.result, Some(GameResult::Winner(PlayerId::ONE)));
        assert_eq!(state.players[PlayerId::TWO].health, 0);
        assert_eq!(sink.notifications(), vec!["Player 1 wins!"]);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let (mut state, id) = setup();
        state.unit_mut(id).unwrap().health = 1;
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        assert_eq!(heal_unit(&mut state, &mut out, id, 10), 3);
        assert_eq!(state.unit(id).unwrap().health, 4);
    }

    #[test]
    fn test_buff_raises_max_health() {
        let (mut state, id) = setup();
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        assert!(buff_unit(&mut state, &mut out, id, 1, 1));
        let unit = state.unit(id).unwrap();
        assert_eq!((unit.attack, unit.health, unit.max_health), (2, 5, 5));
    }
}
