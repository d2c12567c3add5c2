//! Ability engine: finds the abilities that answer a trigger and runs them.
//!
//! ## Dispatch rules
//!
//! - `OnSummon`: only the summoned unit's own abilities.
//! - `OnUnitDeath`: every unit alive when the death began, except the dying
//!   unit. The recipient list is fixed before the first callback runs;
//!   units summoned by a callback are not added, and a recipient killed by
//!   an earlier callback still gets its turn, acting from where it stood.
//! - `OnHit`: only the attacker.
//! - `OnHurt`: only the unit about to be damaged. The first Artifact that
//!   applies cancels the damage.
//! - `OnAvatarDamaged`: units owned by the damaged avatar's player.
//!
//! Within a unit, abilities fire in attachment order; across units, in
//! live-list order. There is no priority stack.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::event::{TriggerEvent, TriggerKind};
use crate::board::Position;
use crate::cards::WRAITHLING;
use crate::combat::{buff_unit, destroy_unit, heal_unit, strike};
use crate::core::{GameState, PlayerId, UnitId};
use crate::effects::summon::{summon_token, summon_token_near};
use crate::presentation::{Command, EffectAnimation, Presenter, UnitAnimation};
use crate::units::{Ability, AbilityList, DeathwatchEffect, GambitEffect, HitEffect, Unit};

/// Where a recipient is and who controls it, captured at dispatch time.
#[derive(Clone, Copy, Debug)]
struct Holder {
    id: UnitId,
    owner: PlayerId,
    position: Position,
}

impl Holder {
    fn of(unit: &Unit) -> Self {
        Self {
            id: unit.id,
            owner: unit.owner,
            position: unit.position,
        }
    }
}

/// Stateless dispatcher for unit abilities.
pub struct AbilityEngine;

impl AbilityEngine {
    /// Ready abilities of `unit` (on the board or fallen) that answer `kind`.
    fn ready_abilities(state: &GameState, unit: UnitId, kind: TriggerKind) -> Option<(Holder, AbilityList)> {
        let unit = state.unit(unit).or_else(|| state.fallen(unit))?;
        let abilities: AbilityList = unit
            .abilities_for(kind)
            .filter(|a| a.can_activate())
            .cloned()
            .collect();
        Some((Holder::of(unit), abilities))
    }

    /// Fire Opening Gambits on a freshly summoned unit.
    pub fn fire_on_summon(state: &mut GameState, out: &mut Presenter<'_>, unit: UnitId) {
        let event = TriggerEvent::Summoned { unit };
        let Some((holder, abilities)) = Self::ready_abilities(state, unit, event.kind()) else {
            return;
        };
        for ability in &abilities {
            Self::execute(state, out, holder, ability, &event);
        }
    }

    /// Broadcast a death to every other unit alive when it began.
    pub fn broadcast_death(
        state: &mut GameState,
        out: &mut Presenter<'_>,
        dead: UnitId,
        owner: PlayerId,
        at: Position,
    ) {
        let event = TriggerEvent::UnitDied {
            unit: dead,
            owner,
            at,
        };
        let recipients: SmallVec<[UnitId; 16]> = state
            .live_units()
            .iter()
            .copied()
            .filter(|&id| id != dead && state.unit(id).is_some_and(|u| u.is_alive()))
            .collect();

        trace!(unit = %dead, recipients = recipients.len(), "deathwatch broadcast");
        for id in recipients {
            let Some((holder, abilities)) = Self::ready_abilities(state, id, event.kind()) else {
                continue;
            };
            for ability in &abilities {
                Self::execute(state, out, holder, ability, &event);
            }
        }
    }

    /// Fire the attacker's On-Hit abilities.
    pub fn fire_on_hit(state: &mut GameState, out: &mut Presenter<'_>, attacker: UnitId, defender: UnitId) {
        let event = TriggerEvent::Hit { attacker, defender };
        let Some((holder, abilities)) = Self::ready_abilities(state, attacker, event.kind()) else {
            return;
        };
        for ability in &abilities {
            Self::execute(state, out, holder, ability, &event);
        }
    }

    /// Ask the target's Artifacts whether they absorb `amount` damage.
    ///
    /// Returns `true` when one applied; the caller must then leave health
    /// untouched.
    pub fn consult_on_hurt(state: &mut GameState, out: &mut Presenter<'_>, target: UnitId, amount: u32) -> bool {
        let Some(unit) = state.unit_mut(target) else {
            return false;
        };
        let at = unit.position;
        let Some(artifact) = unit.artifact_mut().filter(|a| a.robustness > 0) else {
            return false;
        };

        artifact.robustness -= 1;
        let name = artifact.name.clone();
        let broken = artifact.robustness == 0;
        if broken {
            unit.discard_broken_artifacts();
        }

        debug!(unit = %target, amount, artifact = %name, broken, "artifact absorbed damage");
        out.effect(EffectAnimation::Buff, at);
        if broken {
            out.notify(format!("{name} shatters"));
        } else {
            out.notify(format!("{name} absorbs the blow"));
        }
        true
    }

    /// Zeal: the damaged avatar's allies grow stronger.
    pub fn fire_avatar_damaged(state: &mut GameState, out: &mut Presenter<'_>, player: PlayerId, amount: u32) {
        let event = TriggerEvent::AvatarDamaged { player, amount };
        let recipients: SmallVec<[UnitId; 16]> = state
            .units_of(player)
            .filter(|u| u.is_alive())
            .map(|u| u.id)
            .collect();
        for id in recipients {
            let Some((holder, abilities)) = Self::ready_abilities(state, id, event.kind()) else {
                continue;
            };
            for ability in &abilities {
                Self::execute(state, out, holder, ability, &event);
            }
        }
    }

    /// Run one ability. Passive abilities do nothing here; range and
    /// combat code read them directly.
    fn execute(
        state: &mut GameState,
        out: &mut Presenter<'_>,
        holder: Holder,
        ability: &Ability,
        event: &TriggerEvent,
    ) {
        trace!(unit = %holder.id, ability = ?ability.kind(), trigger = ?event.kind(), "ability fired");
        match ability {
            Ability::OpeningGambit(effect) => Self::run_gambit(state, out, holder, effect),
            Ability::Deathwatch(effect) => Self::run_deathwatch(state, out, holder, effect),
            Ability::OnHit(effect) => Self::run_hit(state, out, holder, effect),
            Ability::Artifact(artifact) => {
                if let (Some(effect), TriggerEvent::Hit { .. }) = (&artifact.on_hit, event) {
                    Self::run_hit(state, out, holder, effect);
                }
            }
            Ability::Zeal { attack } => {
                buff_unit(state, out, holder.id, *attack, 0);
            }
            Ability::Provoke | Ability::Rush | Ability::Flying | Ability::Airdrop => {}
        }
    }

    fn run_gambit(state: &mut GameState, out: &mut Presenter<'_>, holder: Holder, effect: &GambitEffect) {
        match effect {
            GambitEffect::SummonWraithlingBehind => {
                let behind = if holder.owner == PlayerId::ONE { -1 } else { 1 };
                if let Some(tile) = holder.position.offset(behind, 0) {
                    if state.board.is_empty(tile) {
                        summon_token(state, out, &WRAITHLING, holder.owner, tile);
                    }
                }
            }
            GambitEffect::DestroyDamagedAdjacentEnemy => {
                let victim = holder.position.neighbours().find_map(|pos| {
                    state
                        .unit_at(pos)
                        .filter(|u| u.owner != holder.owner && !u.is_avatar() && u.is_alive() && u.is_damaged())
                        .map(|u| u.id)
                });
                if let Some(victim) = victim {
                    out.animate(holder.id, UnitAnimation::Channel);
                    destroy_unit(state, out, victim);
                }
            }
            GambitEffect::BuffAlliesInLine { attack, health } => {
                let allies: SmallVec<[UnitId; 2]> = [-1, 1]
                    .into_iter()
                    .filter_map(|dx| holder.position.offset(dx, 0))
                    .filter_map(|pos| state.unit_at(pos))
                    .filter(|u| u.owner == holder.owner && u.is_alive())
                    .map(|u| u.id)
                    .collect();
                for ally in allies {
                    buff_unit(state, out, ally, *attack, *health);
                }
            }
        }
    }

    fn run_deathwatch(state: &mut GameState, out: &mut Presenter<'_>, holder: Holder, effect: &DeathwatchEffect) {
        match effect {
            DeathwatchEffect::GainAttack(attack) => {
                buff_unit(state, out, holder.id, *attack, 0);
            }
            DeathwatchEffect::GainStats { attack, health } => {
                buff_unit(state, out, holder.id, *attack, *health);
            }
            DeathwatchEffect::SummonWraithlingAdjacent => {
                summon_token_near(state, out, &WRAITHLING, holder.owner, holder.position);
            }
            DeathwatchEffect::DrainEnemyAvatar { damage, heal } => {
                let enemy = state.avatars[holder.owner.opponent()];
                let own = state.avatars[holder.owner];
                if let Some(at) = state.unit(enemy).map(|u| u.position) {
                    out.effect(EffectAnimation::Martyrdom, at);
                }
                strike(state, out, enemy, *damage);
                heal_unit(state, out, own, *heal);
            }
        }
    }

    fn run_hit(state: &mut GameState, out: &mut Presenter<'_>, holder: Holder, effect: &HitEffect) {
        match effect {
            HitEffect::SummonWraithlingAdjacent => {
                let position = state.unit(holder.id).map_or(holder.position, |u| u.position);
                if summon_token_near(state, out, &WRAITHLING, holder.owner, position).is_none() {
                    out.emit(Command::PlayUnitAnimation {
                        unit: holder.id,
                        animation: UnitAnimation::Idle,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::presentation::RecordingSink;
    use crate::units::Artifact;

    fn pos(x: u8, y: u8) -> Position {
        Position::new_unchecked(x, y)
    }

    fn spawn(state: &mut GameState, owner: PlayerId, at: Position, attack: u32, health: u32, ability: Option<Ability>) -> UnitId {
        let id = state.alloc_unit_id();
        let mut unit = Unit::new(id, "U", "u", owner, attack, health);
        if let Some(ability) = ability {
            unit = unit.with_ability(ability);
        }
        state.spawn(unit, at).unwrap()
    }

    #[test]
    fn test_deathwatch_skips_the_dying_unit() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let watcher = spawn(&mut state, PlayerId::ONE, pos(3, 0), 2, 2, Some(Ability::Deathwatch(DeathwatchEffect::GainAttack(1))));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        destroy_unit(&mut state, &mut out, watcher);
        assert_eq!(state.fallen(watcher).unwrap().attack, 2);
    }

    #[test]
    fn test_gambit_fires_once_for_summoned_unit() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let chaser = spawn(&mut state, PlayerId::ONE, pos(3, 2), 3, 1, Some(Ability::OpeningGambit(GambitEffect::SummonWraithlingBehind)));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        AbilityEngine::fire_on_summon(&mut state, &mut out, chaser);

        let token = state.unit_at(pos(2, 2)).unwrap();
        assert_eq!(token.name, "Wraithling");
        assert_eq!(token.owner, PlayerId::ONE);
        assert_eq!(state.unit_count(), 4);
    }

    #[test]
    fn test_gambit_behind_depends_on_owner() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let chaser = spawn(&mut state, PlayerId::TWO, pos(5, 2), 3, 1, Some(Ability::OpeningGambit(GambitEffect::SummonWraithlingBehind)));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        AbilityEngine::fire_on_summon(&mut state, &mut out, chaser);
        assert_eq!(state.unit_at(pos(6, 2)).unwrap().owner, PlayerId::TWO);
    }

    #[test]
    fn test_gambit_blocked_tile_does_nothing() {
        let mut state = GameState::new(GameConfig::default(), 9);
        // Player 1's avatar stands directly behind.
        let chaser = spawn(&mut state, PlayerId::ONE, pos(2, 2), 3, 1, Some(Ability::OpeningGambit(GambitEffect::SummonWraithlingBehind)));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        AbilityEngine::fire_on_summon(&mut state, &mut out, chaser);
        assert_eq!(state.unit_count(), 3);
    }

    #[test]
    fn test_nightsorrow_needs_a_damaged_target() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let healthy = spawn(&mut state, PlayerId::TWO, pos(4, 2), 1, 3, None);
        let hurt = spawn(&mut state, PlayerId::TWO, pos(4, 3), 1, 3, None);
        state.unit_mut(hurt).unwrap().health = 2;
        let assassin = spawn(&mut state, PlayerId::ONE, pos(3, 2), 4, 2, Some(Ability::OpeningGambit(GambitEffect::DestroyDamagedAdjacentEnemy)));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        AbilityEngine::fire_on_summon(&mut state, &mut out, assassin);

        assert!(state.unit(healthy).is_some());
        assert!(state.unit(hurt).is_none());
    }

    #[test]
    fn test_squire_buffs_front_and_behind_allies_only() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let left = spawn(&mut state, PlayerId::TWO, pos(4, 1), 1, 1, None);
        let right = spawn(&mut state, PlayerId::TWO, pos(6, 1), 1, 1, None);
        let enemy = spawn(&mut state, PlayerId::ONE, pos(5, 0), 1, 1, None);
        let squire = spawn(&mut state, PlayerId::TWO, pos(5, 1), 1, 1, Some(Ability::OpeningGambit(GambitEffect::BuffAlliesInLine { attack: 1, health: 1 })));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        AbilityEngine::fire_on_summon(&mut state, &mut out, squire);

        assert_eq!(state.unit(left).unwrap().attack, 2);
        assert_eq!(state.unit(right).unwrap().health, 2);
        assert_eq!(state.unit(enemy).unwrap().attack, 1);
        assert_eq!(state.unit(squire).unwrap().attack, 1);
    }

    #[test]
    fn test_shadowdancer_drain() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let own = state.avatars[PlayerId::ONE];
        state.unit_mut(own).unwrap().health = 18;
        state.sync_player_health(own);
        spawn(&mut state, PlayerId::ONE, pos(3, 3), 5, 4, Some(Ability::Deathwatch(DeathwatchEffect::DrainEnemyAvatar { damage: 1, heal: 1 })));
        let victim = spawn(&mut state, PlayerId::TWO, pos(6, 0), 1, 1, None);
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        destroy_unit(&mut state, &mut out, victim);

        assert_eq!(state.players[PlayerId::TWO].health, 19);
        assert_eq!(state.players[PlayerId::ONE].health, 19);
    }

    #[test]
    fn test_zeal_on_avatar_damage() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let knight = spawn(&mut state, PlayerId::TWO, pos(6, 3), 1, 5, Some(Ability::Zeal { attack: 2 }));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        let (own, enemy) = (state.avatars[PlayerId::TWO], state.avatars[PlayerId::ONE]);
        strike(&mut state, &mut out, own, 1);
        assert_eq!(state.unit(knight).unwrap().attack, 3);

        strike(&mut state, &mut out, enemy, 1);
        assert_eq!(state.unit(knight).unwrap().attack, 3);
    }

    #[test]
    fn test_artifact_on_hit_summons_next_to_attacker() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let avatar = state.avatars[PlayerId::ONE];
        state.unit_mut(avatar).unwrap().abilities.push(Ability::Artifact(Artifact {
            name: "Horn of the Forsaken".into(),
            robustness: 3,
            on_hit: Some(HitEffect::SummonWraithlingAdjacent),
        }));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        let defender = state.avatars[PlayerId::TWO];
        AbilityEngine::fire_on_hit(&mut state, &mut out, avatar, defender);

        let tokens: Vec<_> = state.units().filter(|u| u.name == "Wraithling").collect();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].position.is_adjacent(pos(1, 2)));
    }
}
