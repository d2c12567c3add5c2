//! One attack exchange, as a state machine.
//!
//! ```text
//! Idle -> DamageToDefender -> DefenderDeathCheck
//!      -> CounterDamageToAttacker -> AttackerDeathCheck -> Cleanup -> Idle
//! ```
//!
//! - The counter only happens if both units are still alive after the
//!   first half.
//! - If an Artifact prevents a half, that half's death check (and, for
//!   the first half, the attacker's On-Hit) is skipped.
//! - Attacking spends the attacker's remaining movement.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::damage::{apply_damage, resolve_death, DamageOutcome};
use crate::board::Position;
use crate::core::{GameAction, GameState, PlayError, UnitId};
use crate::presentation::{Pace, Presenter, UnitAnimation};
use crate::range;
use crate::triggers::AbilityEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombatPhase {
    Idle,
    DamageToDefender,
    DefenderDeathCheck,
    CounterDamageToAttacker,
    AttackerDeathCheck,
    Cleanup,
}

/// What one exchange did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatReport {
    pub attacker: UnitId,
    pub defender: UnitId,
    /// Phases visited, in order, ending back at `Idle`.
    pub phases: SmallVec<[CombatPhase; 8]>,
    pub strike: DamageOutcome,
    /// `None` when the counter never happened.
    pub counter: Option<DamageOutcome>,
    pub defender_died: bool,
    pub attacker_died: bool,
}

impl CombatReport {
    fn new(attacker: UnitId, defender: UnitId) -> Self {
        Self {
            attacker,
            defender,
            phases: SmallVec::new(),
            strike: DamageOutcome::Ignored,
            counter: None,
            defender_died: false,
            attacker_died: false,
        }
    }
}

fn alive(state: &GameState, id: UnitId) -> bool {
    state.unit(id).is_some_and(|u| u.is_alive())
}

fn attack_of(state: &GameState, id: UnitId) -> u32 {
    state.unit(id).map_or(0, |u| u.attack)
}

pub struct CombatResolver;

impl CombatResolver {
    /// Attack the unit on `target` after checking legality, then record it.
    pub fn attack(
        state: &mut GameState,
        out: &mut Presenter<'_>,
        attacker: UnitId,
        target: Position,
    ) -> Result<CombatReport, PlayError> {
        match state.unit(attacker) {
            Some(u) if u.owner != state.current_player => {
                return Err(PlayError::NotYourTurn(u.owner))
            }
            Some(_) => {}
            None => return Err(PlayError::InvalidTarget("no such unit")),
        }
        let defender = state.board.occupant(target).ok_or(PlayError::NoUnit(target))?;
        if !range::can_attack(state, attacker) || !range::attackable_tiles(state, attacker).contains(&target) {
            return Err(PlayError::IllegalTile(target));
        }

        let report = Self::resolve(state, out, attacker, defender);
        state.record(GameAction::Attack { attacker, defender });
        Ok(report)
    }

    /// Run the exchange without legality checks.
    ///
    /// Holds the `unit_acting` guard until it returns.
    pub fn resolve(
        state: &mut GameState,
        out: &mut Presenter<'_>,
        attacker: UnitId,
        defender: UnitId,
    ) -> CombatReport {
        state.guards.unit_acting = true;
        let mut report = CombatReport::new(attacker, defender);
        let mut phase = CombatPhase::Idle;

        loop {
            report.phases.push(phase);
            trace!(?phase, attacker = %attacker, defender = %defender, "combat phase");
            phase = match phase {
                CombatPhase::Idle => {
                    if let Some(unit) = state.unit_mut(attacker) {
                        unit.attacks += 1;
                        unit.exhaust_moves();
                    }
                    out.animate(attacker, UnitAnimation::Attack);
                    out.pause(Pace::Animation);
                    CombatPhase::DamageToDefender
                }
                CombatPhase::DamageToDefender => {
                    let amount = attack_of(state, attacker);
                    report.strike = apply_damage(state, out, defender, amount);
                    if report.strike.was_dealt() {
                        CombatPhase::DefenderDeathCheck
                    } else {
                        CombatPhase::CounterDamageToAttacker
                    }
                }
                CombatPhase::DefenderDeathCheck => {
                    report.defender_died = resolve_death(state, out, defender);
                    if alive(state, attacker) {
                        AbilityEngine::fire_on_hit(state, out, attacker, defender);
                    }
                    CombatPhase::CounterDamageToAttacker
                }
                CombatPhase::CounterDamageToAttacker => {
                    if alive(state, attacker) && alive(state, defender) {
                        out.animate(defender, UnitAnimation::Attack);
                        out.pause(Pace::Animation);
                        let amount = attack_of(state, defender);
                        let counter = apply_damage(state, out, attacker, amount);
                        report.counter = Some(counter);
                        if counter.was_dealt() {
                            CombatPhase::AttackerDeathCheck
                        } else {
                            CombatPhase::Cleanup
                        }
                    } else {
                        CombatPhase::Cleanup
                    }
                }
                CombatPhase::AttackerDeathCheck => {
                    report.attacker_died = resolve_death(state, out, attacker);
                    CombatPhase::Cleanup
                }
                CombatPhase::Cleanup => {
                    for id in [attacker, defender] {
                        if alive(state, id) {
                            out.animate(id, UnitAnimation::Idle);
                        }
                    }
                    break;
                }
            };
        }
        report.phases.push(CombatPhase::Idle);

        state.guards.unit_acting = false;
        debug!(
            attacker = %attacker,
            defender = %defender,
            defender_died = report.defender_died,
            attacker_died = report.attacker_died,
            "combat resolved"
        );
        report
    }
}
