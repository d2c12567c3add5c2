//! Greedy single-turn AI.
//!
//! Two passes over the AI's units, in summon order:
//!
//! 1. Every unit that can attack hits its lowest-health adjacent enemy
//!    (first found wins ties).
//! 2. Every unit that neither attacked nor can attack, and can move,
//!    steps to the reachable tile closest to the enemy avatar by
//!    Manhattan distance (first found wins ties).
//!
//! The AI does not play cards; [`AiController::choose_summon`] is
//! available to callers that want a suggestion.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::Position;
use crate::cards::CardRegistry;
use crate::combat::CombatResolver;
use crate::core::{GameAction, GameState, UnitId};
use crate::effects::{CardEffect, EffectRegistry, EffectResolver};
use crate::presentation::Presenter;
use crate::range;
use crate::units::move_unit;

/// What the AI did this turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AiTurnSummary {
    pub attacks: Vec<(UnitId, UnitId)>,
    pub moves: Vec<(UnitId, Position)>,
}

pub struct AiController;

impl AiController {
    /// Play out the current player's turn. Holds the `ai_acting` guard
    /// throughout.
    pub fn take_turn(state: &mut GameState, out: &mut Presenter<'_>) -> AiTurnSummary {
        state.guards.ai_acting = true;
        let player = state.current_player;
        let roster: Vec<UnitId> = state.units_of(player).map(|u| u.id).collect();
        let mut summary = AiTurnSummary::default();
        let mut attacked = FxHashSet::default();

        for &id in &roster {
            if state.is_over() {
                break;
            }
            if !range::can_attack(state, id) {
                continue;
            }
            let Some(target) = Self::choose_target(state, id) else {
                continue;
            };
            debug!(unit = %id, target = %target, "ai attacks");
            CombatResolver::resolve(state, out, id, target);
            state.record(GameAction::Attack {
                attacker: id,
                defender: target,
            });
            attacked.insert(id);
            summary.attacks.push((id, target));
        }

        for &id in &roster {
            if state.is_over() {
                break;
            }
            if attacked.contains(&id) || range::can_attack(state, id) || !range::can_move(state, id) {
                continue;
            }
            let Some(to) = Self::choose_step(state, id) else {
                continue;
            };
            if move_unit(state, out, id, to).is_ok() {
                debug!(unit = %id, tile = %to, "ai moves");
                summary.moves.push((id, to));
            }
        }

        state.guards.ai_acting = false;
        summary
    }

    /// The adjacent enemy with the lowest health.
    #[must_use]
    pub fn choose_target(state: &GameState, unit: UnitId) -> Option<UnitId> {
        range::attackable_tiles(state, unit)
            .into_iter()
            .filter_map(|tile| state.unit_at(tile))
            .min_by_key(|u| u.health)
            .map(|u| u.id)
    }

    /// The reachable tile nearest the enemy avatar.
    #[must_use]
    pub fn choose_step(state: &GameState, unit: UnitId) -> Option<Position> {
        let owner = state.unit(unit)?.owner;
        let goal = state.avatar(owner.opponent())?.position;
        range::movable_tiles(state, unit)
            .into_iter()
            .min_by_key(|tile| tile.manhattan(goal))
    }

    /// Suggest a creature to summon: the first affordable creature card in
    /// hand with a registered effect, on the first summonable tile.
    ///
    /// Returns the 0-based hand index and tile.
    #[must_use]
    pub fn choose_summon(
        state: &GameState,
        cards: &CardRegistry,
        effects: &EffectRegistry,
    ) -> Option<(usize, Position)> {
        let player = state.current_player;
        let mana = state.players[player].mana;
        state.hand(player).iter().enumerate().find_map(|(index, &card)| {
            let card = cards.get(card).filter(|c| c.is_creature() && c.mana_cost <= mana)?;
            let effect = effects.get(&card.name).filter(|e| matches!(e, CardEffect::Creature { .. }))?;
            let tile = *EffectResolver::summon_tiles(state, Some(effect), player).first()?;
            Some((index, tile))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::standard_registry;
    use crate::cards::CardId;
    use crate::core::{GameConfig, PlayerId};
    use crate::presentation::RecordingSink;
    use crate::units::Unit;

    fn pos(x: u8, y: u8) -> Position {
        Position::new_unchecked(x, y)
    }

    fn ai_turn_state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 12);
        state.current_player = PlayerId::TWO;
        state
    }

    fn spawn(state: &mut GameState, owner: PlayerId, at: Position, attack: u32, health: u32) -> UnitId {
        let id = state.alloc_unit_id();
        let mut unit = Unit::new(id, "U", "u", owner, attack, health);
        unit.reset_turn_status();
        state.spawn(unit, at).unwrap()
    }

    #[test]
    fn test_targets_lowest_health() {
        let mut state = ai_turn_state();
        let ai = spawn(&mut state, PlayerId::TWO, pos(4, 2), 1, 5);
        spawn(&mut state, PlayerId::ONE, pos(3, 2), 1, 4);
        let weak = spawn(&mut state, PlayerId::ONE, pos(5, 3), 1, 2);

        assert_eq!(AiController::choose_target(&state, ai), Some(weak));
    }

    #[test]
    fn test_tie_goes_to_first_found() {
        let mut state = ai_turn_state();
        let ai = spawn(&mut state, PlayerId::TWO, pos(4, 2), 1, 5);
        // Neighbour order visits (3,*) before (5,*).
        let first = spawn(&mut state, PlayerId::ONE, pos(3, 3), 1, 2);
        spawn(&mut state, PlayerId::ONE, pos(5, 1), 1, 2);

        assert_eq!(AiController::choose_target(&state, ai), Some(first));
    }

    #[test]
    fn test_avatar_walks_toward_enemy() {
        let mut state = ai_turn_state();
        let avatar = state.avatars[PlayerId::TWO];
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        let summary = AiController::take_turn(&mut state, &mut out);

        assert!(summary.attacks.is_empty());
        assert_eq!(summary.moves, vec![(avatar, pos(5, 2))]);
        assert!(!state.guards.ai_acting);
    }

    #[test]
    fn test_attacker_does_not_move() {
        let mut state = ai_turn_state();
        let ai = spawn(&mut state, PlayerId::TWO, pos(4, 2), 1, 5);
        let enemy = spawn(&mut state, PlayerId::ONE, pos(3, 2), 1, 5);
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        let summary = AiController::take_turn(&mut state, &mut out);

        assert_eq!(summary.attacks, vec![(ai, enemy)]);
        assert_eq!(state.unit(ai).unwrap().position, pos(4, 2));
        assert_eq!(state.unit(enemy).unwrap().health, 4);
    }

    #[test]
    fn test_choose_summon_picks_affordable_creature() {
        let mut state = ai_turn_state();
        state.players[PlayerId::TWO].mana = 2;
        state.players[PlayerId::TWO].hand = vec![CardId::new(18), CardId::new(20), CardId::new(11)];
        let cards = standard_registry();
        let effects = EffectRegistry::standard();

        let (index, tile) = AiController::choose_summon(&state, &cards, &effects).unwrap();
        assert_eq!(index, 2);
        assert!(tile.is_adjacent(pos(7, 2)));
    }
}
