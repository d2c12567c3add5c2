//! Running card effects against the game state.
//!
//! Both paths validate before they mutate: an `Err` means nothing on the
//! board changed, so the caller can keep the card and the mana.

use tracing::debug;

use super::effect::{CardEffect, SpellEffect};
use super::summon::{summon_creature, summon_token};
use crate::board::Position;
use crate::cards::{CardDefinition, WRAITHLING};
use crate::combat::{destroy_unit, strike};
use crate::core::{GameState, PlayError, PlayerId, UnitId};
use crate::presentation::{EffectAnimation, Presenter};
use crate::range::{self, TileList};
use crate::units::{Ability, Artifact};

pub struct EffectResolver;

impl EffectResolver {
    /// Tiles a creature with `effect` may be summoned on by `player`.
    #[must_use]
    pub fn summon_tiles(state: &GameState, effect: Option<&CardEffect>, player: PlayerId) -> TileList {
        if effect.is_some_and(CardEffect::has_airdrop) {
            range::empty_tiles(state)
        } else {
            range::summonable_tiles(state, player)
        }
    }

    /// Summon the creature for `card` on `at`.
    pub fn play_creature(
        state: &mut GameState,
        out: &mut Presenter<'_>,
        card: &CardDefinition,
        effect: &CardEffect,
        at: Position,
    ) -> Result<UnitId, PlayError> {
        let CardEffect::Creature { abilities } = effect else {
            return Err(PlayError::EffectNotImplemented(card.name.clone()));
        };
        let owner = state.current_player;
        if !Self::summon_tiles(state, Some(effect), owner).contains(&at) {
            return Err(PlayError::IllegalTile(at));
        }
        summon_creature(state, out, card, owner, at, abilities)
    }

    /// Cast `spell` at `at` for the current player.
    pub fn cast_spell(
        state: &mut GameState,
        out: &mut Presenter<'_>,
        spell: &SpellEffect,
        at: Position,
    ) -> Result<(), PlayError> {
        let caster = state.current_player;
        let target = spell.target_rule().validate(state, caster, at)?;

        match (spell, target) {
            (SpellEffect::Damage { amount }, Some(target)) => {
                out.effect(EffectAnimation::Inbound, at);
                strike(state, out, target, *amount);
            }
            (SpellEffect::DestroyAndReplace, Some(target)) => {
                out.effect(EffectAnimation::Martyrdom, at);
                destroy_unit(state, out, target);
                summon_token(state, out, &WRAITHLING, caster, at);
            }
            (SpellEffect::EquipArtifact { name, robustness, on_hit }, _) => {
                let avatar = state.avatars[caster];
                let Some(unit) = state.unit_mut(avatar) else {
                    return Err(PlayError::InvalidTarget("no avatar to equip"));
                };
                match unit.abilities.iter_mut().find_map(|a| match a {
                    Ability::Artifact(artifact) if &artifact.name == name => Some(artifact),
                    _ => None,
                }) {
                    Some(artifact) => artifact.robustness = *robustness,
                    None => unit.abilities.push(Ability::Artifact(Artifact {
                        name: name.clone(),
                        robustness: *robustness,
                        on_hit: on_hit.clone(),
                    })),
                }
                let tile = unit.position;
                out.effect(EffectAnimation::Buff, tile);
            }
            (SpellEffect::SummonSwarm { count }, _) => {
                let mut open: Vec<Position> = range::summonable_tiles(state, caster).to_vec();
                if open.is_empty() {
                    return Err(PlayError::NoValidTiles);
                }
                for _ in 0..*count {
                    let Some(tile) = state.rng.take(&mut open) else {
                        break;
                    };
                    summon_token(state, out, &WRAITHLING, caster, tile);
                }
            }
            (SpellEffect::Damage { .. } | SpellEffect::DestroyAndReplace, None) => {
                return Err(PlayError::InvalidTarget("choose an enemy unit"));
            }
        }
        debug!(player = %caster, tile = %at, ?spell, "spell resolved");
        Ok(())
    }
}
