//! Effects keyed by card name.

use rustc_hash::FxHashMap;

use super::effect::{CardEffect, SpellEffect};
use crate::cards::names::*;
use crate::units::{Ability, DeathwatchEffect, GambitEffect, HitEffect};

/// Name-keyed effect table.
///
/// A card whose name is missing here exists in the catalog but cannot be
/// played.
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: FxHashMap<String, CardEffect>,
}

impl EffectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects for every built-in card except Beamshock and Sundrop Elixir.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        // Player 1
        registry.register(BAD_OMEN, CardEffect::creature([Ability::Deathwatch(DeathwatchEffect::GainAttack(1))]));
        registry.register(
            HORN_OF_THE_FORSAKEN,
            CardEffect::Spell(SpellEffect::EquipArtifact {
                name: HORN_OF_THE_FORSAKEN.to_string(),
                robustness: 3,
                on_hit: Some(HitEffect::SummonWraithlingAdjacent),
            }),
        );
        registry.register(GLOOM_CHASER, CardEffect::creature([Ability::OpeningGambit(GambitEffect::SummonWraithlingBehind)]));
        registry.register(
            SHADOW_WATCHER,
            CardEffect::creature([Ability::Deathwatch(DeathwatchEffect::GainStats { attack: 1, health: 1 })]),
        );
        registry.register(WRAITHLING_SWARM, CardEffect::Spell(SpellEffect::SummonSwarm { count: 3 }));
        registry.register(
            NIGHTSORROW_ASSASSIN,
            CardEffect::creature([Ability::OpeningGambit(GambitEffect::DestroyDamagedAdjacentEnemy)]),
        );
        registry.register(ROCK_PULVERISER, CardEffect::creature([Ability::Provoke]));
        registry.register(DARK_TERMINUS, CardEffect::Spell(SpellEffect::DestroyAndReplace));
        registry.register(
            BLOODMOON_PRIESTESS,
            CardEffect::creature([Ability::Deathwatch(DeathwatchEffect::SummonWraithlingAdjacent)]),
        );
        registry.register(
            SHADOWDANCER,
            CardEffect::creature([Ability::Deathwatch(DeathwatchEffect::DrainEnemyAvatar { damage: 1, heal: 1 })]),
        );

        // Player 2
        registry.register(SKYROCK_GOLEM, CardEffect::creature([]));
        registry.register(SWAMP_ENTANGLER, CardEffect::creature([Ability::Provoke]));
        registry.register(SILVERGUARD_KNIGHT, CardEffect::creature([Ability::Provoke, Ability::Zeal { attack: 2 }]));
        registry.register(SABERSPINE_TIGER, CardEffect::creature([Ability::Rush]));
        registry.register(YOUNG_FLAMEWING, CardEffect::creature([Ability::Flying]));
        registry.register(
            SILVERGUARD_SQUIRE,
            CardEffect::creature([Ability::OpeningGambit(GambitEffect::BuffAlliesInLine { attack: 1, health: 1 })]),
        );
        registry.register(IRONCLIFF_GUARDIAN, CardEffect::creature([Ability::Provoke, Ability::Airdrop]));
        registry.register(TRUESTRIKE, CardEffect::Spell(SpellEffect::Damage { amount: 2 }));

        registry
    }

    /// Register an effect, replacing any previous one for `name`.
    pub fn register(&mut self, name: impl Into<String>, effect: CardEffect) {
        self.effects.insert(name.into(), effect);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardEffect> {
        self.effects.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
