//! Effect definitions.

use serde::{Deserialize, Serialize};

use super::targeting::TargetRule;
use crate::units::{Ability, AbilityKind, HitEffect};

/// What playing a card does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Summon the card's unit with these abilities attached, in order.
    Creature { abilities: Vec<Ability> },
    Spell(SpellEffect),
}

impl CardEffect {
    #[must_use]
    pub fn creature(abilities: impl IntoIterator<Item = Ability>) -> Self {
        CardEffect::Creature {
            abilities: abilities.into_iter().collect(),
        }
    }

    /// Whether the creature may be placed on any empty tile.
    #[must_use]
    pub fn has_airdrop(&self) -> bool {
        match self {
            CardEffect::Creature { abilities } => {
                abilities.iter().any(|a| a.kind() == AbilityKind::Airdrop)
            }
            CardEffect::Spell(_) => false,
        }
    }
}

/// A spell's effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellEffect {
    /// Damage an enemy unit.
    Damage { amount: u32 },
    /// Destroy an enemy minion and summon a Wraithling in its place.
    DestroyAndReplace,
    /// Equip the caster's avatar. Re-casting restores robustness.
    EquipArtifact {
        name: String,
        robustness: u32,
        on_hit: Option<HitEffect>,
    },
    /// Summon Wraithlings on distinct random summonable tiles.
    SummonSwarm { count: usize },
}

impl SpellEffect {
    /// The tile the player must click for this spell.
    #[must_use]
    pub fn target_rule(&self) -> TargetRule {
        match self {
            SpellEffect::Damage { .. } => TargetRule::EnemyUnit,
            SpellEffect::DestroyAndReplace => TargetRule::EnemyMinion,
            SpellEffect::EquipArtifact { .. } | SpellEffect::SummonSwarm { .. } => TargetRule::AnyTile,
        }
    }
}
