//! Abilities a unit can carry.
//!
//! Each ability kind has exactly one implementation, parameterised by data.
//! Cards attach instances of these variants at summon time; they never
//! redefine behaviour. Capability checks ("can this unit fly?") always
//! query the attached list, never the unit's name or template.
//!
//! ## Trigger mapping
//!
//! | Ability          | Responds to                    |
//! |------------------|--------------------------------|
//! | `OpeningGambit`  | `OnSummon`                     |
//! | `Deathwatch`     | `OnUnitDeath`                  |
//! | `OnHit`          | `OnHit`                        |
//! | `Artifact`       | `OnHurt`, and `OnHit` if armed |
//! | `Zeal`           | `OnAvatarDamaged`              |
//! | `Provoke`, `Rush`, `Flying`, `Airdrop` | nothing (read structurally) |

use serde::{Deserialize, Serialize};

use crate::triggers::TriggerKind;

/// One-shot effect run when the unit is summoned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GambitEffect {
    /// Summon a Wraithling on the tile directly behind, if empty.
    SummonWraithlingBehind,
    /// Destroy the first adjacent enemy minion below its max health.
    DestroyDamagedAdjacentEnemy,
    /// Friendly units directly in front and behind gain stats.
    BuffAlliesInLine { attack: u32, health: u32 },
}

/// Effect run whenever another unit dies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathwatchEffect {
    GainAttack(u32),
    GainStats { attack: u32, health: u32 },
    /// Summon a Wraithling on a random empty adjacent tile.
    SummonWraithlingAdjacent,
    /// Damage the enemy avatar and heal the owner's avatar.
    DrainEnemyAvatar { damage: u32, heal: u32 },
}

/// Effect run on the attacker after it damages a defender.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitEffect {
    /// Summon a Wraithling on a random empty tile adjacent to the attacker.
    SummonWraithlingAdjacent,
}

/// Damage-preventing equipment, normally worn by an avatar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    /// Preventions left before the artifact breaks.
    pub robustness: u32,
    pub on_hit: Option<HitEffect>,
}

/// Discriminant of an [`Ability`], for capability queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    OpeningGambit,
    Deathwatch,
    OnHit,
    Artifact,
    Zeal,
    Provoke,
    Rush,
    Flying,
    Airdrop,
}

/// An ability instance attached to a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    OpeningGambit(GambitEffect),
    Deathwatch(DeathwatchEffect),
    OnHit(HitEffect),
    Artifact(Artifact),
    /// Gains attack whenever the owner's avatar takes damage.
    Zeal { attack: u32 },
    Provoke,
    Rush,
    Flying,
    /// May be summoned on any empty tile.
    Airdrop,
}

impl Ability {
    #[must_use]
    pub fn kind(&self) -> AbilityKind {
        match self {
            Ability::OpeningGambit(_) => AbilityKind::OpeningGambit,
            Ability::Deathwatch(_) => AbilityKind::Deathwatch,
            Ability::OnHit(_) => AbilityKind::OnHit,
            Ability::Artifact(_) => AbilityKind::Artifact,
            Ability::Zeal { .. } => AbilityKind::Zeal,
            Ability::Provoke => AbilityKind::Provoke,
            Ability::Rush => AbilityKind::Rush,
            Ability::Flying => AbilityKind::Flying,
            Ability::Airdrop => AbilityKind::Airdrop,
        }
    }

    /// Whether this ability has a handler for `trigger`.
    #[must_use]
    pub fn responds_to(&self, trigger: TriggerKind) -> bool {
        match (self, trigger) {
            (Ability::OpeningGambit(_), TriggerKind::OnSummon)
            | (Ability::Deathwatch(_), TriggerKind::OnUnitDeath)
            | (Ability::OnHit(_), TriggerKind::OnHit)
            | (Ability::Artifact(_), TriggerKind::OnHurt)
            | (Ability::Zeal { .. }, TriggerKind::OnAvatarDamaged) => true,
            (Ability::Artifact(artifact), TriggerKind::OnHit) => artifact.on_hit.is_some(),
            _ => false,
        }
    }

    /// Gate predicate. Passive abilities are always ready; an artifact is
    /// ready while it has robustness left.
    #[must_use]
    pub fn can_activate(&self) -> bool {
        match self {
            Ability::Artifact(artifact) => artifact.robustness > 0,
            _ => true,
        }
    }

    /// Abilities whose effect is read by range and combat code rather than
    /// dispatched.
    #[must_use]
    pub fn is_passive(&self) -> bool {
        matches!(
            self.kind(),
            AbilityKind::Provoke | AbilityKind::Rush | AbilityKind::Flying | AbilityKind::Airdrop
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horn(robustness: u32) -> Ability {
        Ability::Artifact(Artifact {
            name: "Horn of the Forsaken".into(),
            robustness,
            on_hit: Some(HitEffect::SummonWraithlingAdjacent),
        })
    }

    #[test]
    fn test_trigger_mapping() {
        let gambit = Ability::OpeningGambit(GambitEffect::SummonWraithlingBehind);
        assert!(gambit.responds_to(TriggerKind::OnSummon));
        assert!(!gambit.responds_to(TriggerKind::OnUnitDeath));

        let watch = Ability::Deathwatch(DeathwatchEffect::GainAttack(1));
        assert!(watch.responds_to(TriggerKind::OnUnitDeath));

        assert!(horn(3).responds_to(TriggerKind::OnHurt));
        assert!(horn(3).responds_to(TriggerKind::OnHit));
        assert!(Ability::Zeal { attack: 2 }.responds_to(TriggerKind::OnAvatarDamaged));
    }

    #[test]
    fn test_passive_abilities_never_respond() {
        for ability in [Ability::Provoke, Ability::Rush, Ability::Flying, Ability::Airdrop] {
            assert!(ability.is_passive());
            assert!(ability.can_activate());
            for trigger in TriggerKind::ALL {
                assert!(!ability.responds_to(trigger));
            }
        }
    }

    #[test]
    fn test_spent_artifact_cannot_activate() {
        assert!(horn(1).can_activate());
        assert!(!horn(0).can_activate());
    }

    #[test]
    fn test_unarmed_artifact_ignores_on_hit() {
        let shield = Ability::Artifact(Artifact {
            name: "Shield".into(),
            robustness: 2,
            on_hit: None,
        });
        assert!(!shield.responds_to(TriggerKind::OnHit));
        assert!(shield.responds_to(TriggerKind::OnHurt));
    }
}
