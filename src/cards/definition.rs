//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: name, cost,
//! and for creatures the unit template and base stats. What a card *does*
//! when played lives in the effect registry (`effects::EffectRegistry`),
//! keyed by card name.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the card type (e.g. "Gloom Chaser"); two copies in a deck
/// share the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Creature or spell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Creature {
        /// Unit template key.
        template: String,
        attack: u32,
        health: u32,
    },
    Spell,
}

/// Static card definition.
///
/// ```
/// use grid_duel::cards::{CardDefinition, CardId};
///
/// let golem = CardDefinition::creature(CardId::new(11), "Skyrock Golem", 2, "skyrock_golem", 4, 2);
/// assert!(golem.is_creature());
/// assert_eq!(golem.mana_cost, 2);
///
/// let strike = CardDefinition::spell(CardId::new(20), "Truestrike", 1);
/// assert!(!strike.is_creature());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Card name; also the key into the effect registry.
    pub name: String,

    pub mana_cost: u32,

    pub kind: CardKind,
}

impl CardDefinition {
    /// Create a creature card.
    #[must_use]
    pub fn creature(
        id: CardId,
        name: impl Into<String>,
        mana_cost: u32,
        template: impl Into<String>,
        attack: u32,
        health: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            mana_cost,
            kind: CardKind::Creature {
                template: template.into(),
                attack,
                health,
            },
        }
    }

    /// Create a spell card.
    #[must_use]
    pub fn spell(id: CardId, name: impl Into<String>, mana_cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            mana_cost,
            kind: CardKind::Spell,
        }
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        matches!(self.kind, CardKind::Creature { .. })
    }
}
