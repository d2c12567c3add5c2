//! The unit entity.
//!
//! A `Unit` is any piece on the board: an avatar, a summoned creature or a
//! token. Units are owned by `GameState`; tiles only hold their id.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ability::{Ability, AbilityKind, Artifact};
use crate::board::{PixelPosition, Position};
use crate::core::{PlayerId, UnitId};
use crate::triggers::TriggerKind;

/// Attached abilities; most units carry at most two.
pub type AbilityList = SmallVec<[Ability; 2]>;

/// A piece on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// Display name (the card or token name).
    pub name: String,
    /// Template key the front end uses to pick sprites.
    pub template: String,
    pub owner: PlayerId,

    // === Stats ===
    pub attack: u32,
    pub health: u32,
    pub max_health: u32,

    // === Placement ===
    pub position: Position,
    pub pixel: PixelPosition,

    // === Per-turn budget ===
    pub moves: u32,
    pub max_moves: u32,
    pub attacks: u32,
    pub max_attacks: u32,
    /// Summoning sickness.
    pub sleeping: bool,

    /// Set for the avatar of this player.
    pub avatar_of: Option<PlayerId>,

    /// Abilities in attachment order; triggers fire in this order.
    pub abilities: AbilityList,

    /// Set once removal has begun, so the unit is destroyed exactly once.
    pub dying: bool,
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Unit {}

impl Unit {
    /// Create a sleeping unit with one move and one attack per turn.
    #[must_use]
    pub fn new(
        id: UnitId,
        name: impl Into<String>,
        template: impl Into<String>,
        owner: PlayerId,
        attack: u32,
        health: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            template: template.into(),
            owner,
            attack,
            health,
            max_health: health,
            position: Position::new_unchecked(0, 0),
            pixel: PixelPosition::default(),
            moves: 0,
            max_moves: 1,
            attacks: 0,
            max_attacks: 1,
            sleeping: true,
            avatar_of: None,
            abilities: AbilityList::new(),
            dying: false,
        }
    }

    /// Mark as the avatar of `player`. Avatars start awake.
    #[must_use]
    pub fn as_avatar(mut self, player: PlayerId) -> Self {
        self.avatar_of = Some(player);
        self.sleeping = false;
        self
    }

    /// Attach an ability.
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    #[must_use]
    pub fn is_avatar(&self) -> bool {
        self.avatar_of.is_some()
    }

    /// On the board and not being removed.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0 && !self.dying
    }

    #[must_use]
    pub fn is_damaged(&self) -> bool {
        self.health < self.max_health
    }

    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.sleeping && self.moves < self.max_moves
    }

    /// Awake with attack budget left. Whether anything is in range is a
    /// question for the range calculator.
    #[must_use]
    pub fn has_attack_budget(&self) -> bool {
        !self.sleeping && self.attacks < self.max_attacks
    }

    /// Turn reset: counters to zero, summoning sickness cleared.
    pub fn reset_turn_status(&mut self) {
        self.moves = 0;
        self.attacks = 0;
        self.sleeping = false;
    }

    /// Spend the rest of this turn's movement.
    pub fn exhaust_moves(&mut self) {
        self.moves = self.max_moves;
    }

    pub fn place_at(&mut self, position: Position, pixel: PixelPosition) {
        self.position = position;
        self.pixel = pixel;
    }

    /// Raise attack and health (health raises max health too).
    pub fn buff(&mut self, attack: u32, health: u32) {
        self.attack += attack;
        self.health += health;
        self.max_health += health;
    }

    /// Heal up to max health, returning the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    // === Ability queries ===

    #[must_use]
    pub fn has(&self, kind: AbilityKind) -> bool {
        self.abilities.iter().any(|a| a.kind() == kind)
    }

    /// Abilities with a handler for `trigger`, in attachment order.
    pub fn abilities_for(&self, trigger: TriggerKind) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(move |a| a.responds_to(trigger))
    }

    #[must_use]
    pub fn artifact(&self) -> Option<&Artifact> {
        self.abilities.iter().find_map(|a| match a {
            Ability::Artifact(artifact) => Some(artifact),
            _ => None,
        })
    }

    pub fn artifact_mut(&mut self) -> Option<&mut Artifact> {
        self.abilities.iter_mut().find_map(|a| match a {
            Ability::Artifact(artifact) => Some(artifact),
            _ => None,
        })
    }

    /// Drop artifacts with no robustness left.
    pub fn discard_broken_artifacts(&mut self) {
        self.abilities
            .retain(|a| !matches!(a, Ability::Artifact(artifact) if artifact.robustness == 0));
    }
}
