//! The built-in card set and starting decks.
//!
//! Player 1 plays the Abyssian list (ids 1-10), player 2 the Lyonar list
//! (ids 11-20). Each deck holds its ten cards twice, in list order.

use super::definition::{CardDefinition, CardId};
use super::registry::CardRegistry;

/// Card names, shared with the effect registry.
pub mod names {
    pub const BAD_OMEN: &str = "Bad Omen";
    pub const HORN_OF_THE_FORSAKEN: &str = "Horn of the Forsaken";
    pub const GLOOM_CHASER: &str = "Gloom Chaser";
    pub const SHADOW_WATCHER: &str = "Shadow Watcher";
    pub const WRAITHLING_SWARM: &str = "Wraithling Swarm";
    pub const NIGHTSORROW_ASSASSIN: &str = "Nightsorrow Assassin";
    pub const ROCK_PULVERISER: &str = "Rock Pulveriser";
    pub const DARK_TERMINUS: &str = "Dark Terminus";
    pub const BLOODMOON_PRIESTESS: &str = "Bloodmoon Priestess";
    pub const SHADOWDANCER: &str = "Shadowdancer";

    pub const SKYROCK_GOLEM: &str = "Skyrock Golem";
    pub const SWAMP_ENTANGLER: &str = "Swamp Entangler";
    pub const SILVERGUARD_KNIGHT: &str = "Silverguard Knight";
    pub const SABERSPINE_TIGER: &str = "Saberspine Tiger";
    pub const BEAMSHOCK: &str = "Beamshock";
    pub const YOUNG_FLAMEWING: &str = "Young Flamewing";
    pub const SILVERGUARD_SQUIRE: &str = "Silverguard Squire";
    pub const IRONCLIFF_GUARDIAN: &str = "Ironcliff Guardian";
    pub const SUNDROP_ELIXIR: &str = "Sundrop Elixir";
    pub const TRUESTRIKE: &str = "Truestrike";
}

/// A unit created by effects rather than drawn from a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSpec {
    pub name: &'static str,
    pub template: &'static str,
    pub attack: u32,
    pub health: u32,
}

pub const WRAITHLING: TokenSpec = TokenSpec {
    name: "Wraithling",
    template: "wraithling",
    attack: 1,
    health: 1,
};

/// Avatar sprite template per seat.
pub const AVATAR_TEMPLATES: [&str; 2] = ["avatar1", "avatar2"];

/// Every built-in card.
#[must_use]
pub fn standard_cards() -> Vec<CardDefinition> {
    use names::*;

    let c = |id: u32, name: &str, cost: u32, template: &str, attack: u32, health: u32| {
        CardDefinition::creature(CardId::new(id), name, cost, template, attack, health)
    };
    let s = |id: u32, name: &str, cost: u32| CardDefinition::spell(CardId::new(id), name, cost);

    vec![
        c(1, BAD_OMEN, 0, "bad_omen", 0, 1),
        s(2, HORN_OF_THE_FORSAKEN, 1),
        c(3, GLOOM_CHASER, 2, "gloom_chaser", 3, 1),
        c(4, SHADOW_WATCHER, 3, "shadow_watcher", 3, 2),
        s(5, WRAITHLING_SWARM, 3),
        c(6, NIGHTSORROW_ASSASSIN, 3, "nightsorrow_assassin", 4, 2),
        c(7, ROCK_PULVERISER, 2, "rock_pulveriser", 1, 4),
        s(8, DARK_TERMINUS, 4),
        c(9, BLOODMOON_PRIESTESS, 4, "bloodmoon_priestess", 3, 3),
        c(10, SHADOWDANCER, 5, "shadowdancer", 5, 4),
        c(11, SKYROCK_GOLEM, 2, "skyrock_golem", 4, 2),
        c(12, SWAMP_ENTANGLER, 1, "swamp_entangler", 0, 3),
        c(13, SILVERGUARD_KNIGHT, 3, "silverguard_knight", 1, 5),
        c(14, SABERSPINE_TIGER, 3, "saberspine_tiger", 3, 2),
        s(15, BEAMSHOCK, 0),
        c(16, YOUNG_FLAMEWING, 4, "young_flamewing", 5, 4),
        c(17, SILVERGUARD_SQUIRE, 1, "silverguard_squire", 1, 1),
        c(18, IRONCLIFF_GUARDIAN, 5, "ironcliff_guardian", 3, 10),
        s(19, SUNDROP_ELIXIR, 1),
        s(20, TRUESTRIKE, 1),
    ]
}

/// Registry pre-loaded with [`standard_cards`].
#[must_use]
pub fn standard_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for card in standard_cards() {
        registry.register(card);
    }
    registry
}

fn twice(first: u32) -> Vec<CardId> {
    (0..2)
        .flat_map(|_| (first..first + 10).map(CardId::new))
        .collect()
}

/// Player 1's deck, top card first.
#[must_use]
pub fn player_one_deck() -> Vec<CardId> {
    twice(1)
}

/// Player 2's deck, top card first.
#[must_use]
pub fn player_two_deck() -> Vec<CardId> {
    twice(11)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_ids() {
        let registry = standard_registry();
        assert_eq!(registry.len(), 20);
        for id in 1..=20 {
            assert!(registry.contains(CardId::new(id)));
        }
    }

    #[test]
    fn test_decks_hold_each_card_twice() {
        let deck = player_one_deck();
        assert_eq!(deck.len(), 20);
        assert_eq!(deck[0], CardId::new(1));
        assert_eq!(deck[10], CardId::new(1));
        assert_eq!(deck.iter().filter(|&&c| c == CardId::new(5)).count(), 2);

        let deck = player_two_deck();
        assert_eq!(deck[0], CardId::new(11));
        assert_eq!(deck[19], CardId::new(20));
    }

    #[test]
    fn test_costs() {
        let registry = standard_registry();
        assert_eq!(registry.by_name(names::SHADOWDANCER).unwrap().mana_cost, 5);
        assert_eq!(registry.by_name(names::DARK_TERMINUS).unwrap().mana_cost, 4);
        assert!(!registry.by_name(names::TRUESTRIKE).unwrap().is_creature());
    }
}
