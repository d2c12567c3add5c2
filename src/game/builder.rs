//! Game construction.

use super::Game;
use crate::cards::catalog::{player_one_deck, player_two_deck, standard_registry};
use crate::cards::{CardId, CardRegistry};
use crate::core::{GameConfig, GameState, PlayerId, PlayerMap};
use crate::effects::EffectRegistry;
use crate::presentation::{PresentationSink, Presenter};
use crate::turn::{draw_card, highlight_ready_units};

/// Builder for a [`Game`].
///
/// Defaults to the standard cards, effects and decks, seed 0.
///
/// ```
/// use grid_duel::{GameBuilder, GameConfig, NullSink};
///
/// let game = GameBuilder::new()
///     .seed(7)
///     .config(GameConfig::default().with_ai_player(None))
///     .build(NullSink);
/// assert_eq!(game.state().turn, 1);
/// assert_eq!(game.state().players[grid_duel::PlayerId::ONE].hand.len(), 3);
/// ```
pub struct GameBuilder {
    seed: u64,
    config: GameConfig,
    cards: CardRegistry,
    effects: EffectRegistry,
    decks: PlayerMap<Vec<CardId>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            seed: 0,
            config: GameConfig::default(),
            cards: standard_registry(),
            effects: EffectRegistry::standard(),
            decks: PlayerMap::new(|p| {
                if p == PlayerId::ONE {
                    player_one_deck()
                } else {
                    player_two_deck()
                }
            }),
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn cards(mut self, cards: CardRegistry) -> Self {
        self.cards = cards;
        self
    }

    #[must_use]
    pub fn effects(mut self, effects: EffectRegistry) -> Self {
        self.effects = effects;
        self
    }

    /// Replace a player's deck, top card first.
    #[must_use]
    pub fn deck(mut self, player: PlayerId, cards: Vec<CardId>) -> Self {
        self.decks[player] = cards;
        self
    }

    /// Set up the board, deal opening hands and draw the initial frame.
    pub fn build<S: PresentationSink>(self, mut sink: S) -> Game<S> {
        let mut state = GameState::new(self.config, self.seed);
        for (player, deck) in self.decks.iter() {
            state.set_deck(player, deck.iter().copied());
        }
        {
            let mut out = Presenter::new(&mut sink, state.config.pacing, state.config.delays);
            for player in PlayerId::both() {
                if state.config.shuffle_decks {
                    state.shuffle_deck(player);
                }
                let avatar = state.avatars[player];
                if let Some(unit) = state.unit(avatar) {
                    out.draw_unit(unit);
                }
                let seat = &state.players[player];
                let (health, mana) = (seat.health, seat.mana);
                out.player_health(player, health);
                out.player_mana(player, mana);
            }
            for player in PlayerId::both() {
                for _ in 0..state.config.starting_hand {
                    draw_card(&mut state, &mut out, player);
                }
            }
            highlight_ready_units(&mut state, &mut out);
        }

        Game {
            state,
            cards: self.cards,
            effects: self.effects,
            sink,
        }
    }
}
