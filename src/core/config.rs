//! Game configuration.
//!
//! `GameConfig` carries every tunable the engine reads at runtime: hand
//! and avatar constants, where the avatars start, which seat the AI drives,
//! pacing for the presentation stream, and the optional rule switches.
//! All fields have defaults matching the standard game; tests and front ends
//! override them with the `with_*` builders.
//!
//! ```
//! use grid_duel::core::GameConfig;
//! use grid_duel::presentation::PacingMode;
//!
//! let config = GameConfig::default()
//!     .with_ai_player(None)
//!     .with_pacing(PacingMode::Instant);
//! assert_eq!(config.hand_limit, 6);
//! assert!(config.ai_player.is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::board::{BoardLayout, Position};
use crate::presentation::{Delays, PacingMode};

/// Runtime configuration for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum cards in hand.
    pub hand_limit: usize,

    /// Cards drawn by each player before the first turn.
    pub starting_hand: usize,

    /// Avatar base attack.
    pub avatar_attack: u32,

    /// Avatar starting (and maximum) health.
    pub avatar_health: u32,

    /// Tile each avatar starts on.
    pub avatar_tiles: PlayerMap<Position>,

    /// Seat driven by the AI controller, if any.
    pub ai_player: Option<PlayerId>,

    /// Shuffle decks with the game RNG before the opening draw.
    pub shuffle_decks: bool,

    /// Whether presentation output carries pauses.
    pub pacing: PacingMode,

    /// Pause lengths used under timed pacing.
    pub delays: Delays,

    /// Pixel geometry reported alongside tile coordinates.
    pub layout: BoardLayout,

    /// Restrict units adjacent to an enemy Provoke-bearer.
    pub enforce_provoke: bool,

    /// Keep the move guard set until the front end acknowledges the move.
    pub await_move_ack: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_limit: 6,
            starting_hand: 3,
            avatar_attack: 2,
            avatar_health: 20,
            avatar_tiles: PlayerMap::new(|p| {
                if p == PlayerId::ONE {
                    Position::new_unchecked(1, 2)
                } else {
                    Position::new_unchecked(7, 2)
                }
            }),
            ai_player: Some(PlayerId::TWO),
            shuffle_decks: false,
            pacing: PacingMode::Instant,
            delays: Delays::default(),
            layout: BoardLayout::default(),
            enforce_provoke: false,
            await_move_ack: false,
        }
    }
}

impl GameConfig {
    /// Set the AI-controlled seat.
    #[must_use]
    pub fn with_ai_player(mut self, player: Option<PlayerId>) -> Self {
        self.ai_player = player;
        self
    }

    /// Set the pacing mode.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingMode) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand(mut self, cards: usize) -> Self {
        self.starting_hand = cards;
        self
    }

    /// Set an avatar's starting tile.
    #[must_use]
    pub fn with_avatar_tile(mut self, player: PlayerId, tile: Position) -> Self {
        self.avatar_tiles[player] = tile;
        self
    }

    /// Shuffle decks before the opening draw.
    #[must_use]
    pub fn with_shuffled_decks(mut self, shuffle: bool) -> Self {
        self.shuffle_decks = shuffle;
        self
    }

    /// Turn Provoke enforcement on or off.
    #[must_use]
    pub fn with_provoke_enforced(mut self, enforce: bool) -> Self {
        self.enforce_provoke = enforce;
        self
    }

    /// Require a `UnitStopped` acknowledgement after each move.
    #[must_use]
    pub fn with_move_ack(mut self, await_ack: bool) -> Self {
        self.await_move_ack = await_ack;
        self
    }

    /// Whether `player` is driven by the AI.
    #[must_use]
    pub fn is_ai(&self, player: PlayerId) -> bool {
        self.ai_player == Some(player)
    }
}
