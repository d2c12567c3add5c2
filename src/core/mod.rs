//! Core engine types: ids, players, state, actions, RNG, configuration,
//! errors.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, GameAction};
pub use config::GameConfig;
pub use entity::UnitId;
pub use error::PlayError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{
    DrawOutcome, GameResult, GameState, Guards, HighlightSets, Player, SelectedCard, Selection,
};
