//! # grid-duel
//!
//! Rules engine for a two-player tactical card game on a 9x5 grid.
//!
//! Each player has an avatar on the board, a hand of up to six cards and a
//! deck. Creature cards summon units next to friendly units; units move,
//! attack adjacent enemies and trade counter-damage. Abilities hook into
//! summons, deaths, hits and incoming damage. Destroying the enemy avatar
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `GameState` owns every unit. Tiles hold ids only,
//!    and the live-unit list is an `im::Vector` so trigger broadcasts can
//!    snapshot it cheaply.
//!
//! 2. **Abilities are data**: each ability kind has one implementation,
//!    parameterised by the card that attaches it. Capability checks query
//!    the attached list, never a unit's name.
//!
//! 3. **Output is fire-and-forget**: the engine sends `Command`s to a
//!    `PresentationSink` and never reads anything back. Pacing is a
//!    presentation concern; logic never sleeps.
//!
//! ## Modules
//!
//! - `core`: ids, players, state, actions, RNG, configuration, errors
//! - `board`: positions, tiles and the grid
//! - `units`: the unit entity, abilities and movement
//! - `cards`: card definitions, registry and the built-in catalog
//! - `range`: summon, move and attack ranges
//! - `triggers`: trigger kinds and the ability engine
//! - `combat`: the damage pipeline and the attack state machine
//! - `effects`: card effects and summoning
//! - `turn`: turn flow, hand management and highlights
//! - `ai`: the greedy computer opponent
//! - `presentation`: commands, sinks and pacing
//! - `game`: the `Game` facade and input events

pub mod ai;
pub mod board;
pub mod cards;
pub mod combat;
pub mod core;
pub mod effects;
pub mod game;
pub mod presentation;
pub mod range;
pub mod triggers;
pub mod turn;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, GameAction, GameConfig, GameResult, GameRng, GameRngState, GameState, PlayError,
    PlayerId, PlayerMap, UnitId,
};

pub use crate::board::{Board, Highlight, Position, BOARD_HEIGHT, BOARD_WIDTH};

pub use crate::units::{Ability, AbilityKind, Artifact, Unit};

pub use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry};

pub use crate::effects::{CardEffect, EffectRegistry, EffectResolver, SpellEffect};

pub use crate::triggers::{AbilityEngine, TriggerEvent, TriggerKind};

pub use crate::combat::{CombatPhase, CombatReport, CombatResolver, DamageOutcome};

pub use crate::turn::TurnController;

pub use crate::ai::{AiController, AiTurnSummary};

pub use crate::presentation::{Command, NullSink, PacingMode, PresentationSink, RecordingSink};

pub use crate::game::{Game, GameBuilder, InputEvent};
