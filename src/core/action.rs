//! Action history.
//!
//! Every completed player action (human or AI) is appended to the state's
//! history as an `ActionRecord`. Rejected attempts are never recorded.

use serde::{Deserialize, Serialize};

use super::entity::UnitId;
use super::player::PlayerId;
use crate::board::Position;
use crate::cards::CardId;

/// A completed game action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// A creature card was played, creating `unit`.
    Summon {
        card: CardId,
        unit: UnitId,
        at: Position,
    },
    /// A spell card resolved against `at`.
    Cast { card: CardId, at: Position },
    Move {
        unit: UnitId,
        from: Position,
        to: Position,
    },
    Attack { attacker: UnitId, defender: UnitId },
    EndTurn,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: GameAction,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: GameAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
