//! Rejection reasons for player actions.
//!
//! Nothing in the engine is fatal. Operations that can be refused return
//! `Result<_, PlayError>`; the input layer logs the error and, when it is
//! meant for the player, turns it into a notification.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Position;
use crate::cards::CardId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game is over")]
    GameOver,

    #[error("another action is still resolving")]
    Busy,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("no card in hand slot {0}")]
    EmptySlot(usize),

    #[error("card {0} is not in the registry")]
    UnknownCard(CardId),

    #[error("Not enough mana!")]
    InsufficientMana { have: u32, need: u32 },

    #[error("Card effect not implemented!")]
    EffectNotImplemented(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(&'static str),

    #[error("Invalid target: {0} is out of range")]
    IllegalTile(Position),

    #[error("No valid tiles for this card!")]
    NoValidTiles,

    #[error("no unit at {0}")]
    NoUnit(Position),

    #[error("({x}, {y}) is off the board")]
    OffBoard { x: i32, y: i32 },
}

impl PlayError {
    /// Whether the player should see this as a notification.
    ///
    /// Guard, turn and slot rejections are dropped silently.
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            PlayError::InsufficientMana { .. }
                | PlayError::EffectNotImplemented(_)
                | PlayError::InvalidTarget(_)
                | PlayError::IllegalTile(_)
                | PlayError::NoValidTiles
        )
    }
}
