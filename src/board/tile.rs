//! Board tiles.

use serde::{Deserialize, Serialize};

use super::position::{PixelPosition, Position};
use crate::core::UnitId;

/// Display highlight on a tile.
///
/// Purely cosmetic: legality is decided by the highlight sets on
/// `GameState`, never by this flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    #[default]
    None,
    /// A unit that can act, or a tile it can move to.
    Movable,
    Attackable,
    Summonable,
}

/// One square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub pixel: PixelPosition,
    /// Lookup reference to the occupant; units are owned by `GameState`.
    pub occupant: Option<UnitId>,
    pub highlight: Highlight,
}

impl Tile {
    #[must_use]
    pub fn new(position: Position, pixel: PixelPosition) -> Self {
        Self {
            position,
            pixel,
            occupant: None,
            highlight: Highlight::None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}
