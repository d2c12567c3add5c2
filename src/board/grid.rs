//! The 9×5 grid of tiles.
//!
//! `Board` only tracks which unit sits where. Moving units, checking
//! legality and keeping the unit's own position in step are the job of the
//! callers in `units` and `combat`; the board offers the primitive
//! `place`/`vacate` pair they build on.

use serde::{Deserialize, Serialize};

use super::position::{BoardLayout, Position, BOARD_HEIGHT};
use super::tile::{Highlight, Tile};
use crate::core::UnitId;

/// Fixed grid of tiles, stored column by column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Build an empty board with pixel origins from `layout`.
    #[must_use]
    pub fn new(layout: &BoardLayout) -> Self {
        let tiles = Position::all()
            .map(|pos| Tile::new(pos, layout.pixel(pos)))
            .collect();
        Self { tiles }
    }

    fn slot(pos: Position) -> usize {
        pos.x as usize * BOARD_HEIGHT as usize + pos.y as usize
    }

    #[must_use]
    pub fn tile(&self, pos: Position) -> &Tile {
        &self.tiles[Self::slot(pos)]
    }

    pub fn tile_mut(&mut self, pos: Position) -> &mut Tile {
        &mut self.tiles[Self::slot(pos)]
    }

    /// The unit standing on `pos`, if any.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<UnitId> {
        self.tile(pos).occupant
    }

    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.tile(pos).is_empty()
    }

    /// Record `unit` as the occupant of `pos`.
    ///
    /// Returns `false` and leaves the board untouched if the tile is taken.
    pub fn place(&mut self, pos: Position, unit: UnitId) -> bool {
        let tile = self.tile_mut(pos);
        if tile.occupant.is_some() {
            return false;
        }
        tile.occupant = Some(unit);
        true
    }

    /// Clear `pos`, returning whoever stood there.
    pub fn vacate(&mut self, pos: Position) -> Option<UnitId> {
        self.tile_mut(pos).occupant.take()
    }

    pub fn set_highlight(&mut self, pos: Position, highlight: Highlight) {
        self.tile_mut(pos).highlight = highlight;
    }

    /// All tiles, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Empty tiles, column by column.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().filter(|t| t.is_empty()).map(|t| t.position)
    }
}
