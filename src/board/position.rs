//! Board coordinates.
//!
//! The board is a fixed 9×5 grid. `Position` is only constructible inside
//! the grid, so every `Position` a caller holds is a real tile.

use serde::{Deserialize, Serialize};

/// Board width in tiles.
pub const BOARD_WIDTH: u8 = 9;

/// Board height in tiles.
pub const BOARD_HEIGHT: u8 = 5;

/// The eight surrounding offsets, column by column.
const NEIGHBOUR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal two-step jumps.
const JUMP_OFFSETS: [(i8, i8); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// A tile coordinate in `[0, 9) × [0, 5)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Create a position, or `None` when outside the board.
    ///
    /// ```
    /// use grid_duel::board::Position;
    ///
    /// assert!(Position::new(8, 4).is_some());
    /// assert!(Position::new(9, 0).is_none());
    /// assert!(Position::new(0, -1).is_none());
    /// ```
    #[must_use]
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let in_x = (0..BOARD_WIDTH as i32).contains(&x);
        let in_y = (0..BOARD_HEIGHT as i32).contains(&y);
        (in_x && in_y).then(|| Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Create a position known to be on the board.
    ///
    /// Coordinates outside the grid are clamped onto its edge.
    #[must_use]
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        let x = if x >= BOARD_WIDTH { BOARD_WIDTH - 1 } else { x };
        let y = if y >= BOARD_HEIGHT { BOARD_HEIGHT - 1 } else { y };
        Self { x, y }
    }

    /// The position shifted by `(dx, dy)`, if still on the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::new(self.x as i32 + dx as i32, self.y as i32 + dy as i32)
    }

    /// The up to eight orthogonal and diagonal neighbours.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// The up to four orthogonal two-step jump targets.
    pub fn jumps(self) -> impl Iterator<Item = Position> {
        JUMP_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Whether `other` is one of the eight neighbours.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Manhattan distance.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }

    /// Every board position, column by column.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_WIDTH).flat_map(|x| (0..BOARD_HEIGHT).map(move |y| Position { x, y }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Screen coordinates of a tile's origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

/// Pixel geometry of the board, used to report screen positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub origin_x: i32,
    pub origin_y: i32,
    pub tile_size: i32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            origin_x: 45,
            origin_y: 100,
            tile_size: 115,
        }
    }
}

impl BoardLayout {
    /// Pixel origin of a tile.
    #[must_use]
    pub fn pixel(&self, pos: Position) -> PixelPosition {
        PixelPosition {
            x: self.origin_x + i32::from(pos.x) * self.tile_size,
            y: self.origin_y + i32::from(pos.y) * self.tile_size,
        }
    }
}
