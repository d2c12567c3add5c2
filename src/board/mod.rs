//! The game board: coordinates, tiles and the fixed 9×5 grid.

pub mod grid;
pub mod position;
pub mod tile;

pub use grid::Board;
pub use position::{BoardLayout, PixelPosition, Position, BOARD_HEIGHT, BOARD_WIDTH};
pub use tile::{Highlight, Tile};
