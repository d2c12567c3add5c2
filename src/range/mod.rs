//! Range calculator: which tiles a unit or player can act on.
//!
//! - [`summonable_tiles`]: empty tiles adjacent to the player's units
//! - [`movable_tiles`]: ground moves and jumps, or every empty tile for Flying
//! - [`attackable_tiles`]: adjacent enemies
//! - [`is_provoked`]: the Provoke predicate, enforced only when configured

pub mod calculator;
pub mod provoke;

pub use calculator::{
    attackable_tiles, can_attack, can_move, empty_tiles, movable_tiles, ready_units,
    summonable_tiles, TileList,
};
pub use provoke::{adjacent_provokers, is_provoked};
