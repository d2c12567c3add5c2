//! Turn flow: ending turns, drawing, and playing cards from hand.

pub mod controller;
pub mod hand;
pub mod highlight;

pub use controller::TurnController;
pub use hand::{deselect_card, draw_card, play_card, select_card};
pub use highlight::{clear_highlights, highlight_ready_units, show_summon_tiles, show_unit_options};
