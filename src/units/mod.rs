//! Units and what they can do.
//!
//! - [`Unit`]: a piece on the board (avatar, creature or token)
//! - [`Ability`]: data-parameterised abilities attached at summon time
//! - [`move_unit`]: the validated move action

pub mod ability;
pub mod movement;
pub mod unit;

pub use ability::{Ability, AbilityKind, Artifact, DeathwatchEffect, GambitEffect, HitEffect};
pub use movement::move_unit;
pub use unit::{AbilityList, Unit};
