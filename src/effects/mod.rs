//! Card effects.
//!
//! - [`CardEffect`]: what a card does, as data
//! - [`EffectRegistry`]: effects keyed by card name
//! - [`TargetRule`]: which tile a spell may be cast on
//! - [`EffectResolver`]: runs a creature or spell effect against the state
//!
//! Cards without a registered effect cannot be played.

mod effect;
mod registry;
mod resolver;
pub mod summon;
mod targeting;

pub use effect::{CardEffect, SpellEffect};
pub use registry::EffectRegistry;
pub use resolver::EffectResolver;
pub use targeting::TargetRule;
