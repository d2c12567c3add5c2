//! Presentation boundary: what the engine tells the front end.
//!
//! The engine emits [`Command`]s through a [`Presenter`], which adds timing
//! hints according to [`PacingMode`] and forwards to a [`PresentationSink`].

pub mod command;
pub mod presenter;
pub mod sink;

pub use command::{Command, EffectAnimation, UnitAnimation};
pub use presenter::{Delays, Pace, PacingMode, Presenter};
pub use sink::{NullSink, PresentationSink, RecordingSink};
