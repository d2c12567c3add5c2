//! Trigger dispatch.
//!
//! Abilities subscribe to [`TriggerKind`]s; the [`AbilityEngine`] collects
//! the abilities that answer an event and runs them in order. There is no
//! priority stack: every ability resolves immediately and fully before
//! the next one starts.

pub mod dispatch;
pub mod event;

pub use dispatch::AbilityEngine;
pub use event::{TriggerEvent, TriggerKind};
