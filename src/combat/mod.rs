//! Combat and health changes.
//!
//! [`damage`] holds the primitives every health change goes through;
//! [`resolver`] runs one attack exchange as an explicit state machine.

pub mod damage;
pub mod resolver;

pub use damage::{
    apply_damage, buff_unit, destroy_unit, heal_unit, resolve_death, strike, DamageOutcome,
};
pub use resolver::{CombatPhase, CombatReport, CombatResolver};
