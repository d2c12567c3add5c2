//! Computer opponent.

pub mod greedy;

pub use greedy::{AiController, AiTurnSummary};
