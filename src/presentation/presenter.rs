//! Pacing-aware front for a sink.
//!
//! Engine code talks to a `Presenter`, never to the sink directly. Under
//! `PacingMode::Timed` the presenter interleaves `Pause` commands between
//! steps so a front end can animate in order; under `Instant` it sends the
//! same commands with no pauses. Game logic never waits on either.

use serde::{Deserialize, Serialize};

use super::command::{Command, EffectAnimation, UnitAnimation};
use super::sink::PresentationSink;
use crate::board::Position;
use crate::core::{PlayerId, UnitId};
use crate::units::Unit;

/// Whether presentation output carries timing hints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacingMode {
    /// No pauses; used by tests and headless runs.
    #[default]
    Instant,
    /// Emit `Pause` commands between steps.
    Timed,
}

/// How long a step should hold before the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pace {
    /// Between consecutive tile updates.
    Step,
    /// After a summon, buff or spell effect.
    Effect,
    /// After an attack, move or death animation.
    Animation,
}

/// Pause lengths in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delays {
    pub step_ms: u64,
    pub effect_ms: u64,
    pub animation_ms: u64,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            step_ms: 100,
            effect_ms: 500,
            animation_ms: 1000,
        }
    }
}

impl Delays {
    #[must_use]
    pub fn millis(&self, pace: Pace) -> u64 {
        match pace {
            Pace::Step => self.step_ms,
            Pace::Effect => self.effect_ms,
            Pace::Animation => self.animation_ms,
        }
    }
}

/// Seconds a notification stays up.
const NOTIFY_SECONDS: u32 = 2;

/// Borrowed sink plus pacing policy.
pub struct Presenter<'a> {
    sink: &'a mut dyn PresentationSink,
    pacing: PacingMode,
    delays: Delays,
}

impl<'a> Presenter<'a> {
    pub fn new(sink: &'a mut dyn PresentationSink, pacing: PacingMode, delays: Delays) -> Self {
        Self {
            sink,
            pacing,
            delays,
        }
    }

    /// Zero-latency presenter.
    pub fn instant(sink: &'a mut dyn PresentationSink) -> Self {
        Self::new(sink, PacingMode::Instant, Delays::default())
    }

    pub fn emit(&mut self, command: Command) {
        self.sink.send(command);
    }

    /// Timing hint; a no-op under instant pacing.
    pub fn pause(&mut self, pace: Pace) {
        if self.pacing == PacingMode::Timed {
            let millis = self.delays.millis(pace);
            self.sink.send(Command::Pause { millis });
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.emit(Command::Notify {
            text: text.into(),
            seconds: NOTIFY_SECONDS,
        });
    }

    // === Unit helpers ===

    /// Draw a freshly placed unit with its stats.
    pub fn draw_unit(&mut self, unit: &Unit) {
        self.emit(Command::DrawUnit {
            unit: unit.id,
            template: unit.template.clone(),
            tile: unit.position,
            pixel: unit.pixel,
        });
        self.pause(Pace::Step);
        self.unit_stats(unit);
    }

    pub fn unit_stats(&mut self, unit: &Unit) {
        self.emit(Command::SetUnitAttack {
            unit: unit.id,
            attack: unit.attack,
        });
        self.emit(Command::SetUnitHealth {
            unit: unit.id,
            health: unit.health,
        });
    }

    pub fn animate(&mut self, unit: UnitId, animation: UnitAnimation) {
        self.emit(Command::PlayUnitAnimation { unit, animation });
    }

    pub fn effect(&mut self, effect: EffectAnimation, tile: Position) {
        self.emit(Command::PlayEffect { effect, tile });
        self.pause(Pace::Effect);
    }

    pub fn player_health(&mut self, player: PlayerId, health: u32) {
        self.emit(Command::SetPlayerHealth { player, health });
    }

    pub fn player_mana(&mut self, player: PlayerId, mana: u32) {
        self.emit(Command::SetPlayerMana { player, mana });
    }
}
