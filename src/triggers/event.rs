//! Trigger kinds and the events that carry them.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::{PlayerId, UnitId};

/// The moments an ability can respond to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    /// A creature was just placed (Opening Gambit).
    OnSummon,
    /// Some unit left the board (Deathwatch).
    OnUnitDeath,
    /// The holder damaged a defender in combat.
    OnHit,
    /// The holder is about to take damage (Artifact).
    OnHurt,
    /// The holder's avatar took damage (Zeal).
    OnAvatarDamaged,
}

impl TriggerKind {
    pub const ALL: [TriggerKind; 5] = [
        TriggerKind::OnSummon,
        TriggerKind::OnUnitDeath,
        TriggerKind::OnHit,
        TriggerKind::OnHurt,
        TriggerKind::OnAvatarDamaged,
    ];
}

/// A fired trigger with its context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerEvent {
    Summoned {
        unit: UnitId,
    },
    UnitDied {
        unit: UnitId,
        owner: PlayerId,
        at: Position,
    },
    Hit {
        attacker: UnitId,
        defender: UnitId,
    },
    Hurt {
        target: UnitId,
        amount: u32,
    },
    AvatarDamaged {
        player: PlayerId,
        amount: u32,
    },
}

impl TriggerEvent {
    #[must_use]
    pub fn kind(&self) -> TriggerKind {
        match self {
            TriggerEvent::Summoned { .. } => TriggerKind::OnSummon,
            TriggerEvent::UnitDied { .. } => TriggerKind::OnUnitDeath,
            TriggerEvent::Hit { .. } => TriggerKind::OnHit,
            TriggerEvent::Hurt { .. } => TriggerKind::OnHurt,
            TriggerEvent::AvatarDamaged { .. } => TriggerKind::OnAvatarDamaged,
        }
    }
}
