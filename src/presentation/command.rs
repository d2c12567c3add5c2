//! Commands sent to the front end.

use serde::{Deserialize, Serialize};

use crate::board::{Highlight, PixelPosition, Position};
use crate::cards::CardId;
use crate::core::{PlayerId, UnitId};

/// Named unit animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitAnimation {
    Idle,
    Move,
    Attack,
    Hit,
    Death,
    Channel,
}

/// Tile effect animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectAnimation {
    Summon,
    Buff,
    /// Spell impact.
    Inbound,
    /// Death-triggered effect.
    Martyrdom,
}

/// One fire-and-forget instruction to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    DrawUnit {
        unit: UnitId,
        template: String,
        tile: Position,
        pixel: PixelPosition,
    },
    MoveUnit {
        unit: UnitId,
        from: Position,
        to: Position,
    },
    DeleteUnit {
        unit: UnitId,
    },
    SetUnitAttack {
        unit: UnitId,
        attack: u32,
    },
    SetUnitHealth {
        unit: UnitId,
        health: u32,
    },
    HighlightTile {
        tile: Position,
        highlight: Highlight,
    },
    /// Draw a hand slot (1-based).
    DrawCard {
        player: PlayerId,
        slot: usize,
        card: CardId,
        highlighted: bool,
    },
    DeleteCard {
        player: PlayerId,
        slot: usize,
    },
    SetPlayerMana {
        player: PlayerId,
        mana: u32,
    },
    SetPlayerHealth {
        player: PlayerId,
        health: u32,
    },
    PlayUnitAnimation {
        unit: UnitId,
        animation: UnitAnimation,
    },
    PlayEffect {
        effect: EffectAnimation,
        tile: Position,
    },
    /// Timed text notification.
    Notify {
        text: String,
        seconds: u32,
    },
    /// Timing hint: the front end should let this long pass before the
    /// next command.
    Pause {
        millis: u64,
    },
}
