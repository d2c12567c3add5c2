//! Unit identification.
//!
//! Every unit on the board (avatars, summoned creatures, tokens) has a
//! unique `UnitId`. Ids are allocated monotonically by `GameState` and never
//! reused, so a removed unit's id still identifies it in logs and history.
//!
//! ## ID Layout
//!
//! - `100`, `101`: the two avatars
//! - `1000..`: everything summoned during play
//!
//! ```
//! use grid_duel::core::UnitId;
//!
//! let avatar = UnitId::avatar(0);
//! assert_eq!(avatar.raw(), 100);
//! assert!(avatar.is_avatar_id());
//!
//! let token = UnitId::new(1004);
//! assert!(!token.is_avatar_id());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a unit. Equality of units is equality of ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Base id for avatars; player index is added.
    pub const AVATAR_BASE: u32 = 100;

    /// First id handed out to summoned units.
    pub const FIRST_SUMMONED: u32 = 1000;

    /// Create a unit id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Avatar id for a 0-based player index.
    #[must_use]
    pub const fn avatar(player_index: u8) -> Self {
        Self(Self::AVATAR_BASE + player_index as u32)
    }

    /// Whether this id lies in the avatar range.
    #[must_use]
    pub const fn is_avatar_id(self) -> bool {
        self.0 >= Self::AVATAR_BASE && self.0 < Self::AVATAR_BASE + 2
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
