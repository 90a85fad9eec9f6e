//! Entity identification.
//!
//! Live units and drawn hand cards each get a unique identifier the
//! moment the board creates them. Identifiers are never reused within
//! a game.
//!
//! ## Allocation
//!
//! The board allocates both kinds of id. `UnitId::UNASSIGNED` (raw 0)
//! marks a unit that has been built but not yet placed; `Board::place_unit`
//! assigns the real id on placement.
//!
//! ```
//! use grid_ccg::core::UnitId;
//!
//! let id = UnitId::new(3);
//! assert_eq!(id.raw(), 3);
//! assert!(id.is_assigned());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a spawned unit.
///
/// Assigned by the board on placement; unique per spawn for the
/// lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Sentinel for a unit that has not been placed yet.
    pub const UNASSIGNED: UnitId = UnitId(0);

    /// Create a unit ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this id has been assigned by a board.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Unique identifier for a card instance in hand.
///
/// A fresh id is minted every time a card is drawn, so two copies of
/// the same card definition are distinguishable in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandCardId(pub u64);

impl HandCardId {
    /// Create a hand card ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for HandCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HandCard({})", self.0)
    }
}
