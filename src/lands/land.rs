//! Land definitions.
//!
//! A land is the terrain of exactly one board cell. Its reactive
//! behavior is described as data, a [`LandEffect`], and dispatched
//! by the board when a unit enters or leaves the cell. Lands do not
//! own listener registries; routing occupancy triggers through the
//! board's single channel is what keeps one logical move from firing
//! a land twice.

use serde::{Deserialize, Serialize};

use crate::core::Element;

/// Identifier for a land definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LandId(pub u16);

impl LandId {
    /// Create a land ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for LandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Land({})", self.0)
    }
}

/// What a land does to units occupying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandEffect {
    /// Inert terrain.
    None,
    /// Units on this cell cannot dodge: dodge is forced to 0 while
    /// present and restored when the unit leaves.
    SuppressDodge,
    /// Trap: the victim's movement and atk drop to 0 until the next
    /// turn start, at which point its stats are restored and the land
    /// retires to default terrain.
    Ensnare,
    /// Restore hit points on entry, capped at max HP.
    HealOnEnter { amount: u32 },
}

/// One terrain definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Land {
    pub id: LandId,
    pub name: String,
    pub element: Element,
    pub effect: LandEffect,
    /// Transient lands retire themselves after triggering (traps).
    pub transient: bool,
}

impl Land {
    /// Create a permanent land.
    pub fn new(id: LandId, name: impl Into<String>, element: Element, effect: LandEffect) -> Self {
        Self {
            id,
            name: name.into(),
            element,
            effect,
            transient: false,
        }
    }

    /// Mark as transient (builder pattern).
    #[must_use]
    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }
}
