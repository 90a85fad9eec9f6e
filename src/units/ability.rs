//! Abilities: named, cost-gated effects owned by a unit.
//!
//! Abilities are invoked by name lookup on the owning unit; looking up
//! a name the unit does not have is a silent no-op at the call site.
//! Each unit owns its own ability list; there is no shared registry,
//! so nothing leaks between instances.
//!
//! The effect itself is data, applied by the board (see
//! `Board::use_ability`), not a closure.

use serde::{Deserialize, Serialize};

use crate::core::{CostList, Element, ResourceCost};

use super::stats::StatPatch;

/// What an ability (or spell) does to its target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Restore hit points, capped at max HP.
    Heal { amount: u32 },
    /// Deal direct damage.
    Strike { amount: u32 },
    /// Raise dodge; the stat clamp caps the result.
    Fortify { dodge_bonus: u32 },
    /// Arbitrary stat overwrite.
    Adjust(StatPatch),
}

/// A named ability entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Lookup name, unique within the owning unit.
    pub name: String,
    /// Elemental cost to invoke; empty = free.
    pub cost: CostList,
    /// The effect applied to the target.
    pub effect: AbilityEffect,
    /// Passive abilities cannot be actively invoked.
    pub passive: bool,
}

impl Ability {
    /// Create a free, active ability.
    pub fn new(name: impl Into<String>, effect: AbilityEffect) -> Self {
        Self {
            name: name.into(),
            cost: CostList::new(),
            effect,
            passive: false,
        }
    }

    /// Add a cost entry (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, element: Element, amount: u32) -> Self {
        self.cost.push(ResourceCost::new(element, amount));
        self
    }

    /// Mark as passive (builder pattern).
    #[must_use]
    pub fn passive(mut self) -> Self {
        self.passive = true;
        self
    }
}
