//! Units: stats, abilities, and the live `Unit` type.

pub mod ability;
pub mod stats;
pub mod unit;

pub use ability::{Ability, AbilityEffect};
pub use stats::{StatPatch, Stats, MAX_DODGE};
pub use unit::{Unit, UnitCategory};
