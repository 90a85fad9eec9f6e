//! Card system: static templates and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: identifier for card definitions
//! - `CardDefinition`: static template (cost, element, payload)
//! - `CardKind`: category payload (unit profile, effect, or land)
//! - `CardCatalog`: definition lookup by id and name
//!
//! Definitions are templates; the live things they produce (units,
//! terrain) live in the `units` and `lands` modules.

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{CardCategory, CardDefinition, CardId, CardKind, UnitProfile};
