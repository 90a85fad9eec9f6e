//! Core model types: ids, coordinates, elements, teams, phases, RNG.
//!
//! Everything here is a leaf with no dependencies on the rest of the
//! crate. The board and entity modules build on these.

pub mod element;
pub mod entity;
pub mod phase;
pub mod position;
pub mod rng;
pub mod team;

pub use element::{CostList, Element, ResourceCost, ResourcePool};
pub use entity::{HandCardId, UnitId};
pub use phase::Phase;
pub use position::{Position, BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT};
pub use rng::GameRng;
pub use team::Team;
