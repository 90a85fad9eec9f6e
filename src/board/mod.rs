//! The board: spatial state, occupancy, the turn/phase cycle, and
//! the effect-propagation machinery.
//!
//! ## Key Types
//!
//! - [`Board`]: the single writer of unit positions and grid contents
//! - [`PlayTarget`]: what a card play aims at
//! - [`HandCard`]: a drawn card instance
//!
//! ## Effect propagation
//!
//! Occupancy changes trigger land effects in two steps: exit effects
//! run synchronously inside the move; enter effects are deferred onto
//! a FIFO queue drained when the outermost public call finishes. See
//! the `triggers` submodule for the queue and the applied-effect
//! ledger that keeps land effects idempotent and reversible.

mod board;
mod triggers;

pub use board::{Board, HandCard, PlayTarget};
