//! # grid-ccg
//!
//! A turn-based tactics/card-game engine: an 8x8 board of reactive
//! terrain, units with stats and abilities, a four-phase turn cycle,
//! and a deterministic effect-propagation protocol.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: The board owns unit positions, the occupancy
//!    index, and the land grid. Entities request changes through board
//!    methods; reactions are data the board dispatches, never foreign
//!    writes into board collections.
//!
//! 2. **One trigger channel**: Land effects fire from exactly one
//!    place, the board's deferred trigger queue, so one logical
//!    move can never apply a land twice.
//!
//! 3. **Deterministic by construction**: Seeded RNG, FIFO trigger
//!    drains at well-defined checkpoints, and synchronous
//!    registration-ordered event dispatch. No host-runtime timers.
//!
//! ## Architecture
//!
//! - Legality is checked (`can_move_to`, `can_attack`) and surfaced
//!   as booleans; illegal requests are no-ops, never panics.
//! - Every state-changing action emits a [`events::BoardEvent`];
//!   renderers and tests subscribe through `Board::on` or replay
//!   `Board::history`.
//! - Exit effects run synchronously inside the move that vacates a
//!   cell; enter effects are deferred until the outermost public call
//!   completes, then drained FIFO.
//!
//! ## Modules
//!
//! - `core`: ids, positions, elements/resources, teams, phases, RNG
//! - `events`: publish/subscribe bus and typed event payloads
//! - `units`: stats, abilities, live units
//! - `lands`: terrain definitions and the 64-cell grid
//! - `cards`: card templates and the catalog
//! - `board`: the board state machine and effect propagation
//! - `decks`: deck-list resolution against the catalog

pub mod board;
pub mod cards;
pub mod core;
pub mod decks;
pub mod events;
pub mod lands;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    Element, GameRng, HandCardId, Phase, Position, ResourceCost, ResourcePool, Team, UnitId,
    BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT,
};

pub use crate::events::{
    BoardEvent, BoardEventKind, Event, EventBus, ListenerId, UnitEvent, UnitEventKind,
};

pub use crate::units::{Ability, AbilityEffect, StatPatch, Stats, Unit, UnitCategory, MAX_DODGE};

pub use crate::lands::{Land, LandEffect, LandGrid, LandId};

pub use crate::cards::{CardCatalog, CardCategory, CardDefinition, CardId, CardKind, UnitProfile};

pub use crate::board::{Board, HandCard, PlayTarget};

pub use crate::decks::{build_deck, build_shuffled_deck, DeckError};
