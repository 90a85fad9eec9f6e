//! Event system: a generic publish/subscribe bus plus the typed
//! payloads for board-level and unit-level channels.
//!
//! ## Key Components
//!
//! - [`EventBus`]: listener registry with synchronous, ordered,
//!   re-entrancy-safe dispatch and `once` support
//! - [`BoardEvent`] / [`UnitEvent`]: payloads, each with a kind enum
//!   used as the subscription key
//!
//! Land and card *reactions* do not flow through closure listeners;
//! they are data-described effects dispatched by the board through a
//! single trigger channel (see the `board` module). The buses exist
//! for external observers: renderers, loggers, tests.

pub mod bus;
pub mod event;

pub use bus::{Event, EventBus, ListenerId};
pub use event::{BoardEvent, BoardEventKind, UnitEvent, UnitEventKind};
