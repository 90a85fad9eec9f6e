//! Event payloads for the board and for individual units.
//!
//! Board-level and unit-level events are independent channels: a
//! board `UnitMoved` and a unit `Moved` are separate emissions, and
//! any wiring between levels is explicit and owned by the board.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{Element, HandCardId, Phase, Position, UnitId};
use crate::lands::LandId;
use crate::units::StatPatch;

use super::bus::Event;

/// Something that happened on the board.
///
/// Every state-changing board action emits exactly one of these. The
/// payload carries ids rather than references, so listeners look up
/// live state through the board if they need more than the event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A unit was placed on the board.
    UnitSpawned { unit: UnitId, pos: Position },
    /// A unit moved. Carries both endpoints of the move.
    UnitMoved {
        unit: UnitId,
        to: Position,
        from: Position,
    },
    /// A unit was removed from the board.
    UnitDeleted { unit: UnitId },
    /// A new turn began (the board just entered the Draw phase, or
    /// `end_turn` forced the counter forward).
    TurnStarted { turn: u32 },
    /// The current turn ended.
    TurnEnded { turn: u32 },
    /// The phase changed.
    PhaseChanged { phase: Phase },
    /// An elemental resource pool changed. Carries the new total.
    ResourcesChanged { element: Element, total: u32 },
    /// A card moved from deck to hand.
    CardDrawn { card: CardId, hand_card: HandCardId },
    /// The land at a cell was replaced.
    LandsChanged { pos: Position, land: LandId },
}

/// Subscription key for board events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardEventKind {
    UnitSpawned,
    UnitMoved,
    UnitDeleted,
    TurnStarted,
    TurnEnded,
    PhaseChanged,
    ResourcesChanged,
    CardDrawn,
    LandsChanged,
}

impl Event for BoardEvent {
    type Kind = BoardEventKind;

    fn kind(&self) -> BoardEventKind {
        match self {
            BoardEvent::UnitSpawned { .. } => BoardEventKind::UnitSpawned,
            BoardEvent::UnitMoved { .. } => BoardEventKind::UnitMoved,
            BoardEvent::UnitDeleted { .. } => BoardEventKind::UnitDeleted,
            BoardEvent::TurnStarted { .. } => BoardEventKind::TurnStarted,
            BoardEvent::TurnEnded { .. } => BoardEventKind::TurnEnded,
            BoardEvent::PhaseChanged { .. } => BoardEventKind::PhaseChanged,
            BoardEvent::ResourcesChanged { .. } => BoardEventKind::ResourcesChanged,
            BoardEvent::CardDrawn { .. } => BoardEventKind::CardDrawn,
            BoardEvent::LandsChanged { .. } => BoardEventKind::LandsChanged,
        }
    }
}

/// Something that happened to one unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum UnitEvent {
    /// Stats are about to change. Emitted before the merged values are
    /// committed; the payload is the requested patch.
    StatsUpdated { patch: StatPatch },
    /// A new turn began.
    TurnStarted,
    /// The unit moved.
    Moved { to: Position, from: Position },
}

/// Subscription key for unit events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitEventKind {
    StatsUpdated,
    TurnStarted,
    Moved,
}

impl Event for UnitEvent {
    type Kind = UnitEventKind;

    fn kind(&self) -> UnitEventKind {
        match self {
            UnitEvent::StatsUpdated { .. } => UnitEventKind::StatsUpdated,
            UnitEvent::TurnStarted => UnitEventKind::TurnStarted,
            UnitEvent::Moved { .. } => UnitEventKind::Moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_event_kinds() {
        let event = BoardEvent::UnitMoved {
            unit: UnitId::new(1),
            to: Position::new(1, 0),
            from: Position::new(0, 0),
        };
        assert_eq!(event.kind(), BoardEventKind::UnitMoved);

        let event = BoardEvent::PhaseChanged { phase: Phase::Main };
        assert_eq!(event.kind(), BoardEventKind::PhaseChanged);
    }

    #[test]
    fn test_unit_event_kinds() {
        assert_eq!(UnitEvent::TurnStarted.kind(), UnitEventKind::TurnStarted);
        let moved = UnitEvent::Moved {
            to: Position::new(2, 2),
            from: Position::new(1, 2),
        };
        assert_eq!(moved.kind(), UnitEventKind::Moved);
    }

    #[test]
    fn test_event_serialization() {
        let event = BoardEvent::TurnStarted { turn: 3 };
        let json = serde_json::to_string(&event).unwrap();
        let back: BoardEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
