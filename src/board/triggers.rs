//! Deferred land triggers and the applied-effect ledger.
//!
//! Land-enter reactions never run nested inside the placement or move
//! that caused them: the board enqueues a [`PendingEnter`] and drains
//! the queue (FIFO) once the outermost public call has finished its
//! own synchronous work. The queue replaces host-runtime timer
//! scheduling with deterministic, testable ordering.
//!
//! The ledger records every stat-mutating land application together
//! with the values needed to undo it. Applications are keyed by
//! (unit, cell): a second application for the same key is skipped, so
//! re-delivery of a trigger cannot stack a penalty.

use std::collections::VecDeque;

use crate::core::{Position, UnitId};
use crate::units::StatPatch;

/// A land-enter trigger waiting for the current action to finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingEnter {
    pub unit: UnitId,
    pub pos: Position,
}

/// FIFO queue of deferred enter triggers.
///
/// `draining` is the reentrancy guard: a drain requested while a
/// drain is running is a no-op, the outer loop picks up whatever the
/// inner work enqueued.
#[derive(Debug, Default)]
pub(crate) struct TriggerQueue {
    pending: VecDeque<PendingEnter>,
    pub draining: bool,
}

impl TriggerQueue {
    pub fn push(&mut self, trigger: PendingEnter) {
        self.pending.push_back(trigger);
    }

    pub fn pop(&mut self) -> Option<PendingEnter> {
        self.pending.pop_front()
    }
}

/// When an applied land effect is undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReleaseOn {
    /// Undo when the unit leaves the cell.
    Exit,
    /// Undo at the next turn start (traps).
    TurnStart,
}

/// One stat-mutating land application, with its undo values.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AppliedLandEffect {
    pub unit: UnitId,
    pub pos: Position,
    /// Pre-effect values to restore on release.
    pub undo: StatPatch,
    pub release: ReleaseOn,
}

/// Board-owned bookkeeping for reversible land effects and spent traps.
#[derive(Debug, Default)]
pub(crate) struct EffectLedger {
    applied: Vec<AppliedLandEffect>,
    /// Cells whose trap has fired and retires at the next turn start.
    spent_traps: Vec<Position>,
}

impl EffectLedger {
    /// Whether an application is already recorded for (unit, cell).
    pub fn is_applied(&self, unit: UnitId, pos: Position) -> bool {
        self.applied
            .iter()
            .any(|e| e.unit == unit && e.pos == pos)
    }

    pub fn record(&mut self, effect: AppliedLandEffect) {
        self.applied.push(effect);
    }

    /// Remove and return the exit-released records for a unit leaving
    /// a cell.
    pub fn take_exit(&mut self, unit: UnitId, pos: Position) -> Vec<AppliedLandEffect> {
        self.take_matching(|e| e.unit == unit && e.pos == pos && e.release == ReleaseOn::Exit)
    }

    /// Remove and return every turn-start-released record.
    pub fn take_turn_start(&mut self) -> Vec<AppliedLandEffect> {
        self.take_matching(|e| e.release == ReleaseOn::TurnStart)
    }

    fn take_matching(
        &mut self,
        predicate: impl Fn(&AppliedLandEffect) -> bool,
    ) -> Vec<AppliedLandEffect> {
        let mut taken = Vec::new();
        let mut i = 0;
        while i < self.applied.len() {
            if predicate(&self.applied[i]) {
                taken.push(self.applied.remove(i));
            } else {
                i += 1;
            }
        }
        taken
    }

    /// Drop every record for a unit that left the game. The undo
    /// values die with it; spent traps still retire on schedule.
    pub fn drop_unit(&mut self, unit: UnitId) {
        self.applied.retain(|e| e.unit != unit);
    }

    pub fn note_spent_trap(&mut self, pos: Position) {
        if !self.spent_traps.contains(&pos) {
            self.spent_traps.push(pos);
        }
    }

    /// Remove and return the cells whose traps retire now.
    pub fn take_spent_traps(&mut self) -> Vec<Position> {
        std::mem::take(&mut self.spent_traps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(unit: u32, x: u8, y: u8, release: ReleaseOn) -> AppliedLandEffect {
        AppliedLandEffect {
            unit: UnitId::new(unit),
            pos: Position::new(x, y),
            undo: StatPatch::new().with_dodge(11),
            release,
        }
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = TriggerQueue::default();
        queue.push(PendingEnter {
            unit: UnitId::new(1),
            pos: Position::new(0, 0),
        });
        queue.push(PendingEnter {
            unit: UnitId::new(2),
            pos: Position::new(1, 0),
        });

        assert_eq!(queue.pop().unwrap().unit, UnitId::new(1));
        assert_eq!(queue.pop().unwrap().unit, UnitId::new(2));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ledger_keyed_by_unit_and_cell() {
        let mut ledger = EffectLedger::default();
        ledger.record(effect(1, 2, 2, ReleaseOn::Exit));

        assert!(ledger.is_applied(UnitId::new(1), Position::new(2, 2)));
        assert!(!ledger.is_applied(UnitId::new(1), Position::new(2, 3)));
        assert!(!ledger.is_applied(UnitId::new(2), Position::new(2, 2)));
    }

    #[test]
    fn test_take_exit_leaves_turn_start_records() {
        let mut ledger = EffectLedger::default();
        ledger.record(effect(1, 2, 2, ReleaseOn::Exit));
        ledger.record(effect(1, 2, 2, ReleaseOn::TurnStart));

        let taken = ledger.take_exit(UnitId::new(1), Position::new(2, 2));
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].release, ReleaseOn::Exit);

        let rest = ledger.take_turn_start();
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_drop_unit() {
        let mut ledger = EffectLedger::default();
        ledger.record(effect(1, 0, 0, ReleaseOn::Exit));
        ledger.record(effect(2, 1, 0, ReleaseOn::Exit));

        ledger.drop_unit(UnitId::new(1));

        assert!(!ledger.is_applied(UnitId::new(1), Position::new(0, 0)));
        assert!(ledger.is_applied(UnitId::new(2), Position::new(1, 0)));
    }

    #[test]
    fn test_spent_traps_dedupe() {
        let mut ledger = EffectLedger::default();
        ledger.note_spent_trap(Position::new(3, 3));
        ledger.note_spent_trap(Position::new(3, 3));
        ledger.note_spent_trap(Position::new(4, 4));

        let traps = ledger.take_spent_traps();
        assert_eq!(traps.len(), 2);
        assert!(ledger.take_spent_traps().is_empty());
    }
}
