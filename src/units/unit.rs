//! Live units: heroes and companions on (or about to enter) the board.
//!
//! A `Unit` owns its identity fields, stats, and ability list, plus an
//! event bus observers can subscribe to. It does NOT own its board
//! relationships: `id` and `pos` are board-written, readable by
//! anyone but assignable only by the board, so no caller can desync
//! the occupancy index by poking a position directly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Element, Position, Team, UnitId};
use crate::events::{EventBus, ListenerId, UnitEvent, UnitEventKind};

use super::ability::Ability;
use super::stats::{StatPatch, Stats};

/// Hero or companion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCategory {
    Hero,
    Companion,
}

/// A stat-bearing combatant.
#[derive(Debug, Serialize, Deserialize)]
pub struct Unit {
    /// Board-assigned identity; `UnitId::UNASSIGNED` until placed.
    id: UnitId,
    pub name: String,
    pub category: UnitCategory,
    pub element: Element,
    pub team: Team,
    pub stats: Stats,
    /// Current cell; `None` while off-board.
    pos: Option<Position>,
    /// Set when the unit moves; cleared when the Main phase begins.
    pub has_moved: bool,
    /// Set when the unit attacks; cleared when the Main phase begins.
    pub has_attacked: bool,
    /// Set while a trap effect holds this unit; blocks re-application
    /// and clears on the next turn start.
    pub(crate) snared: bool,
    abilities: SmallVec<[Ability; 4]>,
    #[serde(skip)]
    bus: EventBus<UnitEvent>,
}

impl Unit {
    /// Create an unplaced unit. The board assigns the id on placement.
    pub fn new(
        name: impl Into<String>,
        category: UnitCategory,
        element: Element,
        team: Team,
        stats: Stats,
    ) -> Self {
        Self {
            id: UnitId::UNASSIGNED,
            name: name.into(),
            category,
            element,
            team,
            stats,
            pos: None,
            has_moved: false,
            has_attacked: false,
            snared: false,
            abilities: SmallVec::new(),
            bus: EventBus::new(),
        }
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// This unit's board-assigned id.
    #[must_use]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Current cell; `None` while off-board.
    #[must_use]
    pub fn pos(&self) -> Option<Position> {
        self.pos
    }

    pub(crate) fn set_id(&mut self, id: UnitId) {
        self.id = id;
    }

    pub(crate) fn set_pos(&mut self, pos: Option<Position>) {
        self.pos = pos;
    }

    /// Whether this unit is a hero.
    #[must_use]
    pub fn is_hero(&self) -> bool {
        self.category == UnitCategory::Hero
    }

    /// Whether this unit is a companion.
    #[must_use]
    pub fn is_companion(&self) -> bool {
        self.category == UnitCategory::Companion
    }

    /// Whether a trap effect currently holds this unit.
    #[must_use]
    pub fn is_snared(&self) -> bool {
        self.snared
    }

    /// Look up an ability by name. Missing names return `None`; the
    /// caller treats that as a no-op.
    #[must_use]
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.name == name)
    }

    /// Iterate this unit's abilities in declaration order.
    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

    /// Merge a stat patch.
    ///
    /// Emits `StatsUpdated` with the requested patch before committing
    /// the merged values; clamping (`current_hp`, dodge) happens as
    /// part of the commit.
    pub fn update_stats(&mut self, patch: StatPatch) {
        self.bus.emit(&UnitEvent::StatsUpdated { patch });
        self.stats.apply(&patch);
    }

    /// Subscribe to this unit's events.
    pub fn on(&self, kind: UnitEventKind, callback: impl FnMut(&UnitEvent) + 'static) -> ListenerId {
        self.bus.on(kind, callback)
    }

    /// Subscribe for a single invocation.
    pub fn once(
        &self,
        kind: UnitEventKind,
        callback: impl FnMut(&UnitEvent) + 'static,
    ) -> ListenerId {
        self.bus.once(kind, callback)
    }

    /// Remove a subscription.
    pub fn off(&self, id: ListenerId) -> bool {
        self.bus.off(id)
    }

    pub(crate) fn emit(&self, event: &UnitEvent) {
        self.bus.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn hero() -> Unit {
        Unit::new(
            "Ryuu",
            UnitCategory::Hero,
            Element::Primordial,
            Team::new(0),
            Stats::hero(20, 2, 2, 2, 11),
        )
    }

    #[test]
    fn test_new_unit_is_off_board() {
        let unit = hero();
        assert_eq!(unit.id(), UnitId::UNASSIGNED);
        assert_eq!(unit.pos(), None);
        assert!(!unit.has_moved);
        assert!(!unit.has_attacked);
        assert!(!unit.is_snared());
    }

    #[test]
    fn test_category_checks() {
        assert!(hero().is_hero());

        let companion = Unit::new(
            "Moss Sentinel",
            UnitCategory::Companion,
            Element::Sylvester,
            Team::new(1),
            Stats::companion(8, 2, 1, 2),
        );
        assert!(companion.is_companion());
        assert!(!companion.is_hero());
    }

    #[test]
    fn test_ability_lookup() {
        use crate::units::{Ability, AbilityEffect};

        let unit = hero().with_ability(Ability::new("heal", AbilityEffect::Heal { amount: 2 }));

        assert!(unit.ability("heal").is_some());
        assert!(unit.ability("smite").is_none());
        assert_eq!(unit.abilities().count(), 1);
    }

    #[test]
    fn test_update_stats_emits_before_commit() {
        let mut unit = hero();

        let observed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&observed);
        unit.on(UnitEventKind::StatsUpdated, move |event| {
            if let UnitEvent::StatsUpdated { patch } = event {
                *sink.borrow_mut() = Some(*patch);
            }
        });

        unit.update_stats(StatPatch::new().with_current_hp(15));

        assert_eq!(unit.stats.current_hp, 15);
        assert_eq!(
            observed.borrow().unwrap(),
            StatPatch::new().with_current_hp(15)
        );
    }

    #[test]
    fn test_update_stats_clamps_dodge() {
        let mut unit = hero();
        unit.update_stats(StatPatch::new().with_dodge(99));
        assert_eq!(unit.stats.dodge, Some(crate::units::MAX_DODGE));
    }

    #[test]
    fn test_serialization_skips_bus() {
        let unit = hero();
        let json = serde_json::to_string(&unit).unwrap();
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Ryuu");
        assert_eq!(back.stats, unit.stats);
    }
}
