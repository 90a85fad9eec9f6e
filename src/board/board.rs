//! The game board: spatial state, turn cycle, and effect dispatch.
//!
//! The board is the single writer of unit positions, the occupancy
//! index, and the land grid. Units and lands own their stat/identity
//! fields, but every board-level mutation goes through a board method;
//! reactions signal intent as data and the board performs the write.
//!
//! ## Dispatch discipline
//!
//! Every state-changing action emits exactly one board event. Exit
//! effects of a vacated land run synchronously inside the move; enter
//! effects of the destination land are deferred onto a FIFO queue and
//! drained when the outermost public call finishes its own work, but
//! before any subsequent player-visible action is accepted. Land
//! triggering flows through this one channel only, so one logical
//! move can never fire a land twice.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId, CardKind};
use crate::core::{
    Element, GameRng, HandCardId, Phase, Position, ResourcePool, Team, UnitId,
};
use crate::events::{BoardEvent, BoardEventKind, EventBus, ListenerId, UnitEvent};
use crate::lands::{self, Land, LandEffect, LandGrid};
use crate::units::{AbilityEffect, StatPatch, Unit};

use super::triggers::{AppliedLandEffect, EffectLedger, PendingEnter, ReleaseOn, TriggerQueue};

/// A card instance in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    /// Instance id, fresh per draw.
    pub id: HandCardId,
    /// The definition this instance was drawn from.
    pub card: CardId,
}

/// Target of a card play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayTarget {
    /// Spawn a unit card here, for this team.
    Summon { pos: Position, team: Team },
    /// Apply a spell/artifact effect to this unit.
    Unit(UnitId),
    /// Place a land card on this cell.
    Cell(Position),
}

/// The game board.
pub struct Board {
    units: Vec<Unit>,
    /// Occupancy index; kept consistent with `units` in the same call
    /// as every position write.
    pos_index: FxHashMap<Position, UnitId>,
    grid: LandGrid,
    turn: u32,
    phase: Phase,
    resources: ResourcePool,
    /// Top of the deck is the end of the vec.
    deck: Vec<CardId>,
    hand: Vec<HandCard>,
    catalog: CardCatalog,
    bus: EventBus<BoardEvent>,
    /// Every emitted board event, in order, for late-attaching
    /// observers.
    history: Vector<BoardEvent>,
    queue: TriggerQueue,
    ledger: EffectLedger,
    rng: GameRng,
    next_unit_id: u32,
    next_hand_id: u64,
}

impl Board {
    /// Create a board with the built-in card set and randomly
    /// generated default terrain.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(seed, CardCatalog::builtin())
    }

    /// Create a board with a custom card catalog.
    #[must_use]
    pub fn with_catalog(seed: u64, catalog: CardCatalog) -> Self {
        let mut rng = GameRng::new(seed);
        let grid = LandGrid::generate(&mut rng, &lands::catalog::terrain_pool());
        Self {
            units: Vec::new(),
            pos_index: FxHashMap::default(),
            grid,
            turn: 0,
            phase: Phase::Draw,
            resources: ResourcePool::new(),
            deck: Vec::new(),
            hand: Vec::new(),
            catalog,
            bus: EventBus::new(),
            history: Vector::new(),
            queue: TriggerQueue::default(),
            ledger: EffectLedger::default(),
            rng,
            next_unit_id: 1,
            next_hand_id: 1,
        }
    }

    // === Accessors ===

    /// Current turn number. Starts at 0; the first Draw entry makes
    /// it 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Elemental resource pools.
    #[must_use]
    pub fn resources(&self) -> &ResourcePool {
        &self.resources
    }

    /// The land grid.
    #[must_use]
    pub fn grid(&self) -> &LandGrid {
        &self.grid
    }

    /// All units currently tracked by the board.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The hand.
    #[must_use]
    pub fn hand(&self) -> &[HandCard] {
        &self.hand
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// The card catalog this board plays from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Every board event emitted so far, in emission order.
    #[must_use]
    pub fn history(&self) -> &Vector<BoardEvent> {
        &self.history
    }

    /// Look up a unit by id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id() == id)
    }

    /// Mutable unit access, for stat updates and subscriptions.
    ///
    /// Position and identity stay board-written: `Unit` exposes no
    /// public way to change them.
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id() == id)
    }

    /// The unit occupying a cell, if any.
    #[must_use]
    pub fn unit_at(&self, pos: Position) -> Option<&Unit> {
        let id = *self.pos_index.get(&pos)?;
        self.unit(id)
    }

    // === Subscription ===

    /// Subscribe to board events.
    pub fn on(
        &self,
        kind: BoardEventKind,
        callback: impl FnMut(&BoardEvent) + 'static,
    ) -> ListenerId {
        self.bus.on(kind, callback)
    }

    /// Subscribe for a single invocation.
    pub fn once(
        &self,
        kind: BoardEventKind,
        callback: impl FnMut(&BoardEvent) + 'static,
    ) -> ListenerId {
        self.bus.once(kind, callback)
    }

    /// Remove a subscription.
    pub fn off(&self, id: ListenerId) -> bool {
        self.bus.off(id)
    }

    // === Legality ===

    /// Whether a unit may move to `target`: the unit is on-board, the
    /// target is in bounds, within movement range (distance equal to
    /// movement is legal), and unoccupied by anyone.
    #[must_use]
    pub fn can_move_to(&self, id: UnitId, target: Position) -> bool {
        let Some(unit) = self.unit(id) else {
            return false;
        };
        let Some(pos) = unit.pos() else {
            return false;
        };
        if !target.in_bounds() {
            return false;
        }
        if pos.manhattan(target) > unit.stats.movement {
            return false;
        }
        !self.pos_index.contains_key(&target)
    }

    /// Whether a unit may attack the occupant of `target_pos`: there
    /// must be an enemy unit there, within the attacker's range.
    #[must_use]
    pub fn can_attack(&self, id: UnitId, target_pos: Position) -> bool {
        let Some(attacker) = self.unit(id) else {
            return false;
        };
        let Some(pos) = attacker.pos() else {
            return false;
        };
        if !target_pos.in_bounds() {
            return false;
        }
        let Some(target) = self.unit_at(target_pos) else {
            return false;
        };
        if target.team == attacker.team {
            return false;
        }
        pos.manhattan(target_pos) <= attacker.stats.range
    }

    // === Unit lifecycle ===

    /// Place a unit on the board.
    ///
    /// Legal only onto a valid, unoccupied cell, for a unit not
    /// already placed. Allocates a fresh id, emits `UnitSpawned`, and
    /// defers the destination land's enter effect until this call's
    /// own work is done.
    ///
    /// Returns the assigned id, or `None` if the placement was
    /// illegal.
    pub fn place_unit(&mut self, mut unit: Unit, pos: Position) -> Option<UnitId> {
        if unit.pos().is_some() {
            return None;
        }
        if !pos.in_bounds() || self.pos_index.contains_key(&pos) {
            return None;
        }

        let id = UnitId::new(self.next_unit_id);
        self.next_unit_id += 1;
        unit.set_id(id);
        unit.set_pos(Some(pos));
        self.units.push(unit);
        self.pos_index.insert(pos, id);
        self.debug_check_occupancy();

        self.emit_board(BoardEvent::UnitSpawned { unit: id, pos });
        self.queue.push(PendingEnter { unit: id, pos });
        self.flush_triggers();
        Some(id)
    }

    /// Move a unit.
    ///
    /// Re-validates legality, then atomically updates position and
    /// index, emits the move on both channels, applies the vacated
    /// land's exit effects synchronously, and defers the destination
    /// land's enter effect.
    pub fn move_unit(&mut self, id: UnitId, new_pos: Position) -> bool {
        // Never trust a stale legality check.
        if !self.can_move_to(id, new_pos) {
            return false;
        }
        let Some(index) = self.unit_index(id) else {
            return false;
        };
        let Some(from) = self.units[index].pos() else {
            return false;
        };

        self.units[index].set_pos(Some(new_pos));
        self.units[index].has_moved = true;
        self.pos_index.remove(&from);
        self.pos_index.insert(new_pos, id);
        self.debug_check_occupancy();

        self.emit_board(BoardEvent::UnitMoved {
            unit: id,
            to: new_pos,
            from,
        });
        self.units[index].emit(&UnitEvent::Moved { to: new_pos, from });

        self.release_exit_effects(id, from);

        self.queue.push(PendingEnter {
            unit: id,
            pos: new_pos,
        });
        self.flush_triggers();
        true
    }

    /// Remove a unit from the board. No-op (false) if it is not
    /// present.
    pub fn delete_unit(&mut self, id: UnitId) -> bool {
        let Some(index) = self.unit_index(id) else {
            return false;
        };
        self.ledger.drop_unit(id);
        let unit = self.units.remove(index);
        if let Some(pos) = unit.pos() {
            self.pos_index.remove(&pos);
        }
        self.debug_check_occupancy();
        self.emit_board(BoardEvent::UnitDeleted { unit: id });
        true
    }

    /// Execute an attack against the occupant of `target_pos`.
    ///
    /// False if illegal. A legal attack marks the attacker as having
    /// attacked; the defender's dodge (percent) may negate the hit. A
    /// defender reduced to 0 HP is deleted.
    pub fn attack(&mut self, attacker_id: UnitId, target_pos: Position) -> bool {
        if !self.can_attack(attacker_id, target_pos) {
            return false;
        }
        let Some(attacker) = self.unit(attacker_id) else {
            return false;
        };
        let atk = attacker.stats.atk;
        let Some(target) = self.unit_at(target_pos) else {
            return false;
        };
        let target_id = target.id();
        let dodge = target.stats.dodge.unwrap_or(0);

        if let Some(unit) = self.unit_mut(attacker_id) {
            unit.has_attacked = true;
        }

        let dodged = dodge > 0 && self.rng.gen_range_u32(0..100) < dodge;
        if dodged {
            return true;
        }

        let current = self.unit(target_id).map_or(0, |u| u.stats.current_hp);
        let new_hp = current.saturating_sub(atk);
        if let Some(unit) = self.unit_mut(target_id) {
            unit.update_stats(StatPatch::new().with_current_hp(new_hp));
        }
        if new_hp == 0 {
            self.delete_unit(target_id);
        }
        true
    }

    // === Turn cycle ===

    /// Advance to the next phase.
    ///
    /// Entering Draw starts a new turn: the counter increments,
    /// turn-start is broadcast (board, then every unit), expired trap
    /// holds are released and spent traps retire, and one card is
    /// drawn (empty deck: no-op). Entering Main clears every unit's
    /// acted markers. Entering End emits turn-end and regenerates
    /// every wounded unit by 1 HP.
    pub fn advance_phase(&mut self) {
        self.phase = self.phase.next();

        if self.phase == Phase::Draw {
            self.turn += 1;
            self.emit_board(BoardEvent::TurnStarted { turn: self.turn });
            self.process_turn_start();
            self.draw_into_hand();
        }

        self.emit_board(BoardEvent::PhaseChanged { phase: self.phase });

        match self.phase {
            Phase::Main => {
                for unit in &mut self.units {
                    unit.has_moved = false;
                    unit.has_attacked = false;
                }
            }
            Phase::End => {
                self.emit_board(BoardEvent::TurnEnded { turn: self.turn });
                self.regenerate_units();
            }
            _ => {}
        }

        self.flush_triggers();
    }

    /// Force the turn to end outside the phase cycle: increments the
    /// counter, emits turn-end, and regenerates wounded units.
    ///
    /// Reserved for forced termination; `advance_phase` never calls
    /// this, so the counter cannot double-increment.
    pub fn end_turn(&mut self) {
        self.turn += 1;
        self.emit_board(BoardEvent::TurnEnded { turn: self.turn });
        self.regenerate_units();
        self.flush_triggers();
    }

    // === Cards, lands, resources ===

    /// Set the deck. Top of the deck is the end of the list.
    pub fn set_deck(&mut self, deck: Vec<CardId>) {
        self.deck = deck;
    }

    /// Shuffle the deck with the board's RNG.
    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(&mut self.deck);
    }

    /// Draw the top card into the hand with a fresh instance id.
    /// Returns false (and emits nothing) on an empty deck.
    pub fn draw_card(&mut self) -> bool {
        self.draw_into_hand()
    }

    /// Replace the land at a cell. False for out-of-bounds positions.
    pub fn play_land(&mut self, land: Land, pos: Position) -> bool {
        if !pos.in_bounds() {
            return false;
        }
        let land_id = land.id;
        self.grid.replace(pos, land);
        self.emit_board(BoardEvent::LandsChanged { pos, land: land_id });
        true
    }

    /// Add elemental power and announce the new total.
    pub fn gain_resources(&mut self, element: Element, amount: u32) {
        let total = self.resources.add(element, amount);
        self.emit_board(BoardEvent::ResourcesChanged { element, total });
    }

    /// Play a card from hand at the given target.
    ///
    /// Checks and spends the elemental cost first; on any precondition
    /// failure nothing changes and the card stays in hand. A unit card
    /// needs a `Summon` target, an effect card a `Unit` target, a land
    /// card a `Cell` target.
    pub fn play_card(&mut self, hand_index: usize, target: PlayTarget) -> bool {
        let Some(hand_card) = self.hand.get(hand_index) else {
            return false;
        };
        let Some(def) = self.catalog.get(hand_card.card) else {
            return false;
        };
        let def = def.clone();
        if !self.resources.can_afford(&def.cost) {
            return false;
        }

        match (def.kind, target) {
            (CardKind::Unit(profile), PlayTarget::Summon { pos, team }) => {
                if !pos.in_bounds() || self.pos_index.contains_key(&pos) {
                    return false;
                }
                self.resources.spend(&def.cost);
                self.hand.remove(hand_index);
                self.place_unit(profile.spawn(team), pos).is_some()
            }
            (CardKind::Effect(effect), PlayTarget::Unit(target_id)) => {
                if self.unit(target_id).is_none() {
                    return false;
                }
                self.resources.spend(&def.cost);
                self.hand.remove(hand_index);
                self.apply_effect(&effect, target_id);
                self.flush_triggers();
                true
            }
            (CardKind::Land(land), PlayTarget::Cell(pos)) => {
                if !pos.in_bounds() {
                    return false;
                }
                self.resources.spend(&def.cost);
                self.hand.remove(hand_index);
                self.play_land(land, pos)
            }
            _ => false,
        }
    }

    /// Invoke one of a unit's abilities by name on a target.
    ///
    /// An unknown name, a passive ability, a missing target, or an
    /// unpayable cost all leave the board untouched.
    pub fn use_ability(&mut self, caster: UnitId, name: &str, target: UnitId) -> bool {
        let Some(unit) = self.unit(caster) else {
            return false;
        };
        // Name lookup failure is a silent no-op.
        let Some(ability) = unit.ability(name) else {
            return false;
        };
        if ability.passive {
            return false;
        }
        let cost = ability.cost.clone();
        let effect = ability.effect.clone();

        if self.unit(target).is_none() {
            return false;
        }
        if !self.resources.spend(&cost) {
            return false;
        }
        self.apply_effect(&effect, target);
        self.flush_triggers();
        true
    }

    // === Internals ===

    fn unit_index(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|u| u.id() == id)
    }

    fn emit_board(&mut self, event: BoardEvent) {
        self.history.push_back(event.clone());
        self.bus.emit(&event);
    }

    fn draw_into_hand(&mut self) -> bool {
        let Some(card) = self.deck.pop() else {
            return false;
        };
        let hand_card = HandCardId::new(self.next_hand_id);
        self.next_hand_id += 1;
        self.hand.push(HandCard {
            id: hand_card,
            card,
        });
        self.emit_board(BoardEvent::CardDrawn { card, hand_card });
        true
    }

    /// Drain the deferred enter-trigger queue, FIFO. No-op while a
    /// drain is already running; the outer loop picks up anything the
    /// inner work enqueued.
    fn flush_triggers(&mut self) {
        if self.queue.draining {
            return;
        }
        self.queue.draining = true;
        while let Some(trigger) = self.queue.pop() {
            self.apply_enter_effect(trigger.unit, trigger.pos);
        }
        self.queue.draining = false;
    }

    fn apply_enter_effect(&mut self, unit_id: UnitId, pos: Position) {
        let Some(effect) = self.grid.get(pos).map(|land| land.effect.clone()) else {
            return;
        };
        let Some(unit) = self.unit(unit_id) else {
            return;
        };
        // The trigger may be stale: the unit can have moved or died
        // between enqueue and drain.
        if unit.pos() != Some(pos) {
            return;
        }
        let stats = unit.stats;
        let snared = unit.is_snared();

        match effect {
            LandEffect::None => {}
            LandEffect::SuppressDodge => {
                let Some(dodge) = stats.dodge else {
                    return;
                };
                if self.ledger.is_applied(unit_id, pos) {
                    return;
                }
                self.ledger.record(AppliedLandEffect {
                    unit: unit_id,
                    pos,
                    undo: StatPatch::new().with_dodge(dodge),
                    release: ReleaseOn::Exit,
                });
                if let Some(unit) = self.unit_mut(unit_id) {
                    unit.update_stats(StatPatch::new().with_dodge(0));
                }
            }
            LandEffect::Ensnare => {
                if snared || self.ledger.is_applied(unit_id, pos) {
                    return;
                }
                self.ledger.record(AppliedLandEffect {
                    unit: unit_id,
                    pos,
                    undo: StatPatch::new()
                        .with_movement(stats.movement)
                        .with_atk(stats.atk),
                    release: ReleaseOn::TurnStart,
                });
                self.ledger.note_spent_trap(pos);
                if let Some(unit) = self.unit_mut(unit_id) {
                    unit.snared = true;
                    unit.update_stats(StatPatch::new().with_movement(0).with_atk(0));
                }
            }
            LandEffect::HealOnEnter { amount } => {
                let healed = stats.current_hp.saturating_add(amount);
                if let Some(unit) = self.unit_mut(unit_id) {
                    unit.update_stats(StatPatch::new().with_current_hp(healed));
                }
            }
        }
    }

    /// Apply an ability/spell effect to a live target. A target
    /// reduced to 0 HP is deleted.
    fn apply_effect(&mut self, effect: &AbilityEffect, target_id: UnitId) {
        let Some(target) = self.unit(target_id) else {
            return;
        };
        let stats = target.stats;
        let patch = match effect {
            AbilityEffect::Heal { amount } => {
                StatPatch::new().with_current_hp(stats.current_hp.saturating_add(*amount))
            }
            AbilityEffect::Strike { amount } => {
                StatPatch::new().with_current_hp(stats.current_hp.saturating_sub(*amount))
            }
            AbilityEffect::Fortify { dodge_bonus } => match stats.dodge {
                Some(dodge) => StatPatch::new().with_dodge(dodge.saturating_add(*dodge_bonus)),
                None => return,
            },
            AbilityEffect::Adjust(patch) => *patch,
        };
        if let Some(unit) = self.unit_mut(target_id) {
            unit.update_stats(patch);
        }
        let dead = self
            .unit(target_id)
            .is_some_and(|u| u.stats.current_hp == 0);
        if dead {
            self.delete_unit(target_id);
        }
    }

    fn release_exit_effects(&mut self, id: UnitId, pos: Position) {
        for record in self.ledger.take_exit(id, pos) {
            if let Some(unit) = self.unit_mut(id) {
                unit.update_stats(record.undo);
            }
        }
    }

    fn process_turn_start(&mut self) {
        for unit in &self.units {
            unit.emit(&UnitEvent::TurnStarted);
        }

        // Release trap holds.
        for record in self.ledger.take_turn_start() {
            if let Some(unit) = self.unit_mut(record.unit) {
                unit.snared = false;
                unit.update_stats(record.undo);
            }
        }

        // Retire spent traps to default terrain. A cell that was
        // re-landed in the meantime is left alone.
        for pos in self.ledger.take_spent_traps() {
            let still_transient = self.grid.get(pos).is_some_and(|land| land.transient);
            if still_transient {
                let land = lands::catalog::default_terrain();
                let land_id = land.id;
                self.grid.replace(pos, land);
                self.emit_board(BoardEvent::LandsChanged { pos, land: land_id });
            }
        }
    }

    fn regenerate_units(&mut self) {
        let wounded: Vec<(UnitId, u32)> = self
            .units
            .iter()
            .filter(|u| !u.stats.at_full_health())
            .map(|u| (u.id(), u.stats.current_hp + 1))
            .collect();
        for (id, hp) in wounded {
            if let Some(unit) = self.unit_mut(id) {
                unit.update_stats(StatPatch::new().with_current_hp(hp));
            }
        }
    }

    fn debug_check_occupancy(&self) {
        #[cfg(debug_assertions)]
        {
            let on_board = self.units.iter().filter(|u| u.pos().is_some()).count();
            debug_assert_eq!(
                self.pos_index.len(),
                on_board,
                "occupancy index out of sync with unit collection"
            );
            for unit in &self.units {
                if let Some(pos) = unit.pos() {
                    debug_assert_eq!(
                        self.pos_index.get(&pos).copied(),
                        Some(unit.id()),
                        "occupancy index mismatch at {pos}"
                    );
                }
            }
        }
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("turn", &self.turn)
            .field("phase", &self.phase)
            .field("units", &self.units.len())
            .field("deck", &self.deck.len())
            .field("hand", &self.hand.len())
            .finish()
    }
}
