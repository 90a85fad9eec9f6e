//! Property tests for the engine's core invariants.

use proptest::prelude::*;

use grid_ccg::core::{Element, Position, Team, CELL_COUNT};
use grid_ccg::units::{StatPatch, Stats, Unit, UnitCategory, MAX_DODGE};
use grid_ccg::Board;

fn arb_patch() -> impl Strategy<Value = StatPatch> {
    (
        proptest::option::of(0u32..200),
        proptest::option::of(0u32..200),
        proptest::option::of(0u32..50),
        proptest::option::of(0u32..50),
        proptest::option::of(0u32..50),
        proptest::option::of(0u32..100),
    )
        .prop_map(|(hp, current_hp, atk, range, movement, dodge)| {
            let mut patch = StatPatch::new();
            patch.hp = hp;
            patch.current_hp = current_hp;
            patch.atk = atk;
            patch.range = range;
            patch.movement = movement;
            patch.dodge = dodge;
            patch
        })
}

proptest! {
    /// After any sequence of stat updates, `0 <= current_hp <= hp`
    /// and hero dodge stays within `[0, MAX_DODGE]`.
    #[test]
    fn prop_stat_invariants_hold(patches in proptest::collection::vec(arb_patch(), 1..20)) {
        let mut stats = Stats::hero(20, 2, 2, 2, 11);
        for patch in &patches {
            stats.apply(patch);
            prop_assert!(stats.current_hp <= stats.hp);
            if let Some(dodge) = stats.dodge {
                prop_assert!(dodge <= MAX_DODGE);
            } else {
                prop_assert!(false, "hero dodge must stay present");
            }
        }
    }

    /// `can_move_to` agrees with the bounds/distance/occupancy
    /// definition for every cell on the board.
    #[test]
    fn prop_move_legality_matches_definition(
        x in 0u8..8, y in 0u8..8,
        tx in 0u8..10, ty in 0u8..10,
        movement in 0u32..6,
    ) {
        let mut board = Board::new(42);
        let unit = Unit::new(
            "Probe",
            UnitCategory::Companion,
            Element::Neutral,
            Team::new(0),
            Stats::companion(5, 1, 1, movement),
        );
        let from = Position::new(x, y);
        let target = Position::new(tx, ty);
        let id = board.place_unit(unit, from).unwrap();

        let expected = target.in_bounds()
            && from.manhattan(target) <= movement
            && board.unit_at(target).is_none();
        prop_assert_eq!(board.can_move_to(id, target), expected);
    }

    /// Any sequence of placements and moves keeps occupancy unique
    /// and the index consistent.
    #[test]
    fn prop_occupancy_stays_unique(
        ops in proptest::collection::vec((0u8..8, 0u8..8, any::<bool>()), 1..40)
    ) {
        let mut board = Board::new(42);
        let mut ids = Vec::new();

        for (x, y, place) in ops {
            let pos = Position::new(x, y);
            if place || ids.is_empty() {
                let unit = Unit::new(
                    "Probe",
                    UnitCategory::Companion,
                    Element::Neutral,
                    Team::new(0),
                    Stats::companion(5, 1, 1, 3),
                );
                if let Some(id) = board.place_unit(unit, pos) {
                    ids.push(id);
                }
            } else {
                let id = ids[(x as usize + y as usize) % ids.len()];
                board.move_unit(id, pos);
            }
        }

        let mut seen = std::collections::HashSet::new();
        for unit in board.units() {
            let pos = unit.pos().expect("tracked units are on-board");
            prop_assert!(seen.insert(pos), "two units share {}", pos);
            prop_assert_eq!(board.unit_at(pos).expect("index entry").id(), unit.id());
        }
    }

    /// Land churn never changes the cell count: every cell holds
    /// exactly one land after arbitrary plays and turn boundaries.
    #[test]
    fn prop_every_cell_keeps_a_land(
        plays in proptest::collection::vec((0u8..8, 0u8..8, any::<bool>()), 0..20)
    ) {
        let mut board = Board::new(42);
        for (x, y, trap) in plays {
            let land = if trap {
                grid_ccg::lands::catalog::bramble_snare()
            } else {
                grid_ccg::lands::catalog::vital_springs()
            };
            board.play_land(land, Position::new(x, y));
        }
        for _ in 0..4 {
            board.advance_phase();
        }

        prop_assert_eq!(board.grid().len(), CELL_COUNT);
        for pos in Position::all_cells() {
            prop_assert!(board.grid().get(pos).is_some());
        }
    }
}
