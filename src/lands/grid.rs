//! The 64-cell land grid.
//!
//! Every cell holds exactly one land at all times. There is no empty
//! state to represent: replacement writes the new land over the old
//! in place, so the invariant cannot be violated even mid-trigger.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Position, CELL_COUNT};

use super::land::Land;

/// Row-major grid of lands covering the whole board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandGrid {
    cells: Vec<Land>,
}

impl LandGrid {
    /// Fill the grid by drawing each cell's terrain from a pool.
    ///
    /// Panics if the pool is empty; a board cannot exist without
    /// terrain.
    #[must_use]
    pub fn generate(rng: &mut GameRng, pool: &[Land]) -> Self {
        assert!(!pool.is_empty(), "terrain pool must not be empty");
        let cells = (0..CELL_COUNT)
            .map(|_| rng.choose(pool).expect("non-empty pool").clone())
            .collect();
        Self { cells }
    }

    /// Fill every cell with the same land.
    #[must_use]
    pub fn uniform(land: Land) -> Self {
        Self {
            cells: vec![land; CELL_COUNT],
        }
    }

    /// The land at a cell; `None` only for out-of-bounds positions.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Land> {
        if pos.in_bounds() {
            Some(&self.cells[pos.cell_index()])
        } else {
            None
        }
    }

    /// Replace the land at a cell. Returns false for out-of-bounds
    /// positions; the grid is unchanged in that case.
    pub fn replace(&mut self, pos: Position, land: Land) -> bool {
        if !pos.in_bounds() {
            return false;
        }
        self.cells[pos.cell_index()] = land;
        true
    }

    /// Number of cells. Always `CELL_COUNT`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Land)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, land)| (Position::from_cell_index(i), land))
    }
}
