//! Occupancy grids: the agent's belief about the world.
//!
//! Everything outside this module talks to a grid through the
//! [`OccupancyGrid`] trait, so the storage can be swapped without touching
//! the scanner, planner or simulation loop.
//!
//! ## Storage
//!
//! ```text
//!               ┌──────────────────────┐
//!               │    OccupancyGrid     │  is_wall / is_known / mark
//!               └──────────┬───────────┘
//!              ┌───────────┴───────────┐
//!              ▼                       ▼
//!   ┌─────────────────────┐  ┌─────────────────────┐
//!   │     DenseGrid       │  │     SparseGrid      │
//!   │ flat Vec<u8>, O(1)  │  │ HashMap of known    │
//!   │ small bounded maps  │  │ cells, large maps   │
//!   └─────────────────────┘  └─────────────────────┘
//! ```
//!
//! ## Belief merge
//!
//! [`merge`] folds one scan's discoveries into a belief grid. Walls are
//! permanent: a discovered-empty cell never overwrites a wall, and nothing
//! turns a wall back into Unknown.

mod dense;
pub mod merge;
mod sparse;

pub use dense::DenseGrid;
pub use merge::{MergeResult, merge};
pub use sparse::SparseGrid;

use serde::{Deserialize, Serialize};

use crate::core::{CellType, GridCoord};

/// Belief grid used by the simulation loop unless told otherwise.
pub type BeliefMap = DenseGrid;

/// Occupancy query interface shared by all grid storages.
///
/// Coordinates outside the grid read as [`CellType::Unknown`] and writes to
/// them are ignored.
pub trait OccupancyGrid {
    /// Grid width in cells.
    fn width(&self) -> usize;

    /// Grid height in cells.
    fn height(&self) -> usize;

    /// Current state of a cell.
    fn get_type(&self, coord: GridCoord) -> CellType;

    /// Overwrite a cell. Returns true if the stored state changed.
    fn mark(&mut self, coord: GridCoord, cell_type: CellType) -> bool;

    /// Is the coordinate inside the grid?
    #[inline]
    fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width()
            && (coord.y as usize) < self.height()
    }

    /// Is the cell a wall?
    #[inline]
    fn is_wall(&self, coord: GridCoord) -> bool {
        self.get_type(coord).is_wall()
    }

    /// Has the cell been observed?
    #[inline]
    fn is_known(&self, coord: GridCoord) -> bool {
        self.get_type(coord).is_known()
    }

    /// Apply an observation with wall priority (see [`CellType::merged_with`]).
    ///
    /// Returns true if the stored state changed.
    fn observe(&mut self, coord: GridCoord, observed: CellType) -> bool {
        if !self.contains(coord) {
            return false;
        }
        let current = self.get_type(coord);
        let next = current.merged_with(observed);
        next != current && self.mark(coord, next)
    }

    /// Count cells by state.
    fn count_by_type(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                counts.add(self.get_type(GridCoord::new(x, y)));
            }
        }
        counts
    }
}

/// Cell counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Never observed
    pub unknown: usize,
    /// Free space (markers included)
    pub empty: usize,
    /// Obstacles
    pub wall: usize,
}

impl CellCounts {
    /// Tally one cell.
    #[inline]
    pub fn add(&mut self, cell_type: CellType) {
        match cell_type.occupancy() {
            CellType::Wall => self.wall += 1,
            CellType::Unknown => self.unknown += 1,
            _ => self.empty += 1,
        }
    }

    /// Total observed cells.
    pub fn known(&self) -> usize {
        self.empty + self.wall
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}
