//! Belief merge: fold one scan's discoveries into the occupancy grid.
//!
//! - Discovered walls are written unconditionally (monotonic upgrade).
//! - Discovered empty cells are written only where the belief is not
//!   already a wall. Discretization can make a later ray sample through
//!   open space at the rounded coordinate of a known wall; the wall stays.
//! - No other cell changes.
//!
//! Merging the same discoveries twice leaves the belief as the first merge
//! did.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{CellType, GridCoord};

use super::OccupancyGrid;

/// Statistics of one merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    /// Cells whose state changed
    pub cells_updated: usize,
    /// Cells that became Empty
    pub cells_empty: usize,
    /// Cells that became Wall
    pub cells_wall: usize,
    /// Of `cells_wall`, cells that were Empty before (already discovered)
    pub cells_upgraded: usize,
}

impl MergeResult {
    /// Cells that were Unknown before this merge and are known now.
    ///
    /// Empty → Wall upgrades are counted in `cells_wall` but are not new
    /// discoveries, so this can be smaller than `cells_updated`.
    pub fn newly_discovered(&self) -> usize {
        self.cells_updated - self.cells_upgraded
    }

    /// Accumulate another result into this one.
    pub fn merge(&mut self, other: &MergeResult) {
        self.cells_updated += other.cells_updated;
        self.cells_empty += other.cells_empty;
        self.cells_wall += other.cells_wall;
        self.cells_upgraded += other.cells_upgraded;
    }
}

/// Merge discovered walls and empty cells into a belief grid.
pub fn merge<'a, G>(
    belief: &mut G,
    discovered_walls: impl IntoIterator<Item = &'a GridCoord>,
    discovered_empty: impl IntoIterator<Item = &'a GridCoord>,
) -> MergeResult
where
    G: OccupancyGrid + ?Sized,
{
    let mut result = MergeResult::default();

    for &coord in discovered_walls {
        if !belief.contains(coord) {
            continue;
        }
        let previous = belief.get_type(coord);
        if belief.mark(coord, CellType::Wall) {
            result.cells_updated += 1;
            result.cells_wall += 1;
            if previous.is_known() {
                result.cells_upgraded += 1;
            }
        }
    }

    for &coord in discovered_empty {
        if belief.get_type(coord) == CellType::Unknown && belief.mark(coord, CellType::Empty) {
            result.cells_updated += 1;
            result.cells_empty += 1;
        }
    }

    trace!(
        "[Merge] updated={} empty={} wall={}",
        result.cells_updated, result.cells_empty, result.cells_wall
    );

    result
}
