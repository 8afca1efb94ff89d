//! Sparse grid storage keyed by coordinate.

use std::collections::HashMap;

use crate::core::{CellType, GridCoord};

use super::{CellCounts, OccupancyGrid};

/// Bounded grid that only stores observed cells.
///
/// Memory grows with what the agent has seen rather than with the map
/// area, which suits large maps explored with a short-range scanner.
/// Unknown is never stored: marking a cell Unknown removes its entry.
#[derive(Clone, Debug, Default)]
pub struct SparseGrid {
    cells: HashMap<GridCoord, CellType>,
    width: usize,
    height: usize,
}

impl SparseGrid {
    /// Create an empty (all Unknown) grid with the given bounds.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: HashMap::new(),
            width,
            height,
        }
    }

    /// Number of observed cells actually stored.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if nothing has been observed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over observed cells (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellType)> + '_ {
        self.cells.iter().map(|(&c, &t)| (c, t))
    }

    /// Forget every observation.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl OccupancyGrid for SparseGrid {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get_type(&self, coord: GridCoord) -> CellType {
        self.cells.get(&coord).copied().unwrap_or_default()
    }

    fn mark(&mut self, coord: GridCoord, cell_type: CellType) -> bool {
        if !self.contains(coord) {
            return false;
        }
        if cell_type == CellType::Unknown {
            return self.cells.remove(&coord).is_some();
        }
        self.cells.insert(coord, cell_type) != Some(cell_type)
    }

    fn count_by_type(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &t in self.cells.values() {
            counts.add(t);
        }
        counts.unknown = self.width * self.height - counts.known();
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DenseGrid;

    #[test]
    fn test_sparse_starts_unknown() {
        let grid = SparseGrid::new(100, 100);
        assert!(grid.is_empty());
        assert_eq!(grid.get_type(GridCoord::new(42, 42)), CellType::Unknown);
        assert_eq!(grid.count_by_type().unknown, 10_000);
    }

    #[test]
    fn test_sparse_mark() {
        let mut grid = SparseGrid::new(10, 10);
        let c = GridCoord::new(3, 4);

        assert!(grid.mark(c, CellType::Empty));
        assert!(!grid.mark(c, CellType::Empty));
        assert!(grid.mark(c, CellType::Wall));
        assert_eq!(grid.len(), 1);

        assert!(grid.mark(c, CellType::Unknown));
        assert!(grid.is_empty());
        assert!(!grid.mark(GridCoord::new(10, 0), CellType::Wall));
    }

    #[test]
    fn test_sparse_matches_dense() {
        let mut sparse = SparseGrid::new(8, 8);
        let mut dense = DenseGrid::new(8, 8);

        let ops = [
            (GridCoord::new(1, 1), CellType::Empty),
            (GridCoord::new(2, 1), CellType::Wall),
            (GridCoord::new(2, 1), CellType::Empty),
            (GridCoord::new(7, 7), CellType::Empty),
            (GridCoord::new(9, 9), CellType::Wall),
        ];
        for (c, t) in ops {
            assert_eq!(sparse.observe(c, t), dense.observe(c, t));
        }

        for y in 0..8 {
            for x in 0..8 {
                let c = GridCoord::new(x, y);
                assert_eq!(sparse.get_type(c), dense.get_type(c));
            }
        }
        assert_eq!(sparse.count_by_type(), dense.count_by_type());
    }
}
