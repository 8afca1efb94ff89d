//! Dense row-major grid storage.
//!
//! One byte per cell, laid out row by row:
//!
//! ```text
//! index = y * width + x
//!
//! row 0: [T T T T T T T T]
//! row 1: [T T T T T T T T]
//! ...
//! ```

use crate::core::{CellType, GridCoord};

use super::{CellCounts, OccupancyGrid};

/// Bounded grid with one byte per cell.
///
/// The right choice for the small, fully bounded maps this crate simulates:
/// constant-time access and a trivially cheap clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl DenseGrid {
    /// Create a grid with every cell Unknown.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, CellType::Unknown)
    }

    /// Create a grid with every cell set to `cell_type`.
    pub fn filled(width: usize, height: usize, cell_type: CellType) -> Self {
        Self {
            cells: vec![cell_type as u8; width * height],
            width,
            height,
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellType)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &t)| {
            let coord = GridCoord::new((i % width) as i32, (i / width) as i32);
            (coord, CellType::from_u8(t))
        })
    }

    /// Reset every cell to Unknown.
    pub fn clear(&mut self) {
        self.cells.fill(CellType::Unknown as u8);
    }
}

impl OccupancyGrid for DenseGrid {
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
        self.index(coord)
            .map(|i| CellType::from_u8(self.cells[i]))
            .unwrap_or(CellType::Unknown)
    }

    #[inline]
    fn mark(&mut self, coord: GridCoord, cell_type: CellType) -> bool {
        match self.index(coord) {
            Some(i) => {
                let new = cell_type as u8;
                let changed = self.cells[i] != new;
                self.cells[i] = new;
                changed
            }
            None => false,
        }
    }

    fn count_by_type(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &t in &self.cells {
            counts.add(CellType::from_u8(t));
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = DenseGrid::new(20, 8);
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.cell_count(), 160);
        assert_eq!(grid.count_by_type().unknown, 160);
    }

    #[test]
    fn test_get_set_cell() {
        let mut grid = DenseGrid::new(10, 10);

        assert_eq!(grid.get_type(GridCoord::new(5, 5)), CellType::Unknown);
        assert!(grid.mark(GridCoord::new(5, 5), CellType::Empty));
        assert!(!grid.mark(GridCoord::new(5, 5), CellType::Empty));
        assert_eq!(grid.get_type(GridCoord::new(5, 5)), CellType::Empty);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = DenseGrid::filled(4, 4, CellType::Empty);

        assert!(!grid.contains(GridCoord::new(-1, 0)));
        assert!(!grid.contains(GridCoord::new(4, 0)));
        assert_eq!(grid.get_type(GridCoord::new(0, 100)), CellType::Unknown);
        assert!(!grid.mark(GridCoord::new(0, 100), CellType::Wall));
    }

    #[test]
    fn test_observe_keeps_walls() {
        let mut grid = DenseGrid::new(4, 4);
        let c = GridCoord::new(1, 1);

        assert!(grid.observe(c, CellType::Wall));
        assert!(!grid.observe(c, CellType::Empty));
        assert!(grid.is_wall(c));
    }

    #[test]
    fn test_iter_row_major() {
        let mut grid = DenseGrid::new(3, 2);
        grid.mark(GridCoord::new(2, 1), CellType::Wall);

        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1].0, GridCoord::new(1, 0));
        assert_eq!(cells[5], (GridCoord::new(2, 1), CellType::Wall));
    }

    #[test]
    fn test_counts() {
        let mut grid = DenseGrid::new(10, 10);
        grid.mark(GridCoord::new(0, 0), CellType::Empty);
        grid.mark(GridCoord::new(1, 0), CellType::Wall);
        grid.mark(GridCoord::new(2, 0), CellType::Start);

        let counts = grid.count_by_type();
        assert_eq!(counts.empty, 2);
        assert_eq!(counts.wall, 1);
        assert_eq!(counts.unknown, 97);
        assert_eq!(counts.known(), 3);
        assert_eq!(counts.total(), 100);
    }
}
