//! Point and coordinate types.
//!
//! Two coordinate domains exist and are kept apart by type:
//! [`GridCoord`] (integer cell indices, one unit = one cell) and
//! [`WorldPoint`] (continuous, used for sub-cell motion and ray marching).
//! One world unit equals one cell; cell `(x, y)` is centred on world `(x, y)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices).
///
/// Ordered by `x` then `y` so coordinate sets iterate deterministically.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The 4 cardinal neighbors in expansion order: up, down, left, right.
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y - 1),
            GridCoord::new(self.x, self.y + 1),
            GridCoord::new(self.x - 1, self.y),
            GridCoord::new(self.x + 1, self.y),
        ]
    }

    /// Cell centre in world coordinates.
    #[inline]
    pub fn to_world(self) -> WorldPoint {
        WorldPoint::new(self.x as f32, self.y as f32)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// World coordinates (continuous, one unit per cell).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Angle from this point to another (radians, CCW from +X)
    #[inline]
    pub fn angle_to(&self, other: &WorldPoint) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Nearest grid cell.
    ///
    /// Rounds half up (`floor(v + 0.5)`) on both axes, so `-0.5` maps to
    /// cell 0 rather than -1. This is the only world-to-grid conversion in
    /// the crate; sensing and planning both go through it.
    #[inline]
    pub fn to_grid(self) -> GridCoord {
        GridCoord::new(
            (self.x + 0.5).floor() as i32,
            (self.y + 0.5).floor() as i32,
        )
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl From<GridCoord> for WorldPoint {
    fn from(coord: GridCoord) -> Self {
        coord.to_world()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = GridCoord::new(1, 1);
        let b = GridCoord::new(4, -3);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn test_neighbor_order() {
        let n = GridCoord::new(5, 5).neighbors_4();
        assert_eq!(n[0], GridCoord::new(5, 4));
        assert_eq!(n[1], GridCoord::new(5, 6));
        assert_eq!(n[2], GridCoord::new(4, 5));
        assert_eq!(n[3], GridCoord::new(6, 5));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(WorldPoint::new(1.49, 2.5).to_grid(), GridCoord::new(1, 3));
        assert_eq!(WorldPoint::new(-0.5, -0.51).to_grid(), GridCoord::new(0, -1));
        assert_eq!(WorldPoint::new(3.0, 4.0).to_grid(), GridCoord::new(3, 4));
    }

    #[test]
    fn test_grid_ordering_is_x_major() {
        let mut coords = vec![GridCoord::new(2, 0), GridCoord::new(1, 5), GridCoord::new(1, 2)];
        coords.sort();
        assert_eq!(
            coords,
            vec![GridCoord::new(1, 2), GridCoord::new(1, 5), GridCoord::new(2, 0)]
        );
    }

    #[test]
    fn test_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
        assert!((a.distance_squared(&b) - 25.0).abs() < 1e-6);
    }
}
