//! Agent pose: continuous position plus heading.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use super::point::{GridCoord, WorldPoint};

/// Normalize angle to [-π, π).
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = (angle + PI).rem_euclid(TAU) - PI;
    if a >= PI { a - TAU } else { a }
}

/// Agent pose in world coordinates.
///
/// Position is known exactly (no localization uncertainty). Theta is the
/// heading the range scanner centres its field of view on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Heading in radians [-π, π), CCW positive from +X
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose (theta is normalized).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Pose at the centre of a cell, facing +X.
    #[inline]
    pub fn at_cell(coord: GridCoord) -> Self {
        Self::new(coord.x as f32, coord.y as f32, 0.0)
    }

    /// Position component.
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Cell the agent currently occupies.
    #[inline]
    pub fn cell(self) -> GridCoord {
        self.position().to_grid()
    }

    /// Same heading, new position.
    #[inline]
    pub fn with_position(self, position: WorldPoint) -> Self {
        Self {
            x: position.x,
            y: position.y,
            theta: self.theta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_angle() {
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(TAU + 0.5), 0.5, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle(-TAU - 0.5), -0.5, epsilon = 1e-5);
        assert!(normalize_angle(PI) < PI);
    }

    #[test]
    fn test_cell_rounding() {
        let pose = Pose2D::new(3.4, 1.6, 0.0);
        assert_eq!(pose.cell(), GridCoord::new(3, 2));
    }

    #[test]
    fn test_at_cell() {
        let pose = Pose2D::at_cell(GridCoord::new(2, 7));
        assert_eq!(pose.position(), WorldPoint::new(2.0, 7.0));
        assert_eq!(pose.theta, 0.0);
    }
}
