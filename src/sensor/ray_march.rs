//! Fixed-step ray marching.
//!
//! ```text
//! origin ○───●───●───●───●───● ...
//!            d=s 2s  3s  4s  5s        s = precision step
//! ```
//!
//! Sample `k` sits at `origin + direction * k * step`. Positions are
//! computed from `k` directly rather than accumulated, so the same ray
//! always produces bit-identical samples. The origin itself is never
//! sampled.

use crate::core::{GridCoord, WorldPoint};

/// One sample along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaySample {
    /// Continuous sample position
    pub point: WorldPoint,
    /// Cell the sample rounds to
    pub cell: GridCoord,
    /// Distance from the ray origin
    pub distance: f32,
}

/// Iterator over evenly spaced samples along a ray.
#[derive(Clone, Debug)]
pub struct RayMarch {
    origin: WorldPoint,
    direction: WorldPoint,
    step: f32,
    samples: usize,
    k: usize,
}

impl RayMarch {
    /// March from `origin` along `angle`, taking `samples` steps of `step`.
    pub fn new(origin: WorldPoint, angle: f32, step: f32, samples: usize) -> Self {
        Self {
            origin,
            direction: WorldPoint::new(angle.cos(), angle.sin()),
            step,
            samples,
            k: 0,
        }
    }

    /// Unit direction of the ray.
    pub fn direction(&self) -> WorldPoint {
        self.direction
    }
}

impl Iterator for RayMarch {
    type Item = RaySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.k >= self.samples {
            return None;
        }
        self.k += 1;

        let distance = self.k as f32 * self.step;
        let point = WorldPoint::new(
            self.origin.x + self.direction.x * distance,
            self.origin.y + self.direction.y * distance,
        );
        Some(RaySample {
            point,
            cell: point.to_grid(),
            distance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.k;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RayMarch {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_march_along_x() {
        let samples: Vec<_> = RayMarch::new(WorldPoint::new(1.0, 1.0), 0.0, 0.1, 10).collect();

        assert_eq!(samples.len(), 10);
        assert_relative_eq!(samples[0].point.x, 1.1);
        assert_relative_eq!(samples[9].distance, 1.0);
        assert_eq!(samples[3].cell, GridCoord::new(1, 1));
        assert_eq!(samples[5].cell, GridCoord::new(2, 1));
    }

    #[test]
    fn test_march_along_y() {
        let last = RayMarch::new(WorldPoint::new(2.0, 2.0), FRAC_PI_2, 0.5, 6)
            .last()
            .unwrap();
        assert_relative_eq!(last.point.y, 5.0, epsilon = 1e-5);
        assert_eq!(last.cell, GridCoord::new(2, 5));
    }

    #[test]
    fn test_march_reproducible() {
        let a: Vec<_> = RayMarch::new(WorldPoint::new(3.3, 1.7), 2.1, 0.1, 50).collect();
        let b: Vec<_> = RayMarch::new(WorldPoint::new(3.3, 1.7), 2.1, 0.1, 50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exact_size() {
        let mut ray = RayMarch::new(WorldPoint::ZERO, 0.0, 0.1, 3);
        assert_eq!(ray.len(), 3);
        ray.next();
        assert_eq!(ray.len(), 2);
    }
}
