//! Range scanner configuration.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Lidar parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LidarConfig {
    /// Maximum ray length in cells.
    /// Default: 6.0
    #[serde(default = "defaults::max_range")]
    pub max_range: f32,

    /// Rays per scan, spread evenly over `fov`.
    /// Default: 60
    #[serde(default = "defaults::ray_count")]
    pub ray_count: usize,

    /// Field of view in radians, centred on the agent heading.
    /// Default: 2π (full circle)
    #[serde(default = "defaults::fov")]
    pub fov: f32,

    /// Distance between consecutive samples along a ray, in cells.
    /// Default: 0.1
    #[serde(default = "defaults::precision_step")]
    pub precision_step: f32,
}

mod defaults {
    use std::f32::consts::TAU;

    pub fn max_range() -> f32 {
        6.0
    }
    pub fn ray_count() -> usize {
        60
    }
    pub fn fov() -> f32 {
        TAU
    }
    pub fn precision_step() -> f32 {
        0.1
    }
}

impl Default for LidarConfig {
    fn default() -> Self {
        Self {
            max_range: defaults::max_range(),
            ray_count: defaults::ray_count(),
            fov: TAU,
            precision_step: defaults::precision_step(),
        }
    }
}

impl LidarConfig {
    /// Config with the given range and ray count, other fields default.
    pub fn with_range(max_range: f32, ray_count: usize) -> Self {
        Self {
            max_range,
            ray_count,
            ..Self::default()
        }
    }

    /// Number of samples taken along each ray.
    ///
    /// Zero for a non-positive or non-finite range or step, so a bad config
    /// yields an empty scan instead of an unbounded march.
    pub fn samples_per_ray(&self) -> usize {
        let valid = self.max_range.is_finite()
            && self.precision_step.is_finite()
            && self.max_range > 0.0
            && self.precision_step > 0.0;
        if !valid {
            return 0;
        }
        // Small epsilon so 6.0 / 0.1 = 59.99998 still yields 60 samples.
        (self.max_range / self.precision_step + 1e-3).floor() as usize
    }

    /// Angle between adjacent rays.
    pub fn angular_step(&self) -> f32 {
        if self.ray_count == 0 {
            0.0
        } else {
            self.fov / self.ray_count as f32
        }
    }

    /// Check parameters.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.max_range.is_finite() && self.max_range > 0.0) {
            return Err(format!("lidar.max_range must be positive, got {}", self.max_range));
        }
        if !(self.precision_step.is_finite() && self.precision_step > 0.0) {
            return Err(format!(
                "lidar.precision_step must be positive, got {}",
                self.precision_step
            ));
        }
        if self.ray_count == 0 {
            return Err("lidar.ray_count must be at least 1".to_string());
        }
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov <= TAU + 1e-4) {
            return Err(format!("lidar.fov must be in (0, 2π], got {}", self.fov));
        }
        Ok(())
    }
}
