//! Lidar scan against the true environment.
//!
//! Rays are spread evenly over the field of view, starting at
//! `heading - fov / 2`:
//!
//! ```text
//!              ray i angle = heading - fov/2 + i * fov/ray_count
//!
//!                  \   |   /
//!                   \  |  /
//!              ──────  ○  ──────     ○ agent, full circle by default
//!                   /  |  \
//!                  /   |   \
//! ```
//!
//! Each ray marches outward and stops at the first of:
//!
//! | Termination | Recorded                                   |
//! |-------------|--------------------------------------------|
//! | Boundary    | hit point (the out-of-bounds sample)       |
//! | Wall        | hit point + wall cell                      |
//! | MaxRange    | hit point (last sample)                    |
//!
//! Every in-bounds, non-wall cell sampled before termination is recorded
//! as discovered empty. The scan has no randomness: identical inputs give
//! identical observations.

use std::collections::BTreeSet;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::environment::TrueEnvironment;

use super::config::LidarConfig;
use super::ray_march::RayMarch;

/// Why a ray stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RayTermination {
    /// Sample left the map
    Boundary,
    /// Sample landed on a wall
    Wall,
    /// Ray reached its maximum range
    MaxRange,
}

/// End point of one ray.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Continuous end point
    pub point: WorldPoint,
    /// Why the ray stopped there
    pub termination: RayTermination,
}

/// What one scan revealed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observation {
    /// Wall cells hit by a ray
    pub walls: BTreeSet<GridCoord>,
    /// Free cells a ray passed through
    pub empty: BTreeSet<GridCoord>,
    /// One end point per ray, in ray order
    pub hits: Vec<RayHit>,
}

impl Observation {
    /// Ray end points, for visualization.
    pub fn hit_points(&self) -> impl Iterator<Item = WorldPoint> + '_ {
        self.hits.iter().map(|h| h.point)
    }

    /// Number of rays that stopped for the given reason.
    pub fn count_terminated_by(&self, termination: RayTermination) -> usize {
        self.hits
            .iter()
            .filter(|h| h.termination == termination)
            .count()
    }

    /// Total distinct cells observed.
    pub fn cells_observed(&self) -> usize {
        self.walls.len() + self.empty.len()
    }
}

/// Cast all rays from `pose` through the true environment.
pub fn scan(pose: &Pose2D, env: &TrueEnvironment, config: &LidarConfig) -> Observation {
    let origin = pose.position();
    let samples = config.samples_per_ray();
    let start_angle = pose.theta - config.fov / 2.0;
    let angular_step = config.angular_step();

    let mut observation = Observation {
        hits: Vec::with_capacity(config.ray_count),
        ..Observation::default()
    };

    for i in 0..config.ray_count {
        let angle = start_angle + angular_step * i as f32;
        let hit = cast_ray(
            RayMarch::new(origin, angle, config.precision_step, samples),
            origin,
            env,
            &mut observation,
        );
        observation.hits.push(hit);
    }

    trace!(
        "[Lidar] pose=({:.2}, {:.2}) rays={} walls={} empty={}",
        pose.x,
        pose.y,
        config.ray_count,
        observation.walls.len(),
        observation.empty.len()
    );

    observation
}

fn cast_ray(
    ray: RayMarch,
    origin: WorldPoint,
    env: &TrueEnvironment,
    observation: &mut Observation,
) -> RayHit {
    let mut last = origin;

    for sample in ray {
        if !env.contains(sample.cell) {
            return RayHit {
                point: sample.point,
                termination: RayTermination::Boundary,
            };
        }
        if env.is_wall(sample.cell) {
            observation.walls.insert(sample.cell);
            return RayHit {
                point: sample.point,
                termination: RayTermination::Wall,
            };
        }
        observation.empty.insert(sample.cell);
        last = sample.point;
    }

    RayHit {
        point: last,
        termination: RayTermination::MaxRange,
    }
}
