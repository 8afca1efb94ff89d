//! Motion step: move the agent one bounded step along its route.
//!
//! Per-axis (Chebyshev) stepping toward the route's next waypoint:
//!
//! ```text
//!   pose ●                         each axis moves min(step, |delta|)
//!         ╲                        toward the waypoint, so the agent
//!          ●                       drifts diagonally at full per-axis
//!           ╲                      speed and never overshoots
//!            ●───●───○ waypoint
//! ```
//!
//! When both axis deltas are within `step_size` the agent snaps onto the
//! waypoint exactly.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::pathfinding::Route;

/// Motion parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Maximum movement per axis per tick, in cells.
    /// Default: 0.25
    #[serde(default = "defaults::step_size")]
    pub step_size: f32,

    /// Distance from the goal at which the episode counts as complete.
    /// Default: 0.1
    #[serde(default = "defaults::goal_tolerance")]
    pub goal_tolerance: f32,
}

mod defaults {
    pub fn step_size() -> f32 {
        0.25
    }
    pub fn goal_tolerance() -> f32 {
        0.1
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step_size: defaults::step_size(),
            goal_tolerance: defaults::goal_tolerance(),
        }
    }
}

/// What a motion step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionOutcome {
    /// Moved one step toward the waypoint
    Stepped,
    /// Landed exactly on the waypoint
    Snapped(GridCoord),
    /// Nothing to move to (route empty, or already on its only cell's centre)
    Stationary,
}

/// Advance `pose` one step along `route`.
///
/// The route's first cell is the one the agent's position rounds to; the
/// second is the waypoint. A one-cell route pulls the agent onto the
/// centre of that cell, since the position can round to a cell while still
/// half a cell away from it. An empty route, or a one-cell route whose
/// centre the agent already occupies, leaves the pose unchanged.
/// Heading is set to the direction of travel whenever the agent moves.
pub fn advance(pose: Pose2D, route: &Route, step_size: f32) -> (Pose2D, MotionOutcome) {
    let Some(waypoint) = route.next_waypoint().or(route.first()) else {
        return (pose, MotionOutcome::Stationary);
    };

    let target = waypoint.to_world();
    let dx = target.x - pose.x;
    let dy = target.y - pose.y;

    if dx == 0.0 && dy == 0.0 {
        return (pose, MotionOutcome::Stationary);
    }

    if dx.abs() <= step_size && dy.abs() <= step_size {
        return (
            face(pose, dx, dy).with_position(target),
            MotionOutcome::Snapped(waypoint),
        );
    }

    let next = WorldPoint::new(
        step_axis(pose.x, target.x, step_size),
        step_axis(pose.y, target.y, step_size),
    );
    (
        face(pose, next.x - pose.x, next.y - pose.y).with_position(next),
        MotionOutcome::Stepped,
    )
}

/// Is the pose within `tolerance` of the goal cell centre?
#[inline]
pub fn is_at_goal(pose: &Pose2D, goal: GridCoord, tolerance: f32) -> bool {
    pose.position().distance(&goal.to_world()) <= tolerance
}

#[inline]
fn step_axis(from: f32, to: f32, step: f32) -> f32 {
    let delta = to - from;
    if delta.abs() <= step {
        to
    } else {
        from + step * delta.signum()
    }
}

#[inline]
fn face(pose: Pose2D, dx: f32, dy: f32) -> Pose2D {
    if dx == 0.0 && dy == 0.0 {
        pose
    } else {
        Pose2D::new(pose.x, pose.y, dy.atan2(dx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn route(cells: &[(i32, i32)]) -> Route {
        Route::new(cells.iter().map(|&(x, y)| GridCoord::new(x, y)).collect())
    }

    #[test]
    fn test_snap_to_waypoint() {
        let pose = Pose2D::new(1.9, 1.8, 0.0);
        let (next, outcome) = advance(pose, &route(&[(2, 1), (2, 2)]), 0.25);

        assert_eq!(outcome, MotionOutcome::Snapped(GridCoord::new(2, 2)));
        assert_eq!(next.x, 2.0);
        assert_eq!(next.y, 2.0);
    }

    #[test]
    fn test_step_along_axis() {
        let pose = Pose2D::at_cell(GridCoord::new(1, 1));
        let (next, outcome) = advance(pose, &route(&[(1, 1), (2, 1)]), 0.25);

        assert_eq!(outcome, MotionOutcome::Stepped);
        assert_relative_eq!(next.x, 1.25);
        assert_relative_eq!(next.y, 1.0);
        assert_relative_eq!(next.theta, 0.0);
    }

    #[test]
    fn test_reaches_waypoint_in_steps() {
        let mut pose = Pose2D::at_cell(GridCoord::new(1, 1));
        let r = route(&[(1, 1), (1, 2)]);

        let mut outcomes = Vec::new();
        for _ in 0..4 {
            let (next, outcome) = advance(pose, &r, 0.25);
            pose = next;
            outcomes.push(outcome);
        }

        assert_eq!(outcomes[3], MotionOutcome::Snapped(GridCoord::new(1, 2)));
        assert_eq!(pose.cell(), GridCoord::new(1, 2));
        assert_relative_eq!(pose.theta, FRAC_PI_2);
    }

    #[test]
    fn test_no_overshoot_on_short_axis() {
        // 0.1 off in x, a full cell away in y: x lands exactly, y steps.
        let pose = Pose2D::new(2.9, 1.0, 0.0);
        let (next, outcome) = advance(pose, &route(&[(3, 1), (3, 2)]), 0.25);

        assert_eq!(outcome, MotionOutcome::Stepped);
        assert_eq!(next.x, 3.0);
        assert_relative_eq!(next.y, 1.25);
    }

    #[test]
    fn test_diagonal_drift() {
        let pose = Pose2D::new(0.0, 0.0, 0.0);
        let (next, _) = advance(pose, &route(&[(0, 0), (1, 1)]), 0.25);
        assert_relative_eq!(next.x, 0.25);
        assert_relative_eq!(next.y, 0.25);
    }

    #[test]
    fn test_stationary_without_waypoint() {
        let pose = Pose2D::new(3.0, 4.0, 1.0);

        let (next, outcome) = advance(pose, &Route::empty(), 0.25);
        assert_eq!(outcome, MotionOutcome::Stationary);
        assert_eq!(next, pose);

        let (next, outcome) = advance(pose, &route(&[(3, 4)]), 0.25);
        assert_eq!(outcome, MotionOutcome::Stationary);
        assert_eq!(next, pose);
    }

    #[test]
    fn test_single_cell_route_pulls_to_centre() {
        // 4.5 already rounds to cell 5 but is half a cell from its centre
        let r = route(&[(5, 1)]);
        let pose = Pose2D::new(4.5, 1.0, 0.0);

        let (pose, outcome) = advance(pose, &r, 0.25);
        assert_eq!(outcome, MotionOutcome::Stepped);
        assert_relative_eq!(pose.x, 4.75);

        let (pose, outcome) = advance(pose, &r, 0.25);
        assert_eq!(outcome, MotionOutcome::Snapped(GridCoord::new(5, 1)));
        assert_eq!(pose.position(), WorldPoint::new(5.0, 1.0));

        let (_, outcome) = advance(pose, &r, 0.25);
        assert_eq!(outcome, MotionOutcome::Stationary);
    }

    #[test]
    fn test_is_at_goal() {
        let goal = GridCoord::new(10, 4);
        assert!(is_at_goal(&Pose2D::at_cell(goal), goal, 0.1));
        assert!(is_at_goal(&Pose2D::new(10.05, 4.0, 0.0), goal, 0.1));
        assert!(!is_at_goal(&Pose2D::new(10.25, 4.0, 0.0), goal, 0.1));
    }
}
