//! One sense-merge-plan-move cycle.
//!
//! ```text
//!   pose, true env ──► scan ──► Observation
//!                                  │
//!   belief ◄──────── merge ◄───────┘
//!     │
//!     └──► plan(pose → goal) ──► Route ──┬─► at goal? ──► GoalReached
//!                                        └─► advance ──► pose'
//! ```
//!
//! [`tick`] takes the belief and pose by `&mut`: the borrow checker rules
//! out a second tick on the same state while one is in progress.

use log::{debug, trace};

use crate::core::{CellType, GridCoord, Pose2D};
use crate::environment::TrueEnvironment;
use crate::grid::{BeliefMap, MergeResult, OccupancyGrid, merge};
use crate::motion::{MotionOutcome, advance, is_at_goal};
use crate::pathfinding::{PathFailure, Route, plan};
use crate::sensor::{Observation, scan};

use super::config::SimulationConfig;
use super::state::EpisodeEvent;

/// Everything one tick produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Scan result (hit points are for display only)
    pub observation: Observation,
    /// Belief changes from this scan
    pub merge: MergeResult,
    /// Route planned this tick (empty if none, or goal reached)
    pub route: Route,
    /// A* nodes expanded
    pub nodes_expanded: usize,
    /// Why planning returned no route, if it didn't
    pub plan_failure: Option<PathFailure>,
    /// What the motion step did
    pub motion: MotionOutcome,
    /// Pose after the tick
    pub pose: Pose2D,
    /// Euclidean distance from the new pose to the goal
    pub distance_to_goal: f32,
    /// Event raised by this tick
    pub event: Option<EpisodeEvent>,
}

impl TickReport {
    /// Cells that went from Unknown to known this tick.
    pub fn newly_discovered(&self) -> usize {
        self.merge.newly_discovered()
    }

    /// Cells in the planned route.
    pub fn route_length(&self) -> usize {
        self.route.len()
    }

    /// Did this tick complete the episode?
    pub fn goal_reached(&self) -> bool {
        self.event == Some(EpisodeEvent::GoalReached)
    }
}

/// Fresh belief and pose for an environment.
///
/// The belief is all Unknown except the start cell, which is Empty. The
/// pose sits on the start cell centre facing +X.
pub fn init_episode(env: &TrueEnvironment) -> (BeliefMap, Pose2D) {
    let mut belief = BeliefMap::new(env.width(), env.height());
    belief.mark(env.start(), CellType::Empty);
    (belief, Pose2D::at_cell(env.start()))
}

/// Run one tick: scan, merge, plan, then either finish or move.
///
/// Never fails. No route is reported as an empty `route` with
/// `plan_failure` set; rays leaving the map simply stop.
pub fn tick<G: OccupancyGrid + ?Sized>(
    env: &TrueEnvironment,
    belief: &mut G,
    pose: &mut Pose2D,
    goal: GridCoord,
    config: &SimulationConfig,
) -> TickReport {
    let observation = scan(pose, env, &config.lidar);
    let merge_result = merge(belief, &observation.walls, &observation.empty);

    let planned = plan(pose.position(), goal.to_world(), &*belief, &config.planner);
    let mut route = planned.route;

    let remaining = route.len() <= 1;
    let arrived = remaining && is_at_goal(pose, goal, config.motion.goal_tolerance);

    let (motion, event) = if arrived {
        route.clear();
        debug!("[Tick] Goal {} reached at ({:.2}, {:.2})", goal, pose.x, pose.y);
        (MotionOutcome::Stationary, Some(EpisodeEvent::GoalReached))
    } else {
        let (next, outcome) = advance(*pose, &route, config.motion.step_size);
        *pose = next;
        (outcome, None)
    };

    let distance_to_goal = pose.position().distance(&goal.to_world());

    trace!(
        "[Tick] discovered={} route={} expanded={} motion={:?} dist={:.2}",
        merge_result.newly_discovered(),
        route.len(),
        planned.nodes_expanded,
        motion,
        distance_to_goal
    );

    TickReport {
        observation,
        merge: merge_result,
        route,
        nodes_expanded: planned.nodes_expanded,
        plan_failure: planned.failure,
        motion,
        pose: *pose,
        distance_to_goal,
        event,
    }
}
