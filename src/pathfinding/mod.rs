//! Route planning over the belief grid.
//!
//! The planner only ever sees an [`OccupancyGrid`]: the agent's belief.
//! Routes are recomputed from scratch every tick. That keeps every route
//! consistent with the freshest belief and is cheap on the small maps
//! simulated here; much larger maps would want incremental replanning
//! (e.g. D* Lite) behind the same [`plan`] signature.
//!
//! ```rust,ignore
//! use drishti::pathfinding::{plan, PlannerConfig};
//!
//! let result = plan(pose.position(), goal.to_world(), &belief, &PlannerConfig::default());
//! if result.route.is_empty() {
//!     // keep exploring
//! }
//! ```

pub mod astar;

pub use astar::{AStarPlanner, PathFailure, PlanResult, PlannerConfig, Route, UnknownPolicy};

use crate::core::WorldPoint;
use crate::grid::OccupancyGrid;

/// Plan a route between world positions on a belief grid.
///
/// Both endpoints snap to their nearest cell. An empty route means no
/// route is known with the current belief; that is not an error.
pub fn plan<G: OccupancyGrid + ?Sized>(
    start: WorldPoint,
    goal: WorldPoint,
    belief: &G,
    config: &PlannerConfig,
) -> PlanResult {
    AStarPlanner::new(belief, config.clone()).find_path_world(start, goal)
}
