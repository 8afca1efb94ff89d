//! A* pathfinding algorithm.
//!
//! Implements A* search on a belief grid with:
//! - 4-connected movement, unit cost, Manhattan heuristic
//! - Configurable treatment of Unknown cells
//! - Deterministic tie-breaking (lowest `f`, then insertion order)

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{PathFailure, PlanResult, PlannerConfig, Route, UnknownPolicy};
