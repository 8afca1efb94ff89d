//! A* pathfinding types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{CellType, GridCoord};

/// A node on the A* frontier.
///
/// Ordered for a max-heap so that the node popped first has the lowest
/// `f_cost`, and among equal `f_cost` the lowest insertion `seq`.
#[derive(Clone, Copy, Debug)]
pub(super) struct AStarNode {
    pub coord: GridCoord,
    pub g_cost: u32, // Cost from start
    pub f_cost: u32, // g_cost + heuristic
    pub seq: u64,    // Insertion order, kept across relaxation
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How the planner treats cells the agent has never observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    /// Unknown cells are traversable. Routes cut through unexplored space
    /// and get replanned when a wall turns up on them.
    #[default]
    Optimistic,
    /// Unknown cells are blocked. Routes only use observed free space, so a
    /// goal that has not been seen yet is unreachable.
    Conservative,
}

impl UnknownPolicy {
    /// May the planner step onto a cell in this state?
    #[inline]
    pub fn is_traversable(self, cell_type: CellType) -> bool {
        match cell_type {
            CellType::Wall => false,
            CellType::Unknown => self == UnknownPolicy::Optimistic,
            _ => true,
        }
    }
}

/// A* planner configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Treatment of Unknown cells.
    /// Default: optimistic
    #[serde(default)]
    pub unknown_policy: UnknownPolicy,

    /// Give up after expanding this many nodes. 0 = unlimited.
    /// Default: 0
    #[serde(default)]
    pub max_expansions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unknown_policy: UnknownPolicy::Optimistic,
            max_expansions: 0,
        }
    }
}

impl PlannerConfig {
    /// Config with the conservative policy.
    pub fn conservative() -> Self {
        Self {
            unknown_policy: UnknownPolicy::Conservative,
            ..Default::default()
        }
    }

    /// Set the expansion limit.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

/// Ordered cells from the agent's cell to the goal.
///
/// `cells[0]` is the cell the search started from, the last cell is the
/// goal. Empty means no route is currently known.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    cells: Vec<GridCoord>,
}

impl Route {
    /// Wrap a cell sequence.
    pub fn new(cells: Vec<GridCoord>) -> Self {
        Self { cells }
    }

    /// The "no route" signal.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no route is known.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (cells minus one).
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Cell the route starts from.
    pub fn first(&self) -> Option<GridCoord> {
        self.cells.first().copied()
    }

    /// Cell after the start, the agent's next waypoint.
    pub fn next_waypoint(&self) -> Option<GridCoord> {
        self.cells.get(1).copied()
    }

    /// Final cell.
    pub fn goal(&self) -> Option<GridCoord> {
        self.cells.last().copied()
    }

    /// All cells.
    pub fn cells(&self) -> &[GridCoord] {
        &self.cells
    }

    /// Iterate over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, GridCoord> {
        self.cells.iter()
    }

    /// Does the route pass through `coord`?
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }

    /// Drop all cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a GridCoord;
    type IntoIter = std::slice::Iter<'a, GridCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Result of one planning run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanResult {
    /// Route (empty if none found)
    pub route: Route,
    /// Route cost in moves
    pub cost: u32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (if any)
    pub failure: Option<PathFailure>,
}

impl PlanResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            route: Route::empty(),
            cost: 0,
            nodes_expanded,
            failure: Some(reason),
        }
    }

    /// Whether a route was found.
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Why no route was returned. All of these are ordinary outcomes that the
/// simulation answers by exploring further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathFailure {
    /// Start or goal is outside the grid
    OutOfBounds,
    /// Goal cell is not traversable under the current policy
    GoalBlocked,
    /// Frontier exhausted without reaching the goal
    NoPath,
    /// Expansion limit hit
    MaxExpansionsExceeded,
}
