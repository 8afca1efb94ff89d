//! A* planner implementation.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::OccupancyGrid;

use super::types::{AStarNode, PathFailure, PlanResult, PlannerConfig, Route};

/// A* pathfinder over a belief grid.
///
/// 4-connected, unit edge cost, Manhattan heuristic. Neighbours are
/// expanded up, down, left, right. The frontier pops the lowest `f`
/// first and breaks ties by insertion order; a node whose cost is lowered
/// while on the frontier keeps its first position in that order.
pub struct AStarPlanner<'a, G: OccupancyGrid + ?Sized> {
    grid: &'a G,
    config: PlannerConfig,
}

impl<'a, G: OccupancyGrid + ?Sized> AStarPlanner<'a, G> {
    /// Create a new A* planner
    pub fn new(grid: &'a G, config: PlannerConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a G) -> Self {
        Self::new(grid, PlannerConfig::default())
    }

    /// Find a route from start to goal (grid coordinates).
    ///
    /// The start cell is always expandable, whatever the belief says about
    /// it: the agent is standing there.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> PlanResult {
        trace!("[AStar] find_path: start={} goal={}", start, goal);

        if !self.grid.contains(start) || !self.grid.contains(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PlanResult::failed(PathFailure::OutOfBounds, 0);
        }

        if goal != start && !self.is_traversable(goal) {
            debug!(
                "[AStar] FAILED: GoalBlocked at {} ({:?}), policy={:?}",
                goal,
                self.grid.get_type(goal),
                self.config.unknown_policy
            );
            return PlanResult::failed(PathFailure::GoalBlocked, 0);
        }

        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, u32> = HashMap::new();
        let mut sequence: HashMap<GridCoord, u64> = HashMap::new();
        let mut next_seq: u64 = 0;

        open_set.push(AStarNode {
            coord: start,
            g_cost: 0,
            f_cost: start.manhattan_distance(&goal) as u32,
            seq: next_seq,
        });
        g_scores.insert(start, 0);
        sequence.insert(start, next_seq);
        next_seq += 1;

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Stale entry left behind by a relaxation
            if closed_set.contains(&current.coord) {
                continue;
            }

            nodes_expanded += 1;
            if self.config.max_expansions > 0 && nodes_expanded > self.config.max_expansions {
                debug!(
                    "[AStar] FAILED: MaxExpansionsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PlanResult::failed(PathFailure::MaxExpansionsExceeded, nodes_expanded);
            }

            if current.coord == goal {
                return self.reconstruct_path(&came_from, goal, current.g_cost, nodes_expanded);
            }

            closed_set.insert(current.coord);

            for neighbor in current.coord.neighbors_4() {
                if closed_set.contains(&neighbor) || !self.is_traversable(neighbor) {
                    continue;
                }

                let tentative_g = current.g_cost + 1;
                let known_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g >= known_g {
                    continue;
                }

                let seq = *sequence.entry(neighbor).or_insert_with(|| {
                    let s = next_seq;
                    next_seq += 1;
                    s
                });

                came_from.insert(neighbor, current.coord);
                g_scores.insert(neighbor, tentative_g);
                open_set.push(AStarNode {
                    coord: neighbor,
                    g_cost: tentative_g,
                    f_cost: tentative_g + neighbor.manhattan_distance(&goal) as u32,
                    seq,
                });
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PlanResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Find a route between world positions, snapping both to the nearest
    /// cell first.
    pub fn find_path_world(&self, start: WorldPoint, goal: WorldPoint) -> PlanResult {
        self.find_path(start.to_grid(), goal.to_grid())
    }

    #[inline]
    fn is_traversable(&self, coord: GridCoord) -> bool {
        self.grid.contains(coord)
            && self
                .config
                .unknown_policy
                .is_traversable(self.grid.get_type(coord))
    }

    fn reconstruct_path(
        &self,
        came_from: &HashMap<GridCoord, GridCoord>,
        goal: GridCoord,
        cost: u32,
        nodes_expanded: usize,
    ) -> PlanResult {
        let mut cells = Vec::with_capacity(cost as usize + 1);
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            cells.push(current);
            current = prev;
        }
        cells.push(current); // Add start
        cells.reverse();

        trace!(
            "[AStar] SUCCESS: route length={} cells, nodes_expanded={}",
            cells.len(),
            nodes_expanded
        );

        PlanResult {
            route: Route::new(cells),
            cost,
            nodes_expanded,
            failure: None,
        }
    }
}
