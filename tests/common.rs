//! Test utilities for drishti integration tests.
//!
//! Maps, belief snapshots and a brute-force route length for comparing
//! against the planner.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use drishti::grid::{DenseGrid, OccupancyGrid};
use drishti::simulation::{Episode, SimulationConfig};
use drishti::{CellType, GridCoord, TrueEnvironment};

/// 20×8 room, start (1, 1), goal (10, 4). A wall at column 8 spans rows
/// 2 to 5, with a one-cell gap at row 3 inside that span (walls at rows 2,
/// 4 and 5).
pub const GAP_WALL: &str = include_str!("../maps/gap_wall.txt");

/// Small maze used for planner checks.
pub const MAZE: &str = "\
############
#S..#......#
#.#.#.####.#
#.#...#....#
#.#####.##.#
#.....#..#.#
#####.##.#.#
#......#..E#
############";

/// Parse an ASCII map, panicking on bad test input.
pub fn env_from(text: &str) -> TrueEnvironment {
    TrueEnvironment::from_ascii(text).expect("test map parses")
}

/// Episode on `env` with default settings, already started.
pub fn running_episode(env: TrueEnvironment) -> Episode {
    let mut episode = Episode::new(env, SimulationConfig::default());
    episode.start();
    episode
}

/// Every wall cell in a belief.
pub fn wall_cells<G: OccupancyGrid + ?Sized>(grid: &G) -> Vec<GridCoord> {
    all_cells(grid.width(), grid.height())
        .filter(|&c| grid.is_wall(c))
        .collect()
}

/// Row-major iteration over a `width × height` grid.
pub fn all_cells(width: usize, height: usize) -> impl Iterator<Item = GridCoord> {
    (0..height as i32).flat_map(move |y| (0..width as i32).map(move |x| GridCoord::new(x, y)))
}

/// Belief holding exactly the ground truth (markers as Empty).
pub fn fully_known(env: &TrueEnvironment) -> DenseGrid {
    let mut grid = DenseGrid::new(env.width(), env.height());
    for c in all_cells(env.width(), env.height()) {
        let t = if env.is_wall(c) {
            CellType::Wall
        } else {
            CellType::Empty
        };
        grid.mark(c, t);
    }
    grid
}

/// Shortest route length in cells (start and goal included) over non-wall
/// cells, by breadth-first search.
pub fn bfs_route_len<G: OccupancyGrid + ?Sized>(
    grid: &G,
    start: GridCoord,
    goal: GridCoord,
) -> Option<usize> {
    let mut dist = HashMap::from([(start, 1usize)]);
    let mut queue = VecDeque::from([start]);

    while let Some(c) = queue.pop_front() {
        let d = dist[&c];
        if c == goal {
            return Some(d);
        }
        for n in c.neighbors_4() {
            if grid.contains(n) && !grid.is_wall(n) && !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}
