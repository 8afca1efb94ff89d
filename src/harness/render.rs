//! ASCII rendering of the agent's view.
//!
//! Draws the belief grid with overlays, one character per cell, row 0 at
//! the top:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `?`  | Unknown (fog) |
//! | `.`  | Empty |
//! | `#`  | Wall |
//! | `o`  | Trail (cells visited) |
//! | `*`  | Planned route |
//! | `E`  | Goal |
//! | `@`  | Agent |
//!
//! Later overlays win: the agent is drawn over the goal, the goal over the
//! route, the route over the trail.

use std::fmt::Write;

use crate::core::{CellType, GridCoord, Pose2D, WorldPoint};
use crate::grid::OccupancyGrid;
use crate::pathfinding::Route;
use crate::simulation::Episode;

/// Builder for one frame.
pub struct AsciiRenderer<'a, G: OccupancyGrid + ?Sized> {
    belief: &'a G,
    trail: Vec<GridCoord>,
    route: Vec<GridCoord>,
    goal: Option<GridCoord>,
    agent: Option<GridCoord>,
}

impl<'a, G: OccupancyGrid + ?Sized> AsciiRenderer<'a, G> {
    /// Frame showing only the belief.
    pub fn new(belief: &'a G) -> Self {
        Self {
            belief,
            trail: Vec::new(),
            route: Vec::new(),
            goal: None,
            agent: None,
        }
    }

    /// Overlay visited positions.
    pub fn with_trail(mut self, trail: &[WorldPoint]) -> Self {
        self.trail = trail.iter().map(|p| p.to_grid()).collect();
        self
    }

    /// Overlay a planned route.
    pub fn with_route(mut self, route: &Route) -> Self {
        self.route = route.cells().to_vec();
        self
    }

    /// Mark the goal cell.
    pub fn with_goal(mut self, goal: GridCoord) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Mark the agent's cell.
    pub fn with_agent(mut self, pose: &Pose2D) -> Self {
        self.agent = Some(pose.cell());
        self
    }

    /// Render to a newline-separated string (no trailing newline).
    pub fn render(&self) -> String {
        let width = self.belief.width();
        let height = self.belief.height();

        let mut frame: Vec<Vec<char>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let cell = self.belief.get_type(GridCoord::new(x as i32, y as i32));
                        base_char(cell)
                    })
                    .collect()
            })
            .collect();

        let mut overlay = |coord: GridCoord, c: char| {
            if self.belief.contains(coord) {
                frame[coord.y as usize][coord.x as usize] = c;
            }
        };

        for &coord in &self.trail {
            overlay(coord, 'o');
        }
        for &coord in &self.route {
            overlay(coord, '*');
        }
        if let Some(goal) = self.goal {
            overlay(goal, 'E');
        }
        if let Some(agent) = self.agent {
            overlay(agent, '@');
        }

        let mut out = String::with_capacity((width + 1) * height);
        for (i, row) in frame.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

/// Render an episode's current frame with every overlay, plus a status
/// line underneath.
pub fn render_episode(episode: &Episode) -> String {
    let mut out = AsciiRenderer::new(episode.belief())
        .with_trail(episode.trail())
        .with_route(episode.route())
        .with_goal(episode.goal())
        .with_agent(&episode.pose())
        .render();

    let stats = episode.stats();
    let pose = episode.pose();
    let _ = write!(
        out,
        "\n[{}] tick={} pose=({:.2}, {:.2}) route={} discovered={}",
        episode.state().name(),
        stats.ticks,
        pose.x,
        pose.y,
        episode.route().len(),
        stats.cells_discovered
    );
    out
}

#[inline]
fn base_char(cell: CellType) -> char {
    // Markers in a belief are just free space
    cell.occupancy().as_char()
}
