//! Owning wrapper around one exploration episode.
//!
//! [`Episode`] is the single owner of the belief, pose and route. The
//! harness drives it with [`Episode::start`], [`Episode::pause`],
//! [`Episode::reset`], [`Episode::regenerate`] and, on its own timer,
//! [`Episode::tick`]. Independent episodes share nothing and can run on
//! separate threads.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::environment::{MapDescription, TrueEnvironment, build_environment};
use crate::grid::BeliefMap;
use crate::pathfinding::Route;

use super::config::SimulationConfig;
use super::error::{Result, SimulationError};
use super::state::{EpisodeEvent, SimulationState};
use super::tick::{TickReport, init_episode, tick};

/// Cumulative statistics for one episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Ticks executed
    pub ticks: u64,
    /// Path length actually driven
    pub distance_travelled: f32,
    /// Ticks whose plan returned no route
    pub no_route_ticks: u64,
    /// Cells discovered since the episode began
    pub cells_discovered: usize,
    /// A* nodes expanded across all ticks
    pub nodes_expanded: usize,
}

/// One episode: true environment, belief, pose and lifecycle state.
#[derive(Clone, Debug)]
pub struct Episode {
    env: TrueEnvironment,
    config: SimulationConfig,
    belief: BeliefMap,
    pose: Pose2D,
    route: Route,
    state: SimulationState,
    stats: EpisodeStats,
    trail: Vec<WorldPoint>,
}

impl Episode {
    /// New idle episode on an environment.
    pub fn new(env: TrueEnvironment, config: SimulationConfig) -> Self {
        let (belief, pose) = init_episode(&env);
        Self {
            env,
            config,
            belief,
            pose,
            route: Route::empty(),
            state: SimulationState::Idle,
            stats: EpisodeStats::default(),
            trail: vec![pose.position()],
        }
    }

    /// Build the environment from a description, then create the episode.
    pub fn from_description(description: &MapDescription, config: SimulationConfig) -> Result<Self> {
        let env = build_environment(description)?;
        Ok(Self::new(env, config))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Ground truth (for rendering and tests; the planner never sees it).
    pub fn environment(&self) -> &TrueEnvironment {
        &self.env
    }

    /// Agent's belief.
    pub fn belief(&self) -> &BeliefMap {
        &self.belief
    }

    /// Agent pose.
    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    /// Route from the most recent tick.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Goal cell.
    pub fn goal(&self) -> GridCoord {
        self.env.goal()
    }

    /// Cumulative statistics.
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// Positions visited, starting with the start cell.
    pub fn trail(&self) -> &[WorldPoint] {
        &self.trail
    }

    /// Configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Begin or resume ticking. Returns false if nothing changed
    /// (already running, or completed).
    pub fn start(&mut self) -> bool {
        match self.state {
            SimulationState::Idle => {
                info!("[Episode] Started at tick {}", self.stats.ticks);
                self.state = SimulationState::Running;
                true
            }
            SimulationState::Running | SimulationState::Completed => false,
        }
    }

    /// Stop ticking, keeping belief and pose. Returns false if not running.
    pub fn pause(&mut self) -> bool {
        if self.state.is_running() {
            info!("[Episode] Paused at tick {}", self.stats.ticks);
            self.state = SimulationState::Idle;
            true
        } else {
            false
        }
    }

    /// Forget everything learned and return to Idle on the same map.
    pub fn reset(&mut self) {
        let (belief, pose) = init_episode(&self.env);
        self.belief = belief;
        self.pose = pose;
        self.route = Route::empty();
        self.state = SimulationState::Idle;
        self.stats = EpisodeStats::default();
        self.trail = vec![pose.position()];
        info!("[Episode] Reset");
    }

    /// Replace the map and reset. Refused while running.
    pub fn regenerate(&mut self, description: &MapDescription) -> Result<()> {
        if self.state.is_running() {
            return Err(SimulationError::Running);
        }
        self.env = build_environment(description)?;
        self.reset();
        Ok(())
    }

    /// Execute one tick if running. Returns `None` when not running.
    pub fn tick(&mut self) -> Option<TickReport> {
        if !self.state.is_running() {
            return None;
        }

        let goal = self.env.goal();
        let before = self.pose.position();
        let had_route = !self.route.is_empty();

        let mut report = tick(&self.env, &mut self.belief, &mut self.pose, goal, &self.config);

        self.stats.ticks += 1;
        self.stats.cells_discovered += report.newly_discovered();
        self.stats.nodes_expanded += report.nodes_expanded;
        if report.plan_failure.is_some() {
            self.stats.no_route_ticks += 1;
        }

        let after = self.pose.position();
        if after != before {
            self.stats.distance_travelled += before.distance(&after);
            self.trail.push(after);
        }

        if report.event.is_none() {
            report.event = match (had_route, report.route.is_empty()) {
                (true, true) => Some(EpisodeEvent::RouteLost),
                (false, false) if self.stats.ticks > 1 => Some(EpisodeEvent::RouteFound),
                _ => None,
            };
        }

        if report.goal_reached() {
            self.state = SimulationState::Completed;
            info!(
                "[Episode] Goal reached after {} ticks, {:.2} cells travelled",
                self.stats.ticks, self.stats.distance_travelled
            );
        }

        self.route = report.route.clone();
        Some(report)
    }

    /// Tick until the episode stops running or `max_ticks` ticks have run
    /// (0 = no limit). Returns the final state. No wall-clock pacing.
    pub fn run_until_stopped(&mut self, max_ticks: u64) -> SimulationState {
        let mut executed = 0;
        while self.state.is_running() && (max_ticks == 0 || executed < max_ticks) {
            self.tick();
            executed += 1;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellType;
    use crate::grid::OccupancyGrid;

    const ROOM: &str = "\
#######
#S...E#
#######";

    fn episode() -> Episode {
        let env = TrueEnvironment::from_ascii(ROOM).unwrap();
        Episode::new(env, SimulationConfig::default())
    }

    #[test]
    fn test_idle_does_not_tick() {
        let mut ep = episode();
        assert_eq!(ep.state(), SimulationState::Idle);
        assert!(ep.tick().is_none());
        assert_eq!(ep.stats().ticks, 0);
    }

    #[test]
    fn test_start_pause_resume() {
        let mut ep = episode();
        assert!(ep.start());
        assert!(!ep.start());

        ep.tick();
        ep.tick();
        let pose = ep.pose();

        assert!(ep.pause());
        assert!(ep.tick().is_none());
        assert_eq!(ep.pose(), pose);

        assert!(ep.start());
        assert!(ep.tick().is_some());
        assert_eq!(ep.stats().ticks, 3);
    }

    #[test]
    fn test_runs_to_completion() {
        let mut ep = episode();
        ep.start();
        let state = ep.run_until_stopped(500);

        assert_eq!(state, SimulationState::Completed);
        assert!(ep.route().is_empty());
        assert_eq!(ep.pose().cell(), ep.goal());
        assert!(ep.tick().is_none());
        assert!(!ep.start());

        // 4 cells along the corridor
        assert!((ep.stats().distance_travelled - 4.0).abs() < 1e-3);
        assert_eq!(ep.trail().first(), Some(&WorldPoint::new(1.0, 1.0)));
    }

    #[test]
    fn test_reset_forgets_belief() {
        let mut ep = episode();
        ep.start();
        ep.run_until_stopped(500);
        ep.reset();

        assert_eq!(ep.state(), SimulationState::Idle);
        assert_eq!(ep.belief().count_by_type().known(), 1);
        assert_eq!(ep.belief().get_type(ep.environment().start()), CellType::Empty);
        assert_eq!(ep.stats(), &EpisodeStats::default());
        assert_eq!(ep.trail().len(), 1);
    }

    #[test]
    fn test_regenerate_refused_while_running() {
        let mut ep = episode();
        ep.start();
        let result = ep.regenerate(&MapDescription::Level(0));
        assert!(matches!(result, Err(SimulationError::Running)));
        assert_eq!(ep.environment().width(), 7);

        ep.pause();
        ep.regenerate(&MapDescription::Level(0)).unwrap();
        assert_eq!(ep.environment().width(), 20);
        assert_eq!(ep.state(), SimulationState::Idle);
    }

    #[test]
    fn test_regenerate_propagates_map_errors() {
        let mut ep = episode();
        let result = ep.regenerate(&MapDescription::Ascii("...".to_string()));
        assert!(matches!(result, Err(SimulationError::Environment(_))));
        assert_eq!(ep.environment().width(), 7);
    }
}
