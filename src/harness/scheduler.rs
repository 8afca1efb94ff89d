//! Fixed-interval tick scheduler.
//!
//! The periodic timer that drives an [`Episode`]. It lives outside the
//! simulation types: the episode only knows how to run one tick, the
//! scheduler decides when.
//!
//! ```text
//!   loop:
//!     t0 = now
//!     episode.tick() ──► on_tick(&episode, &report)
//!     stop if Completed / paused / tick limit
//!     sleep(interval - (now - t0))
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::simulation::{Episode, RunSettings, SimulationState, TickReport};

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The agent reached the goal.
    Completed,
    /// `max_ticks` ticks ran without reaching the goal.
    TickLimit,
    /// The episode was not running (never started, or paused).
    NotRunning,
}

/// Outcome of [`Scheduler::run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Ticks executed by this run
    pub ticks: u64,
    /// Episode state when the run returned
    pub final_state: SimulationState,
    /// Why the run returned
    pub stop_reason: StopReason,
    /// Wall-clock time spent, sleeps included
    pub elapsed: Duration,
}

/// Drives an episode at a fixed tick interval.
#[derive(Clone, Debug)]
pub struct Scheduler {
    interval: Duration,
    max_ticks: u64,
}

impl Scheduler {
    /// `max_ticks` = 0 means no limit.
    pub fn new(interval: Duration, max_ticks: u64) -> Self {
        Self {
            interval,
            max_ticks,
        }
    }

    /// Build from run settings.
    pub fn from_settings(settings: &RunSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.tick_interval_ms),
            settings.max_ticks,
        )
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Tick limit (0 = unlimited).
    pub fn max_ticks(&self) -> u64 {
        self.max_ticks
    }

    /// Tick `episode` until it completes, stops running, or hits the tick
    /// limit. `on_tick` sees the episode and report after every tick.
    ///
    /// Blocks the calling thread; one tick always finishes before the next
    /// begins.
    pub fn run<F>(&self, episode: &mut Episode, mut on_tick: F) -> RunSummary
    where
        F: FnMut(&Episode, &TickReport),
    {
        let run_start = Instant::now();
        let mut ticks = 0;

        info!(
            "[Scheduler] Running: interval={}ms max_ticks={}",
            self.interval.as_millis(),
            self.max_ticks
        );

        let stop_reason = loop {
            let step_start = Instant::now();

            let Some(report) = episode.tick() else {
                break StopReason::NotRunning;
            };
            ticks += 1;
            on_tick(episode, &report);

            if episode.state() == SimulationState::Completed {
                break StopReason::Completed;
            }
            if !episode.state().is_running() {
                break StopReason::NotRunning;
            }
            if self.max_ticks > 0 && ticks >= self.max_ticks {
                break StopReason::TickLimit;
            }

            // Rate limiting
            let elapsed = step_start.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        };

        let summary = RunSummary {
            ticks,
            final_state: episode.state(),
            stop_reason,
            elapsed: run_start.elapsed(),
        };
        debug!("[Scheduler] Stopped: {:?}", summary);
        summary
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::from_settings(&RunSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::TrueEnvironment;
    use crate::simulation::SimulationConfig;

    const ROOM: &str = "\
#######
#S...E#
#######";

    fn running_episode() -> Episode {
        let env = TrueEnvironment::from_ascii(ROOM).unwrap();
        let mut episode = Episode::new(env, SimulationConfig::default());
        episode.start();
        episode
    }

    #[test]
    fn test_runs_to_completion() {
        let mut episode = running_episode();
        let mut seen = 0;
        let summary = Scheduler::new(Duration::ZERO, 500).run(&mut episode, |_, _| seen += 1);

        assert_eq!(summary.stop_reason, StopReason::Completed);
        assert_eq!(summary.final_state, SimulationState::Completed);
        assert_eq!(summary.ticks, seen);
        assert_eq!(summary.ticks, episode.stats().ticks);
    }

    #[test]
    fn test_tick_limit() {
        let mut episode = running_episode();
        let summary = Scheduler::new(Duration::ZERO, 3).run(&mut episode, |_, _| {});

        assert_eq!(summary.stop_reason, StopReason::TickLimit);
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.final_state, SimulationState::Running);
    }

    #[test]
    fn test_idle_episode_returns_immediately() {
        let env = TrueEnvironment::from_ascii(ROOM).unwrap();
        let mut episode = Episode::new(env, SimulationConfig::default());
        let summary = Scheduler::new(Duration::from_secs(10), 0).run(&mut episode, |_, _| {});

        assert_eq!(summary.stop_reason, StopReason::NotRunning);
        assert_eq!(summary.ticks, 0);
        assert!(summary.elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_interval_paces_ticks() {
        let mut episode = running_episode();
        let summary = Scheduler::new(Duration::from_millis(5), 3).run(&mut episode, |_, _| {});

        // Sleeps between ticks, not after the last
        assert_eq!(summary.ticks, 3);
        assert!(summary.elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_from_settings() {
        let scheduler = Scheduler::default();
        assert_eq!(scheduler.interval(), Duration::from_millis(100));
        assert_eq!(scheduler.max_ticks(), 2000);
    }
}
