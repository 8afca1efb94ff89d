//! Episode state machine.
//!
//! ```text
//!            start()              goal within tolerance
//!   ┌──────┐ ──────► ┌─────────┐ ────────────────────► ┌───────────┐
//!   │ Idle │         │ Running │                       │ Completed │
//!   └──────┘ ◄────── └─────────┘                       └───────────┘
//!      ▲     pause()                                         │
//!      └─────────────────── reset() / regenerate() ──────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Lifecycle state of one episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulationState {
    /// Waiting for start (fresh, paused or reset).
    #[default]
    Idle,

    /// Ticking.
    Running,

    /// Goal reached. Terminal until reset.
    Completed,
}

impl SimulationState {
    /// Get a short description of the state.
    pub fn name(&self) -> &'static str {
        match self {
            SimulationState::Idle => "Idle",
            SimulationState::Running => "Running",
            SimulationState::Completed => "Completed",
        }
    }

    /// Are ticks being executed?
    pub fn is_running(&self) -> bool {
        *self == SimulationState::Running
    }

    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        *self == SimulationState::Completed
    }
}

/// Notable things a tick can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeEvent {
    /// Agent is on the goal; the episode is complete.
    GoalReached,
    /// The previous tick had a route and this one has none.
    RouteLost,
    /// A route exists again after one or more ticks without.
    RouteFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(SimulationState::default().name(), "Idle");
        assert_eq!(SimulationState::Running.name(), "Running");
        assert!(SimulationState::Running.is_running());
        assert!(SimulationState::Completed.is_terminal());
        assert!(!SimulationState::Idle.is_terminal());
    }
}
