//! Simulation errors.

use crate::environment::EnvironmentError;

/// Errors from episode control. Ticks themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The new map description was malformed.
    #[error("environment error: {0}")]
    Environment(#[from] EnvironmentError),

    /// Regeneration was requested while the episode is ticking.
    #[error("cannot regenerate the map while the simulation is running")]
    Running,
}

/// Result type alias for episode control.
pub type Result<T> = std::result::Result<T, SimulationError>;
