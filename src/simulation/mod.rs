//! Simulation loop: one sense-merge-plan-move tick at a time.
//!
//! The core is the free function [`tick`], a synchronous, bounded step
//! with no timer inside. [`Episode`] owns the mutable state and the
//! Idle / Running / Completed lifecycle; the wall-clock cadence lives in
//! [`harness::Scheduler`](crate::harness::Scheduler), outside the core.

pub mod config;
mod episode;
mod error;
mod state;
mod tick;

pub use config::{RunSettings, SimulationConfig};
pub use episode::{Episode, EpisodeStats};
pub use error::{Result, SimulationError};
pub use state::{EpisodeEvent, SimulationState};
pub use tick::{TickReport, init_episode, tick};
