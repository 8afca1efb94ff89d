//! Presentation harness: the timer that drives an episode, and a text view
//! of what the agent knows.
//!
//! Nothing in the simulation core depends on this module.

pub mod render;
mod scheduler;

pub use render::{AsciiRenderer, render_episode};
pub use scheduler::{RunSummary, Scheduler, StopReason};
