//! Simulated range scanner.
//!
//! The scanner is the only component allowed to read the
//! [`TrueEnvironment`](crate::environment::TrueEnvironment). Its output is a
//! pure [`Observation`]; folding that into the belief is
//! [`grid::merge`](crate::grid::merge)'s job.
//!
//! - [`config`]: [`LidarConfig`] (range, ray count, field of view, step)
//! - [`ray_march`]: [`RayMarch`] fixed-step sample iterator
//! - [`scanner`]: [`scan`], [`Observation`], [`RayTermination`]

pub mod config;
pub mod ray_march;
pub mod scanner;

pub use config::LidarConfig;
pub use ray_march::{RayMarch, RaySample};
pub use scanner::{Observation, RayHit, RayTermination, scan};
