//! # Drishti: Fog-of-War Grid Navigation
//!
//! An agent explores a grid it cannot see. Each tick it casts simulated
//! lidar rays, folds what they reveal into a belief occupancy grid, plans
//! a route to the goal over that belief with A*, and takes one bounded
//! step along the route. Routes are replanned from scratch every tick, so
//! the agent walks optimistically into the unknown and detours as walls
//! appear.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use drishti::environment::MapDescription;
//! use drishti::simulation::{Episode, SimulationConfig, SimulationState};
//!
//! let mut episode =
//!     Episode::from_description(&MapDescription::Level(0), SimulationConfig::default())
//!         .expect("built-in level");
//! episode.start();
//! let state = episode.run_until_stopped(1000);
//! assert_eq!(state, SimulationState::Completed);
//! ```
//!
//! ## Coordinates
//!
//! - Grid cells are addressed by integer `(x, y)`, x to the right, y down
//!   (row index).
//! - World positions are continuous, in cell units; cell `(x, y)` has its
//!   centre at world `(x, y)`.
//! - [`WorldPoint::to_grid`](core::WorldPoint::to_grid) rounds half up and
//!   is the only world-to-grid conversion.
//!
//! ## Data Flow
//!
//! ```text
//!   ┌──────────────────┐  build_environment   ┌──────────────────┐
//!   │  MapDescription  │ ───────────────────► │ TrueEnvironment  │
//!   │ ascii / level /  │                      │ (ground truth)   │
//!   │   procedural     │                      └────────┬─────────┘
//!   └──────────────────┘                               │ scan
//!                                                      ▼
//!   ┌──────────────────┐        merge         ┌──────────────────┐
//!   │    BeliefMap     │ ◄─────────────────── │   Observation    │
//!   │ (fog of war)     │                      │  walls / empty   │
//!   └────────┬─────────┘                      └──────────────────┘
//!            │ plan (A*)                               ▲
//!            ▼                                         │
//!   ┌──────────────────┐       advance        ┌────────┴─────────┐
//!   │      Route       │ ───────────────────► │      Pose2D      │
//!   └──────────────────┘                      └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Coordinates, poses and cell states
//! - [`grid`]: Occupancy grid storages and the belief merge
//! - [`environment`]: Ground truth: ASCII maps, built-in levels, generator
//! - [`sensor`]: Ray-marching range scanner
//! - [`pathfinding`]: A* over the belief
//! - [`motion`]: Bounded motion step along a route
//! - [`simulation`]: The tick and the episode that owns its state
//! - [`config`]: YAML configuration
//! - [`harness`]: Fixed-interval scheduler and ASCII rendering

pub mod config;
pub mod core;
pub mod environment;
pub mod grid;
pub mod harness;
pub mod motion;
pub mod pathfinding;
pub mod sensor;
pub mod simulation;

// Re-export main types at crate root
pub use config::{ConfigLoadError, DrishtiConfig};
pub use core::{CellType, GridCoord, Pose2D, WorldPoint};
pub use environment::{EnvironmentError, MapDescription, TrueEnvironment, build_environment};
pub use grid::{BeliefMap, DenseGrid, OccupancyGrid, SparseGrid};
pub use pathfinding::{PlanResult, PlannerConfig, Route, plan};
pub use sensor::{LidarConfig, Observation, scan};
pub use simulation::{
    Episode, EpisodeEvent, SimulationConfig, SimulationError, SimulationState, TickReport, tick,
};
