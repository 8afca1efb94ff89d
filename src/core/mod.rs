//! Core types shared by every stage of the sense-plan-act loop.
//!
//! ## Coordinates
//! - [`GridCoord`]: integer cell indices, used by the belief grid and planner
//! - [`WorldPoint`]: continuous coordinates, used for agent motion and ray marching
//!
//! One world unit is one cell and cell `(x, y)` is centred on world
//! `(x, y)`. [`WorldPoint::to_grid`] is the conversion used at every
//! sensing and planning boundary.
//!
//! ## Agent state
//! - [`Pose2D`]: position plus heading
//!
//! ## Cells
//! - [`CellType`]: Unknown, Empty, Wall, plus the Start/End display markers

mod cell;
mod point;
mod pose;

pub use cell::CellType;
pub use point::{GridCoord, WorldPoint};
pub use pose::{Pose2D, normalize_angle};
