//! Per-episode simulation parameters.

use serde::{Deserialize, Serialize};

use crate::motion::MotionConfig;
use crate::pathfinding::PlannerConfig;
use crate::sensor::LidarConfig;

/// Everything one tick needs, plus the cadence the harness runs it at.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Range scanner.
    #[serde(default)]
    pub lidar: LidarConfig,

    /// Route planner.
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Motion step.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Tick cadence and limits.
    #[serde(default)]
    pub run: RunSettings,
}

/// How the harness drives the tick loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Wall-clock interval between ticks in milliseconds.
    /// Default: 100
    #[serde(default = "defaults::tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop after this many ticks. 0 = unlimited.
    /// Default: 2000
    #[serde(default = "defaults::max_ticks")]
    pub max_ticks: u64,
}

mod defaults {
    pub fn tick_interval_ms() -> u64 {
        100
    }
    pub fn max_ticks() -> u64 {
        2000
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::tick_interval_ms(),
            max_ticks: defaults::max_ticks(),
        }
    }
}
