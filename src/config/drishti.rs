//! Main DrishtiConfig and conversion methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::environment::GeneratorConfig;
use crate::motion::MotionConfig;
use crate::pathfinding::PlannerConfig;
use crate::sensor::LidarConfig;
use crate::simulation::{RunSettings, SimulationConfig};

use super::error::ConfigLoadError;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full configuration loaded from YAML.
///
/// Every section and every field is optional; anything missing takes its
/// default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrishtiConfig {
    /// Range scanner settings
    #[serde(default)]
    pub lidar: LidarConfig,

    /// Route planner settings
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Motion step settings
    #[serde(default)]
    pub motion: MotionConfig,

    /// Tick cadence and limits
    #[serde(default)]
    pub simulation: RunSettings,

    /// Procedural map generator
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        debug!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml), or defaults if
    /// the file does not exist
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.lidar.validate().map_err(ConfigLoadError::Invalid)?;

        let step = self.motion.step_size;
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "motion.step_size must be positive, got {step}"
            )));
        }
        let tolerance = self.motion.goal_tolerance;
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "motion.goal_tolerance must be non-negative, got {tolerance}"
            )));
        }

        self.generator
            .validate()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))
    }

    /// Convert to SimulationConfig
    pub fn to_simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            lidar: self.lidar.clone(),
            planner: self.planner.clone(),
            motion: self.motion.clone(),
            run: self.simulation.clone(),
        }
    }
}
