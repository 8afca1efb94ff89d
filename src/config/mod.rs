//! Unified configuration loading.
//!
//! Loads all configuration from a single YAML file.

mod drishti;
mod error;

pub use drishti::{DEFAULT_CONFIG_PATH, DrishtiConfig};
pub use error::ConfigLoadError;
