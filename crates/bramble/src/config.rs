//! Simulation loop configuration.
//!
//! Loaded once at startup from a TOML file. Every field has a default so an
//! empty file is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed config holds an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Default variable ticks per second.
fn default_tick_rate() -> u32 {
    60
}

/// Default fixed timestep in seconds.
fn default_fixed_timestep() -> f32 {
    0.02
}

/// Settings driving [`SimulationLoop`](crate::SimulationLoop).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target variable ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,

    /// Seconds simulated by each fixed tick.
    #[serde(default = "default_fixed_timestep")]
    pub fixed_timestep: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            fixed_timestep: default_fixed_timestep(),
        }
    }
}

impl SimulationConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus the
    /// errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks the values are usable by the loop.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the tick rate is zero or the
    /// fixed timestep is not a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        if !self.fixed_timestep.is_finite() || self.fixed_timestep <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fixed_timestep must be a positive number, got {}",
                self.fixed_timestep
            )));
        }
        Ok(())
    }

    /// Seconds per variable tick at the configured rate.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}
