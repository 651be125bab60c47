//! Configuration loading for the Monte Carlo runner
//!
//! Supports JSON configuration files. Every field has a default, so `{}`
//! is a valid configuration:
//!
//! ```json
//! {
//!   "trials": 100000,
//!   "seed": 42,
//!   "workers": 4,
//!   "decimal_places": 2
//! }
//! ```

use monty_ports::SeedSource;
use monty_rng::{EntropySeed, FixedSeed};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Upper bound on display precision for rounded proportions
pub const MAX_DECIMAL_PLACES: u32 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of games to play
    #[serde(default = "default_trials")]
    pub trials: u64,

    /// Master seed; `None` draws one from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Worker count for the parallel runner
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Decimal places for displayed proportions
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_trials() -> u64 {
    10_000
}

fn default_workers() -> usize {
    1
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            seed: None,
            workers: default_workers(),
            decimal_places: default_decimal_places(),
        }
    }
}

impl RunnerConfig {
    /// Default configuration with a fixed trial count and seed
    pub fn seeded(trials: u64, seed: u64) -> Self {
        Self {
            trials,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid(
                "workers must be at least 1".to_string(),
            ));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::Invalid(format!(
                "decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.decimal_places
            )));
        }
        Ok(())
    }

    /// Seed source matching the configured seed
    pub fn seed_source(&self) -> Box<dyn SeedSource> {
        match self.seed {
            Some(seed) => Box::new(FixedSeed::new(seed)),
            None => Box::new(EntropySeed::new()),
        }
    }
}
