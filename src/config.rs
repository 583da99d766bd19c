//! Configuration structures for training
//!
//! This module provides the training hyperparameters consumed by
//! [`Network::train`](crate::network::Network::train), loadable from JSON.

use serde::Deserialize;
use std::fs;

use crate::error::{NetworkError, Result};

/// Default number of training epochs.
pub const DEFAULT_EPOCHS: usize = 1000;

/// What the `step` passed to each layer's backward pass counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdamStep {
    /// The epoch index, shared by every update within an epoch.
    #[default]
    PerEpoch,
    /// A run-wide counter incremented after every training example.
    PerUpdate,
}

/// Configuration for a training run.
///
/// # Example
///
/// ```json
/// {
///   "learning_rate": 0.1,
///   "epochs": 1000,
///   "verbose": true,
///   "adam_step": "per_epoch"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingConfig {
    /// Step size passed to every layer's backward pass
    pub learning_rate: f64,

    /// Number of full passes over the dataset
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Log one line per epoch at info level
    #[serde(default)]
    pub verbose: bool,

    /// Source of the optimizer step counter
    #[serde(default)]
    pub adam_step: AdamStep,
}

fn default_epochs() -> usize {
    DEFAULT_EPOCHS
}

impl TrainingConfig {
    /// Quiet per-epoch configuration with the given learning rate and epochs.
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
            verbose: false,
            adam_step: AdamStep::PerEpoch,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn adam_step(mut self, adam_step: AdamStep) -> Self {
        self.adam_step = adam_step;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetworkError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// Loads a training configuration from a JSON file.
///
/// Reads the file at `path` and deserializes its JSON contents into a
/// `TrainingConfig`, then validates it.
///
/// # Examples
///
/// ```no_run
/// use tanh_net::config::load_config;
///
/// let cfg = load_config("config/xor_training.json").unwrap();
/// assert!(cfg.learning_rate > 0.0);
/// ```
pub fn load_config(path: &str) -> Result<TrainingConfig> {
    let contents = fs::read_to_string(path)?;
    let config: TrainingConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
