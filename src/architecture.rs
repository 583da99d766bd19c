//! Architecture configuration structures
//!
//! This module describes a network's layer sequence in JSON so architectures
//! can be changed without recompiling, validates the description, and builds
//! the corresponding [`Network`].

use rand::Rng;
use serde::Deserialize;
use std::fs;
use tracing::debug;

use crate::error::{NetworkError, Result};
use crate::layers::{ActivationKind, Dense, LayerKind};
use crate::network::Network;
use crate::optimizers::OptimizerKind;

/// Configuration for a single layer in the neural network.
///
/// Tagged by `layer_type`:
///
/// - **dense**: requires `input_size` and `output_size`, optional `optimizer`
///   (`"sgd"` default, or `"adam"`)
/// - **tanh**, **sigmoid**, **relu**: no parameters
///
/// # Examples
///
/// ```json
/// { "layer_type": "dense", "input_size": 2, "output_size": 3, "optimizer": "adam" }
/// ```
///
/// ```json
/// { "layer_type": "tanh" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "layer_type", rename_all = "snake_case")]
pub enum LayerConfig {
    Dense {
        input_size: usize,
        output_size: usize,
        #[serde(default)]
        optimizer: OptimizerKind,
    },
    Tanh,
    Sigmoid,
    Relu,
}

impl LayerConfig {
    /// Instantiates the layer, drawing Dense weights from `rng`.
    fn build<R: Rng>(&self, rng: &mut R) -> LayerKind {
        match *self {
            LayerConfig::Dense {
                input_size,
                output_size,
                optimizer,
            } => Dense::new(input_size, output_size, optimizer, rng).into(),
            LayerConfig::Tanh => ActivationKind::Tanh.build().into(),
            LayerConfig::Sigmoid => ActivationKind::Sigmoid.build().into(),
            LayerConfig::Relu => ActivationKind::Relu.build().into(),
        }
    }
}

/// Configuration for the entire neural network architecture.
///
/// Layers are applied in the order they appear in the configuration.
///
/// # Example
///
/// ```json
/// {
///   "layers": [
///     { "layer_type": "dense", "input_size": 2, "output_size": 2 },
///     { "layer_type": "tanh" },
///     { "layer_type": "dense", "input_size": 2, "output_size": 1 },
///     { "layer_type": "tanh" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArchitectureConfig {
    /// Sequence of layer configurations defining the network structure
    pub layers: Vec<LayerConfig>,
}

/// Loads an architecture configuration from a JSON file.
///
/// # Examples
///
/// ```no_run
/// use tanh_net::architecture::load_architecture;
///
/// let arch = load_architecture("config/architectures/xor.json").unwrap();
/// assert!(!arch.layers.is_empty());
/// ```
pub fn load_architecture(path: &str) -> Result<ArchitectureConfig> {
    let contents = fs::read_to_string(path)?;
    let config: ArchitectureConfig = serde_json::from_str(&contents)?;
    validate_architecture(&config)?;
    Ok(config)
}

/// Validates an architecture configuration.
///
/// Checks that:
/// - Architecture has at least one layer
/// - Dense sizes are greater than zero
/// - Each Dense layer's input size matches the previous Dense layer's output
///   size (activations do not change the width)
pub fn validate_architecture(config: &ArchitectureConfig) -> Result<()> {
    if config.layers.is_empty() {
        return Err(NetworkError::InvalidConfig(
            "architecture must have at least one layer".to_string(),
        ));
    }

    let mut previous_output: Option<(usize, usize)> = None;
    for (index, layer) in config.layers.iter().enumerate() {
        if let LayerConfig::Dense {
            input_size,
            output_size,
            ..
        } = *layer
        {
            if input_size == 0 || output_size == 0 {
                return Err(NetworkError::InvalidConfig(format!(
                    "layer {}: dense sizes must be greater than 0",
                    index
                )));
            }
            if let Some((prev_index, prev_output)) = previous_output {
                if prev_output != input_size {
                    return Err(NetworkError::InvalidConfig(format!(
                        "layer connection mismatch: layer {} output size ({}) \
                         does not match layer {} input size ({})",
                        prev_index, prev_output, index, input_size
                    )));
                }
            }
            previous_output = Some((index, output_size));
        }
    }

    Ok(())
}

/// Builds a network from an architecture configuration.
///
/// Dense weights are drawn from `rng`. The configuration is validated first.
///
/// # Examples
///
/// ```no_run
/// use rand::{rngs::StdRng, SeedableRng};
/// use tanh_net::architecture::{build_network, load_architecture};
///
/// let config = load_architecture("config/architectures/xor.json").unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let network = build_network(&config, &mut rng).unwrap();
/// assert_eq!(network.len(), config.layers.len());
/// ```
pub fn build_network<R: Rng>(config: &ArchitectureConfig, rng: &mut R) -> Result<Network> {
    validate_architecture(config)?;

    let layers: Vec<LayerKind> = config.layers.iter().map(|layer| layer.build(rng)).collect();

    let network = Network::new(layers);
    debug!(
        layers = network.len(),
        parameters = network.parameter_count(),
        "built network from architecture"
    );
    Ok(network)
}
