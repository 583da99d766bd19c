use std::path::Path;

use rand::{rngs::StdRng, SeedableRng};
use tanh_net::architecture::{build_network, load_architecture};
use tanh_net::config::load_config;
use tanh_net::{
    Activation, Dense, MeanSquaredError, Network, OptimizerKind, Result, Sample, TrainingConfig,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Learn XOR with a 2-2-1 tanh network (educational example).
const NUM_INPUTS: usize = 2;
const NUM_HIDDEN: usize = 2;
const NUM_OUTPUTS: usize = 1;
// Training hyperparameters used when no config file is present.
const LEARNING_RATE: f64 = 0.1;
const EPOCHS: usize = 1000;
const SEED: u64 = 42;

const TRAINING_CONFIG: &str = "config/xor_training.json";
const ARCHITECTURE_CONFIG: &str = "config/architectures/xor.json";

// XOR truth table as (inputs, expected output) samples.
fn xor_dataset() -> (Vec<Sample>, Vec<Sample>) {
    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let outputs = [[0.0], [1.0], [1.0], [0.0]];
    (
        inputs.iter().map(|&x| x.into()).collect(),
        outputs.iter().map(|&y| y.into()).collect(),
    )
}

// Dense(2→2) → Tanh → Dense(2→1) → Tanh.
fn default_network(rng: &mut StdRng) -> Network {
    Network::new(vec![
        Dense::new(NUM_INPUTS, NUM_HIDDEN, OptimizerKind::Sgd, rng).into(),
        Activation::tanh().into(),
        Dense::new(NUM_HIDDEN, NUM_OUTPUTS, OptimizerKind::Sgd, rng).into(),
        Activation::tanh().into(),
    ])
}

// Use the JSON files when they exist, otherwise the built-in defaults.
fn load_setup(rng: &mut StdRng) -> Result<(Network, TrainingConfig)> {
    let config = if Path::new(TRAINING_CONFIG).exists() {
        load_config(TRAINING_CONFIG)?
    } else {
        warn!(path = TRAINING_CONFIG, "training config not found, using defaults");
        TrainingConfig::new(LEARNING_RATE, EPOCHS).verbose(true)
    };

    let network = if Path::new(ARCHITECTURE_CONFIG).exists() {
        build_network(&load_architecture(ARCHITECTURE_CONFIG)?, rng)?
    } else {
        warn!(path = ARCHITECTURE_CONFIG, "architecture not found, using defaults");
        default_network(rng)
    };

    Ok((network, config))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let (mut network, config) = load_setup(&mut rng)?;
    let (x_train, y_train) = xor_dataset();

    info!(
        layers = network.len(),
        parameters = network.parameter_count(),
        learning_rate = config.learning_rate,
        epochs = config.epochs,
        "training XOR"
    );
    let errors = network.train(&x_train, &y_train, &MeanSquaredError, &config)?;
    if let Some(last) = errors.last() {
        info!(final_error = *last, "training finished");
    }

    // Print predictions for each input pattern.
    for (x, y) in x_train.iter().zip(&y_train) {
        let prediction = network.predict(x)?;
        println!(
            "{:?} -> {:.4} (expected {:?})",
            x.to_column().iter().collect::<Vec<_>>(),
            prediction[[0, 0]],
            y.to_column().iter().collect::<Vec<_>>()
        );
    }

    Ok(())
}
