//! Tanh Net
//!
//! A small feedforward neural-network library: fully-connected layers with
//! per-layer SGD or Adam updates, elementwise activations, mean squared error,
//! and a sequential network that trains one example at a time.
//!
//! # Modules
//!
//! - `layers`: Layer trait and implementations (Dense, Activation)
//! - `optimizers`: Optimizer trait and implementations (SGD, Adam)
//! - `loss`: Mean squared error and its derivative
//! - `network`: Sequential network with predict, train and evaluate
//! - `matrix`: Sample conversion and shape-checked matrix helpers
//! - `utils`: Scalar activation functions
//! - `config`: Training configuration structures
//! - `architecture`: Architecture configuration and model building
//! - `error`: Error type shared by every fallible operation
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tanh_net::{MeanSquaredError, Network, OptimizerKind, Sample, TrainingConfig};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut network = Network::with_hidden_layers(2, 1, 1, OptimizerKind::Sgd, &mut rng);
//!
//! let x: Vec<Sample> = vec![vec![0.0, 1.0].into(), vec![1.0, 1.0].into()];
//! let y: Vec<Sample> = vec![vec![1.0].into(), vec![0.0].into()];
//! let errors = network
//!     .train(&x, &y, &MeanSquaredError, &TrainingConfig::new(0.1, 5))
//!     .unwrap();
//! assert_eq!(errors.len(), 5);
//!
//! let prediction = network.predict(vec![0.0, 1.0]).unwrap();
//! assert_eq!(prediction.dim(), (1, 1));
//! ```

pub mod architecture;
pub mod config;
pub mod error;
pub mod layers;
pub mod loss;
pub mod matrix;
pub mod network;
pub mod optimizers;
pub mod utils;

pub use config::{AdamStep, TrainingConfig};
pub use error::{NetworkError, Result};
pub use layers::{Activation, ActivationKind, Dense, Layer, LayerKind};
pub use loss::{mse, mse_prime, Loss, MeanSquaredError};
pub use matrix::Sample;
pub use network::Network;
pub use optimizers::{Optimizer, OptimizerKind};
