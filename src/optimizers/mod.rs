//! Optimizer abstractions for neural network parameter updates
//!
//! This module provides the Optimizer trait and the two update rules a
//! [`Dense`](crate::layers::Dense) layer can be built with.
//!
//! # Overview
//!
//! Optimizers define how to use gradients to update model parameters. The basic
//! gradient descent update is `weight = weight - learning_rate * gradient`; Adam
//! keeps exponential moving averages of the gradient and its square and scales
//! each element's step by them.
//!
//! # Available Optimizers
//!
//! - SGD: Vanilla stochastic gradient descent
//! - Adam: Adaptive moment estimation with bias correction
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use tanh_net::optimizers::{Optimizer, OptimizerKind};
//!
//! let mut weights = array![[1.0, 2.0]];
//! let gradients = array![[0.5, -0.5]];
//!
//! let mut optimizer = OptimizerKind::Sgd.build(weights.dim());
//! optimizer.update(&mut weights, &gradients, 0.1, 0).unwrap();
//! assert!((weights[[0, 0]] - 0.95).abs() < 1e-12);
//! ```

pub mod adam;
pub mod sgd;

pub use adam::Adam;
pub use sgd::Sgd;

use ndarray::Array2;
use serde::Deserialize;

use crate::error::Result;

/// Core trait for parameter update rules.
///
/// One optimizer instance owns the state for exactly one parameter matrix
/// (a Dense layer holds one for its weights and one for its bias), so
/// stateful rules like Adam never mix accumulators between tensors.
///
/// # State Management
///
/// Adam keeps first and second moment estimates shaped like the parameter.
/// They persist across every call until [`Optimizer::reset`] is invoked; the
/// training loop never resets them.
pub trait Optimizer: Send {
    /// Update parameters in place.
    ///
    /// # Arguments
    ///
    /// * `parameters` - Parameter matrix to update (weights or bias)
    /// * `gradients` - Gradient of the loss with respect to `parameters`
    /// * `learning_rate` - Step size for this update
    /// * `step` - Zero-based optimizer step, used for bias correction
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `gradients` is not shaped like `parameters`.
    fn update(
        &mut self,
        parameters: &mut Array2<f64>,
        gradients: &Array2<f64>,
        learning_rate: f64,
        step: usize,
    ) -> Result<()>;

    /// Clear accumulated state. A no-op for stateless rules.
    fn reset(&mut self);

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Update rule selected for a Dense layer at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    /// Plain gradient descent.
    #[default]
    Sgd,
    /// Bias-corrected Adam with the crate's default hyperparameters.
    Adam,
}

impl OptimizerKind {
    /// Create fresh optimizer state for a parameter of the given shape.
    pub fn build(self, shape: (usize, usize)) -> Box<dyn Optimizer> {
        match self {
            OptimizerKind::Sgd => Box::new(Sgd),
            OptimizerKind::Adam => Box::new(Adam::new(shape)),
        }
    }
}
