//! Dense (fully connected) layer implementation
//!
//! This module provides a Dense layer (also known as Linear or Fully Connected)
//! that performs the transformation: output = W · input + b

use std::fmt;

use ndarray::{Array2, Axis};
use rand::Rng;

use crate::error::{NetworkError, Result};
use crate::layers::Layer;
use crate::matrix::{checked_dot, ensure_same_shape};
use crate::optimizers::{Optimizer, OptimizerKind};

/// Dense (fully connected) layer with weights and biases.
///
/// Performs the affine transformation `y = W·x + b`
/// where x is the input (input_size × k),
/// W is the weight matrix (output_size × input_size),
/// and b is the bias column (output_size × 1), broadcast across the k columns.
///
/// The update rule (SGD or Adam) is fixed at construction. Each of W and b
/// owns its own optimizer state, which lives as long as the layer.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tanh_net::layers::{Dense, Layer};
/// use tanh_net::optimizers::OptimizerKind;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let layer = Dense::new(784, 512, OptimizerKind::Sgd, &mut rng);
/// assert_eq!(layer.input_size(), 784);
/// assert_eq!(layer.output_size(), 512);
/// ```
pub struct Dense {
    weights: Array2<f64>,
    bias: Array2<f64>,
    optimizer: OptimizerKind,
    weight_optimizer: Box<dyn Optimizer>,
    bias_optimizer: Box<dyn Optimizer>,
    input: Option<Array2<f64>>,
    output: Option<Array2<f64>>,
}

impl Dense {
    /// Create a new Dense layer with uniform random initialization.
    ///
    /// Every weight and bias element is drawn independently from the uniform
    /// distribution on [-1, 1).
    ///
    /// # Arguments
    ///
    /// * `input_size` - Number of input features
    /// * `output_size` - Number of output features
    /// * `optimizer` - Update rule used by `backward`
    /// * `rng` - Random number generator for initialization
    pub fn new<R: Rng>(
        input_size: usize,
        output_size: usize,
        optimizer: OptimizerKind,
        rng: &mut R,
    ) -> Self {
        let weights =
            Array2::from_shape_fn((output_size, input_size), |_| rng.gen_range(-1.0..1.0));
        let bias = Array2::from_shape_fn((output_size, 1), |_| rng.gen_range(-1.0..1.0));
        Self::with_state(weights, bias, optimizer)
    }

    /// Create a Dense layer from explicit parameters.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `bias` is `(weights.nrows(), 1)`.
    pub fn from_parameters(
        weights: Array2<f64>,
        bias: Array2<f64>,
        optimizer: OptimizerKind,
    ) -> Result<Self> {
        if bias.dim() != (weights.nrows(), 1) {
            return Err(NetworkError::dimension_mismatch(
                "dense parameters",
                weights.dim(),
                bias.dim(),
            ));
        }
        Ok(Self::with_state(weights, bias, optimizer))
    }

    fn with_state(weights: Array2<f64>, bias: Array2<f64>, optimizer: OptimizerKind) -> Self {
        Self {
            weight_optimizer: optimizer.build(weights.dim()),
            bias_optimizer: optimizer.build(bias.dim()),
            weights,
            bias,
            optimizer,
            input: None,
            output: None,
        }
    }

    /// Get the input size of the layer.
    pub fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Get the output size of the layer.
    pub fn output_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Weight matrix (output_size × input_size).
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Bias column (output_size × 1).
    pub fn bias(&self) -> &Array2<f64> {
        &self.bias
    }

    pub fn optimizer_kind(&self) -> OptimizerKind {
        self.optimizer
    }

    /// Gradient of the loss with respect to W for the cached input:
    /// `output_gradient · inputᵀ`.
    pub fn weights_gradient(&self, output_gradient: &Array2<f64>) -> Result<Array2<f64>> {
        let input = self
            .input
            .as_ref()
            .ok_or(NetworkError::BackwardBeforeForward { layer: "dense" })?;
        checked_dot(output_gradient.view(), input.t(), "dense weights gradient")
    }
}

impl fmt::Debug for Dense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dense")
            .field("weights", &self.weights)
            .field("bias", &self.bias)
            .field("optimizer", &self.optimizer)
            .finish_non_exhaustive()
    }
}

impl Layer for Dense {
    fn forward(&mut self, input: &Array2<f64>) -> Result<Array2<f64>> {
        let product = checked_dot(self.weights.view(), input.view(), "dense forward")?;
        let output = product + &self.bias;

        self.input = Some(input.clone());
        self.output = Some(output.clone());
        Ok(output)
    }

    fn backward(
        &mut self,
        output_gradient: &Array2<f64>,
        learning_rate: f64,
        step: usize,
    ) -> Result<Array2<f64>> {
        let output = self
            .output
            .as_ref()
            .ok_or(NetworkError::BackwardBeforeForward { layer: "dense" })?;
        ensure_same_shape(output, output_gradient, "dense backward")?;

        let weights_gradient = self.weights_gradient(output_gradient)?;
        // Must use W before this step's update.
        let input_gradient =
            checked_dot(self.weights.t(), output_gradient.view(), "dense backward")?;
        let bias_gradient = output_gradient.sum_axis(Axis(1)).insert_axis(Axis(1));

        self.weight_optimizer
            .update(&mut self.weights, &weights_gradient, learning_rate, step)?;
        self.bias_optimizer
            .update(&mut self.bias, &bias_gradient, learning_rate, step)?;

        Ok(input_gradient)
    }

    fn name(&self) -> &'static str {
        "dense"
    }

    /// Returns output_size × input_size (weights) + output_size (biases).
    fn parameter_count(&self) -> usize {
        self.weights.len() + self.bias.len()
    }
}
