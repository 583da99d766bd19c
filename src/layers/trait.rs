//! Layer trait definition for neural network layers
//!
//! This module defines the core Layer trait that all layer types implement:
//! a forward pass, and a backward pass that both returns the gradient for the
//! previous layer and applies the layer's own parameter update.

use ndarray::Array2;

use crate::error::Result;

/// Core trait for neural network layers.
///
/// Layers work on column matrices: one example is an `(features, 1)` matrix,
/// and extra columns are carried through unchanged in count.
///
/// # Caching contract
///
/// `forward` stores whatever the layer needs for its gradient (at least the
/// input). The next `backward` reads that cache. Calls must therefore
/// alternate forward, backward per example; a second `forward` before the
/// `backward` overwrites the cache.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use tanh_net::layers::{Activation, Layer};
///
/// let mut layer = Activation::tanh();
/// let output = layer.forward(&array![[0.0], [1.0]]).unwrap();
/// let grad = layer.backward(&array![[1.0], [1.0]], 0.1, 0).unwrap();
/// assert_eq!(output.dim(), grad.dim());
/// ```
pub trait Layer {
    /// Forward propagation through the layer.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `input` is incompatible with the layer's
    /// parameters.
    fn forward(&mut self, input: &Array2<f64>) -> Result<Array2<f64>>;

    /// Backward propagation through the layer.
    ///
    /// Given the gradient of the loss with respect to this layer's last
    /// output, returns the gradient with respect to its last input and
    /// updates any owned parameters.
    ///
    /// # Arguments
    ///
    /// * `output_gradient` - dL/d(output), shaped like the last output
    /// * `learning_rate` - Step size for the parameter update
    /// * `step` - Zero-based optimizer step, used by Adam's bias correction
    ///
    /// # Errors
    ///
    /// `BackwardBeforeForward` if no input has been cached yet, or
    /// `DimensionMismatch` for a wrongly shaped gradient.
    fn backward(
        &mut self,
        output_gradient: &Array2<f64>,
        learning_rate: f64,
        step: usize,
    ) -> Result<Array2<f64>>;

    /// Short layer name for logs.
    fn name(&self) -> &'static str;

    /// Number of trainable parameters.
    fn parameter_count(&self) -> usize;
}
