//! Activation layers
//!
//! A parameter-free layer wrapping an elementwise function and its
//! derivative. Tanh, sigmoid and ReLU are provided as factories; any other
//! `(fn, fn)` pair plugs in through [`Activation::new`] without touching the
//! network or training loop.

use ndarray::Array2;
use serde::Deserialize;

use crate::error::{NetworkError, Result};
use crate::layers::Layer;
use crate::matrix::checked_hadamard;
use crate::utils::activations;

/// Elementwise scalar function.
pub type ScalarFn = fn(f64) -> f64;

/// Elementwise nonlinearity with a known derivative.
///
/// `backward` multiplies the incoming gradient by `derivative(input)` using
/// the input cached by the last `forward`.
#[derive(Debug, Clone)]
pub struct Activation {
    name: &'static str,
    function: ScalarFn,
    derivative: ScalarFn,
    input: Option<Array2<f64>>,
}

impl Activation {
    /// Wrap a function and its derivative with respect to the input.
    pub fn new(name: &'static str, function: ScalarFn, derivative: ScalarFn) -> Self {
        Self {
            name,
            function,
            derivative,
            input: None,
        }
    }

    /// Hyperbolic tangent activation.
    pub fn tanh() -> Self {
        Self::new("tanh", activations::tanh, activations::tanh_derivative)
    }

    pub fn sigmoid() -> Self {
        Self::new("sigmoid", activations::sigmoid, activations::sigmoid_derivative)
    }

    pub fn relu() -> Self {
        Self::new("relu", activations::relu, activations::relu_derivative)
    }
}

impl Layer for Activation {
    fn forward(&mut self, input: &Array2<f64>) -> Result<Array2<f64>> {
        let output = input.mapv(self.function);
        self.input = Some(input.clone());
        Ok(output)
    }

    fn backward(
        &mut self,
        output_gradient: &Array2<f64>,
        _learning_rate: f64,
        _step: usize,
    ) -> Result<Array2<f64>> {
        let input = self
            .input
            .as_ref()
            .ok_or(NetworkError::BackwardBeforeForward { layer: self.name })?;
        checked_hadamard(output_gradient, &input.mapv(self.derivative), "activation backward")
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn parameter_count(&self) -> usize {
        0
    }
}

/// Activation functions selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    #[default]
    Tanh,
    Sigmoid,
    Relu,
}

impl ActivationKind {
    pub fn build(self) -> Activation {
        match self {
            ActivationKind::Tanh => Activation::tanh(),
            ActivationKind::Sigmoid => Activation::sigmoid(),
            ActivationKind::Relu => Activation::relu(),
        }
    }
}
