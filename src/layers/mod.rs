//! Layer abstractions for neural networks
//!
//! This module provides the Layer trait, the two concrete layer types, and
//! [`LayerKind`], the tagged variant a [`Network`](crate::network::Network)
//! stores.

mod r#trait;
pub mod activation;
pub mod dense;

use ndarray::Array2;

use crate::error::Result;

// Re-export the Layer trait for convenience
pub use r#trait::Layer;
pub use activation::{Activation, ActivationKind};
pub use dense::Dense;

/// One layer of a network.
#[derive(Debug)]
pub enum LayerKind {
    Dense(Dense),
    Activation(Activation),
}

impl LayerKind {
    /// The Dense layer, if this is one.
    pub fn as_dense(&self) -> Option<&Dense> {
        match self {
            LayerKind::Dense(dense) => Some(dense),
            LayerKind::Activation(_) => None,
        }
    }

    pub fn as_activation(&self) -> Option<&Activation> {
        match self {
            LayerKind::Activation(activation) => Some(activation),
            LayerKind::Dense(_) => None,
        }
    }
}

impl From<Dense> for LayerKind {
    fn from(layer: Dense) -> Self {
        LayerKind::Dense(layer)
    }
}

impl From<Activation> for LayerKind {
    fn from(layer: Activation) -> Self {
        LayerKind::Activation(layer)
    }
}

impl Layer for LayerKind {
    fn forward(&mut self, input: &Array2<f64>) -> Result<Array2<f64>> {
        match self {
            LayerKind::Dense(layer) => layer.forward(input),
            LayerKind::Activation(layer) => layer.forward(input),
        }
    }

    fn backward(
        &mut self,
        output_gradient: &Array2<f64>,
        learning_rate: f64,
        step: usize,
    ) -> Result<Array2<f64>> {
        match self {
            LayerKind::Dense(layer) => layer.backward(output_gradient, learning_rate, step),
            LayerKind::Activation(layer) => layer.backward(output_gradient, learning_rate, step),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            LayerKind::Dense(layer) => layer.name(),
            LayerKind::Activation(layer) => layer.name(),
        }
    }

    fn parameter_count(&self) -> usize {
        match self {
            LayerKind::Dense(layer) => layer.parameter_count(),
            LayerKind::Activation(layer) => layer.parameter_count(),
        }
    }
}
