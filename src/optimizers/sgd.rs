//! Stochastic Gradient Descent (SGD) optimizer implementation
//!
//! The basic gradient descent update: `parameter = parameter - learning_rate * gradient`

use ndarray::{Array2, Zip};

use crate::error::Result;
use crate::matrix::ensure_same_shape;
use crate::optimizers::Optimizer;

/// Stochastic Gradient Descent optimizer.
///
/// Implements the basic gradient descent update rule without momentum or
/// adaptive learning rates:
///
/// `w = w - η * ∇L/∂w`
///
/// SGD carries no state, so one value can serve any parameter shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sgd;

impl Optimizer for Sgd {
    fn update(
        &mut self,
        parameters: &mut Array2<f64>,
        gradients: &Array2<f64>,
        learning_rate: f64,
        _step: usize,
    ) -> Result<()> {
        ensure_same_shape(parameters, gradients, "sgd update")?;

        Zip::from(parameters)
            .and(gradients)
            .for_each(|param, &grad| *param -= learning_rate * grad);
        Ok(())
    }

    fn reset(&mut self) {
        // Vanilla SGD has no state to reset
    }

    fn name(&self) -> &'static str {
        "sgd"
    }
}
