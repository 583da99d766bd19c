//! Adam (Adaptive Moment Estimation) optimizer implementation
//!
//! Exponential moving averages of the gradient and squared gradient with bias
//! correction, applied independently to every element of one parameter matrix.

use ndarray::{Array2, Zip};

use crate::error::Result;
use crate::matrix::ensure_same_shape;
use crate::optimizers::Optimizer;

/// Default decay rate for the first moment estimate.
pub const DEFAULT_BETA1: f64 = 0.94;
/// Default decay rate for the second moment estimate.
pub const DEFAULT_BETA2: f64 = 0.9878;
/// Default numerical stability constant.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Adam (Adaptive Moment Estimation) optimizer.
///
/// The update rule for each element, with `t = step + 1`:
///
/// ```text
/// m = β1 * m + (1 - β1) * g
/// v = β2 * v + (1 - β2) * g²
/// m_hat = m / (1 - β1^t)
/// v_hat = v / (1 - β2^t)
/// p = p - α * m_hat / (√v_hat + ε)
/// ```
///
/// The step is supplied by the caller on every update rather than counted
/// internally, so the training loop decides what a "step" is (an epoch or a
/// single example).
///
/// # Reference
///
/// Kingma, D. P., & Ba, J. (2014). Adam: A method for stochastic optimization.
/// arXiv preprint arXiv:1412.6980.
#[derive(Debug, Clone)]
pub struct Adam {
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    /// First moment estimates
    m: Array2<f64>,
    /// Second moment estimates
    v: Array2<f64>,
}

impl Adam {
    /// Adam state for a parameter of `shape` with the default hyperparameters
    /// (β1 = 0.94, β2 = 0.9878, ε = 1e-8).
    pub fn new(shape: (usize, usize)) -> Self {
        Self::with_hyperparameters(shape, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPSILON)
    }

    /// Adam state with explicit hyperparameters.
    pub fn with_hyperparameters(
        shape: (usize, usize),
        beta1: f64,
        beta2: f64,
        epsilon: f64,
    ) -> Self {
        Self {
            beta1,
            beta2,
            epsilon,
            m: Array2::zeros(shape),
            v: Array2::zeros(shape),
        }
    }

    pub fn beta1(&self) -> f64 {
        self.beta1
    }

    pub fn beta2(&self) -> f64 {
        self.beta2
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// First moment estimates.
    pub fn first_moment(&self) -> &Array2<f64> {
        &self.m
    }

    /// Second moment estimates.
    pub fn second_moment(&self) -> &Array2<f64> {
        &self.v
    }

    /// Bias correction denominators `(1 - β1^t, 1 - β2^t)` for zero-based `step`.
    pub fn bias_corrections(&self, step: usize) -> (f64, f64) {
        let t = (step + 1) as f64;
        (1.0 - self.beta1.powf(t), 1.0 - self.beta2.powf(t))
    }
}

impl Optimizer for Adam {
    fn update(
        &mut self,
        parameters: &mut Array2<f64>,
        gradients: &Array2<f64>,
        learning_rate: f64,
        step: usize,
    ) -> Result<()> {
        ensure_same_shape(parameters, gradients, "adam update")?;
        ensure_same_shape(parameters, &self.m, "adam state")?;

        let (bias_correction1, bias_correction2) = self.bias_corrections(step);
        let (beta1, beta2, epsilon) = (self.beta1, self.beta2, self.epsilon);

        Zip::from(parameters)
            .and(gradients)
            .and(&mut self.m)
            .and(&mut self.v)
            .for_each(|param, &grad, m, v| {
                *m = beta1 * *m + (1.0 - beta1) * grad;
                *v = beta2 * *v + (1.0 - beta2) * grad * grad;
                let m_hat = *m / bias_correction1;
                let v_hat = *v / bias_correction2;
                *param -= learning_rate * m_hat / (v_hat.sqrt() + epsilon);
            });
        Ok(())
    }

    fn reset(&mut self) {
        self.m.fill(0.0);
        self.v.fill(0.0);
    }

    fn name(&self) -> &'static str {
        "adam"
    }
}
