//! Scalar activation functions for neural networks
//!
//! Each function comes paired with its derivative taken with respect to the
//! pre-activation input `x` (not the activation output), which is what
//! [`Activation`](crate::layers::Activation) stores between forward and
//! backward.
//!
//! - Tanh
//! - Sigmoid
//! - ReLU

/// Hyperbolic tangent.
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of tanh at `x`: 1 - tanh(x)².
pub fn tanh_derivative(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

/// Sigmoid activation function.
///
/// Returns the sigmoid of the input: 1 / (1 + exp(-x))
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of sigmoid at `x`: σ(x) (1 - σ(x)).
pub fn sigmoid_derivative(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

/// ReLU: max(0, x).
pub fn relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// ReLU derivative, taking 0 at the kink.
pub fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_tanh_zero() {
        assert!(tanh(0.0).abs() < EPSILON);
        assert!((tanh_derivative(0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_tanh_derivative_symmetric() {
        assert!((tanh_derivative(1.5) - tanh_derivative(-1.5)).abs() < EPSILON);
        assert!(tanh_derivative(3.0) < tanh_derivative(1.0));
    }

    #[test]
    fn test_sigmoid_zero() {
        let result = sigmoid(0.0);
        assert!((result - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_sigmoid_derivative_at_zero() {
        assert!((sigmoid_derivative(0.0) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_relu_mixed() {
        let data: Vec<f64> = [-2.0, -1.0, 0.0, 1.0, 2.0].iter().map(|&x| relu(x)).collect();
        assert_eq!(data, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_relu_derivative() {
        assert_eq!(relu_derivative(-1.0), 0.0);
        assert_eq!(relu_derivative(0.0), 0.0);
        assert_eq!(relu_derivative(2.0), 1.0);
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        let h = 1e-6;
        let pairs: [(fn(f64) -> f64, fn(f64) -> f64); 2] =
            [(tanh, tanh_derivative), (sigmoid, sigmoid_derivative)];
        for (f, df) in pairs {
            for &x in &[-2.0, -0.3, 0.0, 0.7, 1.9] {
                let numerical = (f(x + h) - f(x - h)) / (2.0 * h);
                assert!((numerical - df(x)).abs() < 1e-6);
            }
        }
    }
}
