//! Loss functions
//!
//! Pure functions over `(target, prediction)` pairs. Both operands are column
//! matrices; neither is modified. Flat vectors are coerced by the caller
//! through [`Sample::to_column`](crate::matrix::Sample::to_column), which is
//! what [`Network::train`](crate::network::Network::train) does for every
//! target before it reaches the loss.

use ndarray::Array2;

use crate::error::Result;
use crate::matrix::checked_sub;

/// Mean of the elementwise squared differences between `y_true` and `y_pred`.
///
/// A flat target becomes an operand with `Sample::from(values).to_column()`.
///
/// # Errors
///
/// `DimensionMismatch` if the shapes differ.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use tanh_net::loss::mse;
///
/// let loss = mse(&array![[1.0], [0.0]], &array![[0.0], [0.0]]).unwrap();
/// assert_eq!(loss, 0.5);
/// ```
pub fn mse(y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<f64> {
    let diff = checked_sub(y_true, y_pred, "mse")?;
    Ok(diff.mapv(|d| d * d).mean().unwrap_or(0.0))
}

/// Gradient of [`mse`] with respect to the prediction: `2 (y_pred - y_true) / n`,
/// where `n` is the number of elements in `y_true`.
///
/// Operands follow the same column convention as [`mse`].
pub fn mse_prime(y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<Array2<f64>> {
    let diff = checked_sub(y_pred, y_true, "mse prime")?;
    let n = y_true.len() as f64;
    Ok(diff * 2.0 / n)
}

/// A loss function paired with its derivative, as used by training.
pub trait Loss {
    fn loss(&self, y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<f64>;

    /// Gradient of the loss with respect to `y_pred`.
    fn derivative(&self, y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<Array2<f64>>;
}

/// Mean squared error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl Loss for MeanSquaredError {
    fn loss(&self, y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<f64> {
        mse(y_true, y_pred)
    }

    fn derivative(&self, y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<Array2<f64>> {
        mse_prime(y_true, y_pred)
    }
}

/// Any `(loss, derivative)` function pair, e.g. `(mse, mse_prime)`.
impl<F, G> Loss for (F, G)
where
    F: Fn(&Array2<f64>, &Array2<f64>) -> Result<f64>,
    G: Fn(&Array2<f64>, &Array2<f64>) -> Result<Array2<f64>>,
{
    fn loss(&self, y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<f64> {
        (self.0)(y_true, y_pred)
    }

    fn derivative(&self, y_true: &Array2<f64>, y_pred: &Array2<f64>) -> Result<Array2<f64>> {
        (self.1)(y_true, y_pred)
    }
}
