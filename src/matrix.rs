//! Boundary to the numeric array library
//!
//! Layers and losses work on `ndarray::Array2<f64>` column matrices. Callers
//! may hand in flat vectors instead; [`Sample`] records which form a value
//! arrived in and [`Sample::to_column`] is the one place that reshapes it.
//! The `checked_*` helpers wrap operations that would otherwise panic inside
//! `ndarray` on a shape mismatch.

use ndarray::{Array1, Array2, ArrayView2};

use crate::error::{NetworkError, Result};

/// One input or target value as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// A raw flat sequence, treated as a column vector.
    Flat(Vec<f64>),
    /// An explicit 2-D matrix, used as-is.
    Matrix(Array2<f64>),
}

impl Sample {
    /// Column-matrix form of the sample.
    ///
    /// A flat sequence of length `n` becomes an `(n, 1)` matrix; a matrix is
    /// copied unchanged. The sample itself is never modified.
    pub fn to_column(&self) -> Array2<f64> {
        match self {
            Sample::Flat(values) => column(values),
            Sample::Matrix(matrix) => matrix.clone(),
        }
    }

    /// Number of scalar elements.
    pub fn len(&self) -> usize {
        match self {
            Sample::Flat(values) => values.len(),
            Sample::Matrix(matrix) => matrix.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Sample::Flat(values)
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Sample::Flat(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Sample {
    fn from(values: [f64; N]) -> Self {
        Sample::Flat(values.to_vec())
    }
}

impl From<Array1<f64>> for Sample {
    fn from(values: Array1<f64>) -> Self {
        Sample::Flat(values.to_vec())
    }
}

impl From<Array2<f64>> for Sample {
    fn from(matrix: Array2<f64>) -> Self {
        Sample::Matrix(matrix)
    }
}

impl From<&Sample> for Sample {
    fn from(sample: &Sample) -> Self {
        sample.clone()
    }
}

/// Build an `(n, 1)` column matrix from a slice.
pub fn column(values: &[f64]) -> Array2<f64> {
    Array2::from_shape_fn((values.len(), 1), |(i, _)| values[i])
}

/// Matrix product `a · b`, failing when `a.ncols() != b.nrows()`.
pub fn checked_dot(
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    operation: &'static str,
) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(NetworkError::dimension_mismatch(
            operation,
            a.dim(),
            b.dim(),
        ));
    }
    Ok(a.dot(&b))
}

/// Elementwise `a - b` for equally shaped matrices.
pub fn checked_sub(
    a: &Array2<f64>,
    b: &Array2<f64>,
    operation: &'static str,
) -> Result<Array2<f64>> {
    ensure_same_shape(a, b, operation)?;
    Ok(a - b)
}

/// Elementwise (Hadamard) product for equally shaped matrices.
pub fn checked_hadamard(
    a: &Array2<f64>,
    b: &Array2<f64>,
    operation: &'static str,
) -> Result<Array2<f64>> {
    ensure_same_shape(a, b, operation)?;
    Ok(a * b)
}

pub(crate) fn ensure_same_shape(
    a: &Array2<f64>,
    b: &Array2<f64>,
    operation: &'static str,
) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(NetworkError::dimension_mismatch(
            operation,
            a.dim(),
            b.dim(),
        ));
    }
    Ok(())
}
