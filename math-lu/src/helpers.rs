//! Dense vector and matrix helpers
//!
//! Small primitives the factorization and substitution routines need on top
//! of `ndarray`: Euclidean norms, axpy updates, magnitude argmax, triangular
//! part extraction and the shape checks shared by every public entry point.

use crate::error::{LuError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1};

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm(x: &Array1<f64>) -> f64 {
    vector_norm_sqr(x).sqrt()
}

/// Compute vector norm squared: ||x||_2^2 = Σ x_i^2
#[inline]
pub fn vector_norm_sqr(x: &Array1<f64>) -> f64 {
    let mut sum = 0.0;
    for xi in x.iter() {
        sum += xi * xi;
    }
    sum
}

/// Compute axpy: y = α * x + y
///
/// Both views must have the same length; callers slice them to match.
#[inline]
pub(crate) fn axpy(alpha: f64, x: ArrayView1<'_, f64>, mut y: ArrayViewMut1<'_, f64>) {
    debug_assert_eq!(x.len(), y.len());
    for (xi, yi) in x.iter().zip(y.iter_mut()) {
        *yi += alpha * *xi;
    }
}

/// Index and magnitude of the largest |x_i|
///
/// Ties go to the first index reaching the maximum. A NaN counts as larger
/// than any number, so the first NaN wins if there is one. Returns `None`
/// for an empty view.
pub fn argmax_abs(x: ArrayView1<'_, f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, xi) in x.iter().enumerate() {
        let val = xi.abs();
        match best {
            Some((_, max_val)) if max_val.is_nan() || val <= max_val => {}
            _ => best = Some((i, val)),
        }
    }
    best
}

/// Return the dimension of a square matrix, or a shape error
#[inline]
pub fn square_dim(a: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(LuError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Check that a right-hand side has the expected length
#[inline]
pub fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(LuError::DimensionMismatch { expected, got });
    }
    Ok(())
}

/// Upper triangle of `a`, diagonal included (`triu`)
pub fn upper_triangle(a: &Array2<f64>) -> Array2<f64> {
    Array2::from_shape_fn(a.dim(), |(i, j)| if j >= i { a[[i, j]] } else { 0.0 })
}

/// Strictly lower triangle of `a` with an explicit unit diagonal
pub fn unit_lower_triangle(a: &Array2<f64>) -> Array2<f64> {
    Array2::from_shape_fn(a.dim(), |(i, j)| match i.cmp(&j) {
        std::cmp::Ordering::Greater => a[[i, j]],
        std::cmp::Ordering::Equal => 1.0,
        std::cmp::Ordering::Less => 0.0,
    })
}

/// True when every entry strictly above the diagonal is exactly zero
pub fn is_lower_triangular(a: &Array2<f64>) -> bool {
    a.indexed_iter().all(|((i, j), &v)| j <= i || v == 0.0)
}

/// True when every entry strictly below the diagonal is exactly zero
pub fn is_upper_triangular(a: &Array2<f64>) -> bool {
    a.indexed_iter().all(|((i, j), &v)| j >= i || v == 0.0)
}
