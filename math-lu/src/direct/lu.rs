//! LU factorization
//!
//! Gaussian elimination on a dense square matrix, with or without partial
//! pivoting. Both variants work on a private copy of the input that ends up
//! holding the multipliers below the diagonal and the reduced rows on and
//! above it; `L` and `U` are split out of it once elimination finishes.

use super::permutation::Permutation;
use super::triangular::{Diagonal, lower_solve, upper_solve};
use crate::config::Pivoting;
use crate::error::{LuError, Result};
use crate::helpers::{argmax_abs, axpy, square_dim, unit_lower_triangle, upper_triangle};
use ndarray::{Array1, Array2, Axis, s};

/// Result of an LU factorization, `A[p, :] = L U`
///
/// `L` is unit lower triangular and `U` upper triangular. Without pivoting
/// `p` is the identity and `A = L U`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    l: Array2<f64>,
    u: Array2<f64>,
    perm: Permutation,
}

impl LuFactors {
    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.perm.len()
    }

    /// Unit lower triangular factor
    pub fn l(&self) -> &Array2<f64> {
        &self.l
    }

    /// Upper triangular factor
    pub fn u(&self) -> &Array2<f64> {
        &self.u
    }

    /// Row permutation applied by pivoting
    pub fn permutation(&self) -> &Permutation {
        &self.perm
    }

    /// Take the factors apart as `(L, U, p)`
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>, Vec<usize>) {
        (self.l, self.u, self.perm.into_vec())
    }

    /// Solve A x = b using the pre-computed factors
    ///
    /// Permutes `b`, forward solves with the unit diagonal of `L`, then back
    /// solves with the diagonal of `U`.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        let pb = self.perm.gather(b)?;
        let y = lower_solve(&self.l, &pb, Diagonal::Unit)?;
        upper_solve(&self.u, &y, Diagonal::Explicit)
    }

    /// Product `L U`, which reproduces `A[p, :]` up to rounding
    pub fn reconstruct(&self) -> Array2<f64> {
        self.l.dot(&self.u)
    }

    /// Determinant of the factored matrix
    pub fn determinant(&self) -> f64 {
        self.perm.sign() * self.u.diag().iter().product::<f64>()
    }
}

/// Working state of one elimination: the matrix being reduced and the row
/// permutation applied to it so far
///
/// Row exchanges go through [`EliminationWorkspace::swap_rows`] only, which
/// keeps `lu` and `perm` in step.
struct EliminationWorkspace {
    lu: Array2<f64>,
    perm: Permutation,
}

impl EliminationWorkspace {
    fn new(a: &Array2<f64>, n: usize) -> Self {
        Self {
            lu: a.to_owned(),
            perm: Permutation::identity(n),
        }
    }

    /// Exchange rows `i` and `j` of the working matrix and of the permutation
    fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for col in 0..self.lu.ncols() {
            self.lu.swap([i, col], [j, col]);
        }
        self.perm.swap(i, j);
    }

    /// Bring the largest-magnitude entry of column `k` (rows `k..`) onto the
    /// diagonal
    fn select_pivot(&mut self, k: usize) -> Result<()> {
        let candidates = self.lu.slice(s![k.., k]);
        let (offset, max_val) = argmax_abs(candidates).ok_or(LuError::Singular { column: k })?;
        if max_val == 0.0 {
            return Err(LuError::Singular { column: k });
        }

        let piv_row = k + offset;
        if piv_row != k {
            log::debug!("LU column {}: swapping rows {} and {}", k, k, piv_row);
        }
        self.swap_rows(k, piv_row);
        Ok(())
    }

    /// Eliminate every entry below the diagonal in column `k`, storing the
    /// multipliers in their place
    fn eliminate(&mut self, k: usize) -> Result<()> {
        let pivot = self.lu[[k, k]];
        if pivot == 0.0 {
            return Err(LuError::ZeroPivot { column: k });
        }
        log::trace!("LU column {}: pivot = {:e}", k, pivot);

        let (top, mut bottom) = self.lu.view_mut().split_at(Axis(0), k + 1);
        let pivot_row = top.slice(s![k, k + 1..]);

        for mut row in bottom.rows_mut() {
            let multiplier = row[k] / pivot;
            row[k] = multiplier;
            axpy(-multiplier, pivot_row, row.slice_mut(s![k + 1..]));
        }

        Ok(())
    }

    fn into_factors(self) -> LuFactors {
        LuFactors {
            l: unit_lower_triangle(&self.lu),
            u: upper_triangle(&self.lu),
            perm: self.perm,
        }
    }
}

fn factorize(a: &Array2<f64>, pivoting: Pivoting) -> Result<LuFactors> {
    let n = square_dim(a)?;
    log::debug!("LU factorization of {}x{} matrix ({:?} pivoting)", n, n, pivoting);

    let mut ws = EliminationWorkspace::new(a, n);
    for k in 0..n {
        if pivoting.is_enabled() {
            ws.select_pivot(k)?;
        }
        ws.eliminate(k)?;
    }

    Ok(ws.into_factors())
}

/// Factor a square matrix, A = L U, without row interchanges
///
/// Fails with [`LuError::ZeroPivot`] as soon as a diagonal pivot is exactly
/// zero; no recovery is attempted.
pub fn lu_factor_no_pivot(a: &Array2<f64>) -> Result<(Array2<f64>, Array2<f64>)> {
    let factors = factorize(a, Pivoting::None)?;
    Ok((factors.l, factors.u))
}

/// Factor a square matrix with optional partial pivoting, A[p, :] = L U
///
/// With [`Pivoting::Partial`] the pivot of column `k` is the first entry of
/// largest magnitude among rows `k..n`; a column with no nonzero candidate
/// fails with [`LuError::Singular`]. With [`Pivoting::None`] the
/// permutation stays the identity and a zero pivot fails with
/// [`LuError::ZeroPivot`].
pub fn lu_factor(a: &Array2<f64>, pivoting: Pivoting) -> Result<LuFactors> {
    factorize(a, pivoting)
}
