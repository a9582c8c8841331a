//! Triangular solvers
//!
//! Forward substitution for lower triangular systems and back substitution
//! for upper triangular systems. Each direction comes in two formulations:
//!
//! - [`lower_solve`] / [`upper_solve`] eliminate eagerly: once an unknown is
//!   fixed, its contribution is subtracted from every entry that is still
//!   unsolved (column-oriented).
//! - [`lower_solve_deferred`] / [`upper_solve_deferred`] accumulate the
//!   contributions of the already-solved unknowns when each row is reached
//!   (row-oriented), and only ever read finished entries.
//!
//! All variants validate their input before touching the right-hand side and
//! return a fresh vector; the caller's operands are left untouched.

use crate::error::{LuError, Result, Triangle};
use crate::helpers::{axpy, check_len, is_lower_triangular, is_upper_triangular, square_dim};
use ndarray::{Array1, Array2, s};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the diagonal of a triangular matrix is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Diagonal {
    /// Read the diagonal and divide by it
    #[default]
    Explicit,
    /// The diagonal is all ones; the division is skipped
    Unit,
}

/// Check shape and structure of a triangular system, returning its dimension
fn validate(
    m: &Array2<f64>,
    rhs_len: usize,
    triangle: Triangle,
    diagonal: Diagonal,
) -> Result<usize> {
    let n = square_dim(m)?;

    let triangular = match triangle {
        Triangle::Lower => is_lower_triangular(m),
        Triangle::Upper => is_upper_triangular(m),
    };
    if !triangular {
        return Err(LuError::NotTriangular(triangle));
    }

    if diagonal == Diagonal::Unit
        && let Some(row) = (0..n).find(|&i| m[[i, i]] != 1.0)
    {
        return Err(LuError::NonUnitDiagonal { row });
    }

    check_len(n, rhs_len)?;

    if diagonal == Diagonal::Explicit
        && let Some(row) = (0..n).find(|&i| m[[i, i]] == 0.0)
    {
        return Err(LuError::ZeroDiagonal { row });
    }

    Ok(n)
}

/// Forward solve a lower triangular system L y = b for y
///
/// With [`Diagonal::Unit`] the diagonal of `l` must be exactly one and no
/// division is performed. With [`Diagonal::Explicit`] an exactly zero
/// diagonal entry is rejected with [`LuError::ZeroDiagonal`] instead of
/// dividing by it.
pub fn lower_solve(l: &Array2<f64>, b: &Array1<f64>, diagonal: Diagonal) -> Result<Array1<f64>> {
    let n = validate(l, b.len(), Triangle::Lower, diagonal)?;

    let mut y = b.clone();

    for row in 0..n {
        if diagonal == Diagonal::Explicit {
            y[row] /= l[[row, row]];
        }
        let y_row = y[row];
        axpy(-y_row, l.slice(s![row + 1.., row]), y.slice_mut(s![row + 1..]));
    }

    Ok(y)
}

/// Forward solve L y = b, accumulating earlier unknowns row by row
///
/// Always divides by the explicit diagonal, which must have no zero entry
/// ([`LuError::ZeroDiagonal`]).
pub fn lower_solve_deferred(l: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = validate(l, b.len(), Triangle::Lower, Diagonal::Explicit)?;

    let mut y = b.clone();

    for row in 0..n {
        let mut acc = y[row];
        // only y[..row] is final here
        for col in 0..row {
            acc -= l[[row, col]] * y[col];
        }
        y[row] = acc / l[[row, row]];
    }

    Ok(y)
}

/// Backward solve an upper triangular system U x = y for x
///
/// With [`Diagonal::Unit`] the diagonal of `u` must be exactly one and no
/// division is performed. With [`Diagonal::Explicit`] an exactly zero
/// diagonal entry is rejected with [`LuError::ZeroDiagonal`] instead of
/// dividing by it.
pub fn upper_solve(u: &Array2<f64>, y: &Array1<f64>, diagonal: Diagonal) -> Result<Array1<f64>> {
    let n = validate(u, y.len(), Triangle::Upper, diagonal)?;

    let mut x = y.clone();

    for row in (0..n).rev() {
        if diagonal == Diagonal::Explicit {
            x[row] /= u[[row, row]];
        }
        let x_row = x[row];
        axpy(-x_row, u.slice(s![..row, row]), x.slice_mut(s![..row]));
    }

    Ok(x)
}

/// Backward solve U x = y, accumulating later unknowns row by row
///
/// Always divides by the explicit diagonal, which must have no zero entry
/// ([`LuError::ZeroDiagonal`]).
pub fn upper_solve_deferred(u: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>> {
    let n = validate(u, y.len(), Triangle::Upper, Diagonal::Explicit)?;

    let mut x = y.clone();

    for row in (0..n).rev() {
        let mut acc = x[row];
        // only x[row + 1..] is final here
        for col in (row + 1)..n {
            acc -= u[[row, col]] * x[col];
        }
        x[row] = acc / u[[row, row]];
    }

    Ok(x)
}
