//! Error types for factorization and triangular solves

use std::fmt;
use thiserror::Error;

/// Which triangle a matrix was required to occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triangle {
    Lower,
    Upper,
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Triangle::Lower => f.write_str("lower"),
            Triangle::Upper => f.write_str("upper"),
        }
    }
}

/// Broad class of a [`LuError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-square matrix or mismatched operand dimensions
    Shape,
    /// A triangular or unit-diagonal precondition does not hold
    Structure,
    /// A zero pivot or zero diagonal entry stops the computation
    Singularity,
}

/// Errors that can occur during LU factorization and substitution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LuError {
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Matrix must be {0} triangular")]
    NotTriangular(Triangle),

    #[error("Matrix must have ones on the diagonal (row {row})")]
    NonUnitDiagonal { row: usize },

    #[error("Pivot is zero in column {column}, can't continue")]
    ZeroPivot { column: usize },

    #[error("Can't find nonzero pivot in column {column}, matrix is singular")]
    Singular { column: usize },

    #[error("Zero on the diagonal in row {row}")]
    ZeroDiagonal { row: usize },
}

impl LuError {
    /// Classify this error as a shape, structure or singularity failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            LuError::NotSquare { .. } | LuError::DimensionMismatch { .. } => ErrorKind::Shape,
            LuError::NotTriangular(_) | LuError::NonUnitDiagonal { .. } => ErrorKind::Structure,
            LuError::ZeroPivot { .. } | LuError::Singular { .. } | LuError::ZeroDiagonal { .. } => {
                ErrorKind::Singularity
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LuError>;
