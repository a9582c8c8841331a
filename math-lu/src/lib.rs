//! Dense LU factorization and linear solves
//!
//! This crate factors square `f64` matrices stored as `ndarray` arrays and
//! solves the resulting triangular systems.
//!
//! # Features
//!
//! - **LU factorization**: Gaussian elimination with partial pivoting
//!   (`A[p, :] = L U`) or without row interchanges (`A = L U`)
//! - **Triangular solvers**: forward and back substitution with explicit or
//!   unit diagonals, in column-oriented and row-oriented formulations
//! - **System solve**: `A x = b` with a relative residual computed against the
//!   original system
//!
//! Inputs are borrowed and never modified; every call works on its own copy.
//!
//! # Example
//!
//! ```
//! use math_audio_lu::{Pivoting, lu_solve};
//! use ndarray::array;
//!
//! let a = array![[3.0, 2.0], [1.0, 4.0]];
//! let b = array![5.0, 6.0];
//!
//! let solution = lu_solve(&a, &b, Pivoting::Partial)?;
//! assert!((solution.x[0] - 0.8).abs() < 1e-12);
//! assert!(solution.relative_residual < 1e-12);
//! # Ok::<(), math_audio_lu::LuError>(())
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod helpers;

pub use config::{LuConfig, Pivoting};
pub use error::{ErrorKind, LuError, Result, Triangle};

// Re-export direct solvers
pub use direct::{
    Diagonal, LuFactors, LuSolution, Permutation, lower_solve, lower_solve_deferred, lu_factor,
    lu_factor_no_pivot, lu_solve, lu_solve_with_config, relative_residual, upper_solve,
    upper_solve_deferred,
};
