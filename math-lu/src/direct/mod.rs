//! Direct solvers for dense linear systems
//!
//! This module provides:
//! - [`lu_factor`] / [`lu_factor_no_pivot`]: LU factorization with and without partial pivoting
//! - [`lower_solve`] / [`upper_solve`]: forward and back substitution, plus row-oriented variants
//! - [`lu_solve`]: factor, substitute and report the relative residual

mod lu;
mod permutation;
mod solve;
mod triangular;

pub use lu::{LuFactors, lu_factor, lu_factor_no_pivot};
pub use permutation::Permutation;
pub use solve::{LuSolution, lu_solve, lu_solve_with_config, relative_residual};
pub use triangular::{
    Diagonal, lower_solve, lower_solve_deferred, upper_solve, upper_solve_deferred,
};
