//! Factorization and solve configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row interchange strategy used during elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pivoting {
    /// Pick the largest-magnitude entry of the active column as pivot
    #[default]
    Partial,
    /// Eliminate in natural order; the permutation stays the identity
    None,
}

impl Pivoting {
    #[inline]
    pub fn is_enabled(self) -> bool {
        matches!(self, Pivoting::Partial)
    }
}

impl From<bool> for Pivoting {
    fn from(pivoting: bool) -> Self {
        if pivoting {
            Pivoting::Partial
        } else {
            Pivoting::None
        }
    }
}

/// LU solve configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LuConfig {
    /// Row interchange strategy
    pub pivoting: Pivoting,
    /// Relative residual above which a warning is logged
    pub residual_warning: f64,
    /// Log a summary line after every solve
    pub verbose: bool,
}

impl Default for LuConfig {
    fn default() -> Self {
        Self {
            pivoting: Pivoting::Partial,
            residual_warning: 1e-8,
            verbose: false,
        }
    }
}
