//! Row permutation produced by partial pivoting

use crate::error::Result;
use crate::helpers::check_len;
use ndarray::{Array1, Array2, Axis};

/// Row permutation `p` such that row `i` of the permuted matrix is row
/// `p[i]` of the original
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
    /// Number of transpositions applied since the identity
    transpositions: usize,
}

impl Permutation {
    /// The identity permutation `[0, 1, ..., n-1]`
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            transpositions: 0,
        }
    }

    /// Exchange entries `i` and `j`
    ///
    /// Only the elimination workspace calls this, always together with the
    /// matching row exchange of its working matrix.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.indices.swap(i, j);
            self.transpositions += 1;
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.indices.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Determinant of the permutation matrix: +1 for even, -1 for odd
    pub fn sign(&self) -> f64 {
        if self.transpositions % 2 == 0 { 1.0 } else { -1.0 }
    }

    /// Permutation undoing this one
    pub fn inverse(&self) -> Self {
        let mut indices = vec![0; self.indices.len()];
        for (i, &p) in self.indices.iter().enumerate() {
            indices[p] = i;
        }
        Self {
            indices,
            transpositions: self.transpositions,
        }
    }

    /// Reorder a vector: `out[i] = b[p[i]]`
    ///
    /// Fails with a dimension mismatch unless `b` has the permutation's length.
    pub fn gather(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        check_len(self.len(), b.len())?;
        Ok(self.indices.iter().map(|&p| b[p]).collect())
    }

    /// Reorder the rows of a matrix: `out[i, :] = a[p[i], :]`
    ///
    /// Fails with a dimension mismatch unless `a` has one row per entry.
    pub fn gather_rows(&self, a: &Array2<f64>) -> Result<Array2<f64>> {
        check_len(self.len(), a.nrows())?;
        Ok(a.select(Axis(0), &self.indices))
    }
}
