//! Spectrum — ordered eigenvalues with their index-paired eigenvectors.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Eigenvalues and eigenvectors of one matrix.
///
/// `eigenvectors[i]` is the unit eigenvector belonging to `eigenvalues[i]`.
/// Both sequences always have the same length, equal to the matrix dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub eigenvalues: Vec<f64>,
    pub eigenvectors: Vec<Vec<f64>>,
}

impl Spectrum {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of eigenpairs (the matrix dimension).
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Iterate `(λ_i, v_i)` in spectrum order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.eigenvalues
            .iter()
            .copied()
            .zip(self.eigenvectors.iter().map(Vec::as_slice))
    }

    /// Spectral embedding of the nodes.
    ///
    /// Row `node` of the result holds that node's component in each of the
    /// selected eigenvectors: `coords[node][j] = eigenvectors[components[j]][node]`.
    pub fn embedding(&self, components: &[usize]) -> Result<Vec<Vec<f64>>> {
        let n = self.len();
        if let Some(&bad) = components.iter().find(|&&k| k >= n) {
            return Err(Error::InvalidInput(format!(
                "embedding component {bad} out of range for spectrum of size {n}"
            )));
        }
        Ok((0..n)
            .map(|node| components.iter().map(|&k| self.eigenvectors[k][node]).collect())
            .collect())
    }
}
