//! SpectralReport — the assembled result of one invocation.

use serde::{Deserialize, Serialize};
use super::Spectrum;

/// Adjacency spectrum plus the raw adjacency matrix it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencySpectrum {
    #[serde(flatten)]
    pub spectrum: Spectrum,
    /// Row-major n×n 0/1 matrix.
    pub matrix: Vec<Vec<f64>>,
}

/// Spectra of the adjacency matrix, the Laplacian and the normalized
/// Laplacian of a single graph.
///
/// Serializes as
/// `{ adjacency: {eigenvalues, eigenvectors, matrix}, laplacian: {..}, normalized_laplacian: {..} }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectralReport {
    /// Eigenvalues in descending order.
    pub adjacency: AdjacencySpectrum,
    /// Eigenvalues in ascending order.
    pub laplacian: Spectrum,
    /// Eigenvalues in ascending order.
    pub normalized_laplacian: Spectrum,
}

impl SpectralReport {
    pub fn node_count(&self) -> usize {
        self.adjacency.matrix.len()
    }

    /// Fiedler value: the second-smallest Laplacian eigenvalue.
    /// `None` for graphs with fewer than two nodes.
    pub fn algebraic_connectivity(&self) -> Option<f64> {
        self.laplacian.eigenvalues.get(1).copied()
    }

    /// Largest absolute adjacency eigenvalue, `0.0` for the empty graph.
    pub fn spectral_radius(&self) -> f64 {
        self.adjacency
            .spectrum
            .eigenvalues
            .iter()
            .fold(0.0_f64, |acc, l| acc.max(l.abs()))
    }
}
