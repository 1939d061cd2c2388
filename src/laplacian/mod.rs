//! Laplacian constructor — degree matrix, `L = D - A` and the symmetric
//! normalized Laplacian `L_norm = I - D^(-1/2) A D^(-1/2)`.
//!
//! ## Isolated nodes
//!
//! `D^(-1/2)[i][i]` is `1/sqrt(d)` only when `d > 0` and exactly `0`
//! otherwise. The identity term is restricted to nodes with positive degree,
//! so an isolated node owns a zero row and a zero column of `L_norm`
//! (diagonal included). No `Inf`/`NaN` can be produced.

use nalgebra::DVector;
use tracing::debug;

use crate::builder::GraphMatrix;

/// The matrices derived from one adjacency matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Laplacians {
    /// Diagonal degree matrix `D`.
    pub degree: GraphMatrix,
    /// Diagonal `D^(-1/2)`, zero on isolated nodes.
    pub inv_sqrt_degree: GraphMatrix,
    /// Unnormalized Laplacian `D - A`.
    pub laplacian: GraphMatrix,
    /// Symmetric normalized Laplacian.
    pub normalized: GraphMatrix,
}

impl Laplacians {
    pub fn from_adjacency(adjacency: &GraphMatrix) -> Self {
        let n = adjacency.nrows();
        debug_assert!(adjacency.is_square());

        let degrees = DVector::from_iterator(n, adjacency.row_iter().map(|row| row.sum()));
        let inv_sqrt = degrees.map(|d| if d > 0.0 { 1.0 / d.sqrt() } else { 0.0 });

        let degree = GraphMatrix::from_diagonal(&degrees);
        let laplacian = &degree - adjacency;
        let normalized = GraphMatrix::from_fn(n, n, |i, j| {
            let identity = if i == j && degrees[i] > 0.0 { 1.0 } else { 0.0 };
            // s_i * s_j first so that entry (i, j) and (j, i) round identically
            identity - adjacency[(i, j)] * (inv_sqrt[i] * inv_sqrt[j])
        });

        let isolated = degrees.iter().filter(|&&d| d == 0.0).count();
        debug!(nodes = n, isolated, "constructed laplacians");

        Self {
            degree,
            inv_sqrt_degree: GraphMatrix::from_diagonal(&inv_sqrt),
            laplacian,
            normalized,
        }
    }

    /// Node ids with degree zero.
    pub fn isolated_nodes(&self) -> Vec<usize> {
        self.degree
            .diagonal()
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| (d == 0.0).then_some(i))
            .collect()
    }
}
