//! Eigendecomposition engine for real symmetric matrices.
//!
//! The decomposition itself is nalgebra's `SymmetricEigen` (Householder
//! tridiagonalization followed by implicit symmetric QR). This module owns
//! what surrounds it: degenerate sizes, ordering, and keeping every
//! eigenvector attached to its eigenvalue.
//!
//! ## Ordering and ties
//!
//! Eigenpairs are sorted by eigenvalue only, with a stable sort. Equal
//! eigenvalues keep the solver's native relative order in both ascending
//! and descending mode; no secondary key is imposed. `-0.0` and `0.0`
//! compare equal.

use nalgebra::SymmetricEigen;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::builder::GraphMatrix;
use crate::config::EigenConfig;
use crate::model::Spectrum;
use crate::{Error, Result};

/// Order in which eigenpairs are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Full eigendecomposition of a real symmetric matrix, ordered by `order`.
///
/// `m` must be square and exactly symmetric; anything else is rejected
/// with `InvalidInput` rather than decomposed from its lower triangle.
pub fn decompose(m: &GraphMatrix, order: SortOrder, config: &EigenConfig) -> Result<Spectrum> {
    if !m.is_square() {
        return Err(Error::InvalidInput(format!(
            "cannot decompose a non-square {}x{} matrix",
            m.nrows(),
            m.ncols()
        )));
    }
    if m.transpose() != *m {
        return Err(Error::InvalidInput("cannot decompose an asymmetric matrix".into()));
    }

    let n = m.nrows();
    let (values, vectors) = match n {
        0 => return Ok(Spectrum::empty()),
        1 => (vec![m[(0, 0)]], vec![vec![1.0]]),
        _ => {
            let eigen = SymmetricEigen::try_new(m.clone(), config.epsilon, config.max_iterations)
                .ok_or(Error::NoConvergence {
                    dimension: n,
                    max_iterations: config.max_iterations,
                })?;
            let values: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
            let vectors: Vec<Vec<f64>> = eigen
                .eigenvectors
                .column_iter()
                .map(|column| column.iter().copied().collect())
                .collect();
            (values, vectors)
        }
    };

    trace!(dimension = n, ?order, "decomposed symmetric matrix");
    Ok(order_pairs(values, vectors, order))
}

/// Stable-sort eigenpairs by eigenvalue, moving each vector with its value.
fn order_pairs(values: Vec<f64>, mut vectors: Vec<Vec<f64>>, order: SortOrder) -> Spectrum {
    debug_assert_eq!(values.len(), vectors.len());

    // + 0.0 folds -0.0 into 0.0 so that signed zeros tie
    let key = |i: usize| values[i] + 0.0;
    let mut index: Vec<usize> = (0..values.len()).collect();
    match order {
        SortOrder::Ascending => index.sort_by(|&a, &b| key(a).total_cmp(&key(b))),
        SortOrder::Descending => index.sort_by(|&a, &b| key(b).total_cmp(&key(a))),
    }

    Spectrum {
        eigenvalues: index.iter().map(|&i| values[i]).collect(),
        // `index` is a permutation, so each slot is taken exactly once
        eigenvectors: index.iter().map(|&i| std::mem::take(&mut vectors[i])).collect(),
    }
}
