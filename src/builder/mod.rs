//! Graph model builder — edge list → dense symmetric 0/1 adjacency matrix.
//!
//! The matrix is allocated once at its final n×n size and is only written
//! here. Downstream stages receive it by shared reference.

use nalgebra::DMatrix;
use tracing::debug;

use crate::model::Edge;
use crate::{Error, Result};

/// Dense real matrix used by every pipeline stage.
pub type GraphMatrix = DMatrix<f64>;

/// Build the adjacency matrix of an undirected graph on `node_count` nodes.
///
/// Every edge is range-checked before the matrix is touched, so an
/// `OutOfRange` error never leaves a half-built matrix behind.
pub fn build_adjacency(node_count: usize, edges: &[Edge]) -> Result<GraphMatrix> {
    let resolved = edges
        .iter()
        .enumerate()
        .map(|(index, edge)| resolve_edge(index, edge, node_count))
        .collect::<Result<Vec<_>>>()?;

    let mut adjacency = GraphMatrix::zeros(node_count, node_count);
    for (s, t) in resolved {
        adjacency[(s, t)] = 1.0;
        adjacency[(t, s)] = 1.0;
    }

    debug!(nodes = node_count, edges = edges.len(), "built adjacency matrix");
    Ok(adjacency)
}

fn resolve_edge(index: usize, edge: &Edge, node_count: usize) -> Result<(usize, usize)> {
    match (endpoint(edge.src, node_count), endpoint(edge.dst, node_count)) {
        (Some(s), Some(t)) => Ok((s, t)),
        _ => Err(Error::OutOfRange {
            index,
            src: edge.src,
            dst: edge.dst,
            node_count,
        }),
    }
}

fn endpoint(id: i64, node_count: usize) -> Option<usize> {
    usize::try_from(id).ok().filter(|&i| i < node_count)
}

/// Copy a matrix out as row-major nested vectors.
pub(crate) fn matrix_rows(m: &GraphMatrix) -> Vec<Vec<f64>> {
    m.row_iter().map(|row| row.iter().copied().collect()).collect()
}
