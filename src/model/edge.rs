//! Undirected edge between two node ids.

use serde::{Deserialize, Serialize};

/// An undirected edge.
///
/// Endpoints are kept as raw signed ids so that a bad id can be reported
/// verbatim; the adjacency builder is the one place that range-checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: i64,
    pub dst: i64,
}

impl Edge {
    pub fn new(src: i64, dst: i64) -> Self {
        Self { src, dst }
    }
}

impl From<(i64, i64)> for Edge {
    fn from((src, dst): (i64, i64)) -> Self {
        Self { src, dst }
    }
}
