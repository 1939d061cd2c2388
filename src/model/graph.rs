//! Static graph description: node count plus undirected edge list.

use serde::{Deserialize, Serialize};
use super::Edge;

/// An undirected graph over the node ids `0..node_count`.
///
/// Self-loops and duplicate edges are allowed; they collapse onto the same
/// adjacency entry. Endpoint validity is checked when the adjacency matrix
/// is built, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub node_count: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// A graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self { node_count, edges: Vec::new() }
    }

    pub fn with_edge(mut self, src: i64, dst: i64) -> Self {
        self.edges.push(Edge::new(src, dst));
        self
    }

    pub fn with_edges(mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }
}
