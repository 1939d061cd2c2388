//! JSON wire format — the request body a transport hands to the pipeline
//! and the serialized report it sends back.
//!
//! ```text
//! {"nodes": [0, 1, 2], "edges": [[0, 1], [1, 2]]}
//!   → GraphDescription::into_graph() → assemble() → to_json()
//! ```
//!
//! Shape problems (edge arity, node id list) are `InvalidInput`. Endpoint
//! range errors are left to the adjacency builder and surface as `OutOfRange`.

use serde::{Deserialize, Serialize};

use crate::config::SpectrumConfig;
use crate::model::{Edge, Graph, SpectralReport};
use crate::{Error, Result};

/// Untrusted graph description as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Node ids; must be a permutation of `0..nodes.len()`.
    pub nodes: Vec<i64>,
    /// Each entry must be exactly `[src, dst]`.
    pub edges: Vec<Vec<i64>>,
}

impl GraphDescription {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate the shape and convert into a `Graph`.
    pub fn into_graph(self) -> Result<Graph> {
        let node_count = self.nodes.len();

        let mut seen = vec![false; node_count];
        for &id in &self.nodes {
            let slot = usize::try_from(id).ok().filter(|&i| i < node_count).ok_or_else(|| {
                Error::InvalidInput(format!(
                    "node id {id} is not in 0..{node_count}; ids must be 0..n-1"
                ))
            })?;
            if std::mem::replace(&mut seen[slot], true) {
                return Err(Error::InvalidInput(format!("duplicate node id {id}")));
            }
        }

        let edges = self
            .edges
            .iter()
            .enumerate()
            .map(|(index, pair)| match pair.as_slice() {
                &[src, dst] => Ok(Edge::new(src, dst)),
                other => Err(Error::InvalidInput(format!(
                    "edge {index} has {} endpoints, expected [source, target]",
                    other.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Graph { node_count, edges })
    }
}

impl From<&Graph> for GraphDescription {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: (0..graph.node_count as i64).collect(),
            edges: graph.edges.iter().map(|e| vec![e.src, e.dst]).collect(),
        }
    }
}

/// Parse a request body and compute its report.
pub fn spectrum_from_json(text: &str, config: &SpectrumConfig) -> Result<SpectralReport> {
    let graph = GraphDescription::from_json(text)?.into_graph()?;
    crate::assemble(&graph, config)
}

/// Serialize a report in the wire shape.
pub fn to_json(report: &SpectralReport, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(text)
}
