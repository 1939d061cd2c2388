//! Async offload for hosts running on tokio.
//!
//! The pipeline is CPU-bound (O(n³) in the node count) and never awaits,
//! so it runs on the blocking pool instead of an executor thread.

use crate::config::SpectrumConfig;
use crate::model::{Graph, SpectralReport};
use crate::{Error, Result};

/// Run `assemble` on tokio's blocking thread pool.
pub async fn compute_spectrum_async(graph: Graph, config: SpectrumConfig) -> Result<SpectralReport> {
    tokio::task::spawn_blocking(move || crate::assemble(&graph, &config))
        .await
        .map_err(|e| Error::WorkerError(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matches_synchronous_result() {
        let graph = Graph::new(4).with_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let config = SpectrumConfig::default();
        let sync = crate::assemble(&graph, &config).unwrap();
        let offloaded = compute_spectrum_async(graph, config).await.unwrap();
        assert_eq!(sync, offloaded);
    }

    #[tokio::test]
    async fn errors_propagate() {
        let err = compute_spectrum_async(Graph::new(1).with_edge(0, 1), SpectrumConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }
}
