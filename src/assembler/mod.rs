//! Result assembler — runs the pipeline for one graph and packages the
//! three spectra.
//!
//! ```text
//! Graph ─► build_adjacency ─► Laplacians ─► decompose ×3 ─► SpectralReport
//!                A              L, L_norm      A desc / L asc / L_norm asc
//! ```

use tracing::debug_span;

use crate::builder::{build_adjacency, matrix_rows};
use crate::config::SpectrumConfig;
use crate::eigen::{SortOrder, decompose};
use crate::laplacian::Laplacians;
use crate::model::{AdjacencySpectrum, Graph, SpectralReport};
use crate::Result;

/// Compute the adjacency, Laplacian and normalized Laplacian spectra of `graph`.
///
/// Either returns a complete report or an error; nothing partial escapes.
pub fn assemble(graph: &Graph, config: &SpectrumConfig) -> Result<SpectralReport> {
    let span = debug_span!("spectrum", nodes = graph.node_count, edges = graph.edges.len());
    let _enter = span.enter();

    let adjacency = build_adjacency(graph.node_count, &graph.edges)?;
    let laplacians = Laplacians::from_adjacency(&adjacency);

    let adjacency_spectrum = decompose(&adjacency, SortOrder::Descending, &config.eigen)?;
    let laplacian = decompose(&laplacians.laplacian, SortOrder::Ascending, &config.eigen)?;
    let normalized_laplacian = decompose(&laplacians.normalized, SortOrder::Ascending, &config.eigen)?;

    Ok(SpectralReport {
        adjacency: AdjacencySpectrum {
            spectrum: adjacency_spectrum,
            matrix: matrix_rows(&adjacency),
        },
        laplacian,
        normalized_laplacian,
    })
}
