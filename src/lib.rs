//! # graph-spectrum — Spectral Decomposition of Undirected Graphs
//!
//! Builds the adjacency matrix, the graph Laplacian and the symmetric
//! normalized Laplacian of a static graph and returns the full, ordered
//! eigendecomposition of each.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: every entry point is a pure function of its input
//! 2. **Clean DTOs**: `Graph`, `Spectrum`, `SpectralReport` cross all boundaries
//! 3. **All or nothing**: a report is complete or the call returns an error
//! 4. **Index pairing**: `eigenvectors[i]` always belongs to `eigenvalues[i]`
//!
//! ## Quick Start
//!
//! ```rust
//! use graph_spectrum::{Graph, SpectrumConfig, compute_spectrum};
//!
//! # fn example() -> graph_spectrum::Result<()> {
//! let graph = Graph::new(3).with_edges([(0, 1), (1, 2)]);
//! let report = compute_spectrum(&graph, &SpectrumConfig::default())?;
//!
//! // Adjacency eigenvalues descend, Laplacian eigenvalues ascend.
//! assert!(report.laplacian.eigenvalues[0].abs() < 1e-9);
//! for (lambda, v) in report.normalized_laplacian.pairs() {
//!     println!("{lambda:.4} {v:?}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Graph model builder | `builder` | adjacency `A` |
//! | Laplacian constructor | `laplacian` | `D`, `D^(-1/2)`, `L`, `L_norm` |
//! | Eigendecomposition engine | `eigen` | ordered `Spectrum` |
//! | Result assembler | `assembler` | `SpectralReport` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod builder;
pub mod laplacian;
pub mod eigen;
pub mod assembler;
pub mod config;
pub mod wire;
#[cfg(feature = "async")]
pub mod runtime;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Graph, Edge, Spectrum, AdjacencySpectrum, SpectralReport};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use builder::{GraphMatrix, build_adjacency};
pub use laplacian::Laplacians;
pub use eigen::{SortOrder, decompose};
pub use assembler::assemble;
pub use assembler::assemble as compute_spectrum;
pub use config::{SpectrumConfig, EigenConfig};
pub use wire::GraphDescription;

#[cfg(feature = "async")]
pub use runtime::compute_spectrum_async;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Edge {index} [{src}, {dst}] references a node outside 0..{node_count}")]
    OutOfRange { index: usize, src: i64, dst: i64, node_count: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Eigensolver did not converge for a {dimension}x{dimension} matrix within {max_iterations} iterations")]
    NoConvergence { dimension: usize, max_iterations: usize },

    #[error("Worker error: {0}")]
    WorkerError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
