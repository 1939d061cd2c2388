//! # Graph and Spectrum Model
//!
//! Plain DTOs that cross every stage boundary: builder → laplacian →
//! eigen → assembler → caller.
//!
//! Design rule: NO nalgebra types here. Dense matrices live inside the
//! pipeline; everything in this module is `Vec`-based and serde-ready.
//! This module is pure data — no I/O, no state.

pub mod edge;
pub mod graph;
pub mod spectrum;
pub mod report;

pub use edge::Edge;
pub use graph::Graph;
pub use spectrum::Spectrum;
pub use report::{AdjacencySpectrum, SpectralReport};
