//! Pipeline configuration.
//!
//! Every field has a default, so an empty JSON object `{}` is a valid
//! configuration. Eigenpair ordering is fixed per matrix and is not
//! configurable here.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::Result;

/// Configuration for one spectrum computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumConfig {
    pub eigen: EigenConfig,
}

/// Tuning for the symmetric eigensolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenConfig {
    /// Convergence threshold on off-diagonal entries.
    pub epsilon: f64,
    /// QR sweep budget; `0` means unbounded.
    pub max_iterations: usize,
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            epsilon: f64::EPSILON,
            max_iterations: 0,
        }
    }
}

impl SpectrumConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
