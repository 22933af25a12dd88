//! Solver tolerances.
//!
//! One `LpCfg` value is passed into every call. Two solves with different
//! configurations never observe each other.

use serde::{Deserialize, Serialize};

/// Tolerance configuration.
///
/// - `eps`: determinant cutoff for parallel lines, constraint slack in the
///   feasibility test, and the "effectively zero" test in the line sampler.
/// - `eps_dedup`: grid size for vertex deduplication. Coarser than `eps`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LpCfg {
    pub eps: f64,
    pub eps_dedup: f64,
}

impl Default for LpCfg {
    fn default() -> Self {
        Self {
            eps: 1e-10,
            eps_dedup: 1e-6,
        }
    }
}

impl LpCfg {
    #[inline]
    pub fn with_eps(self, eps: f64) -> Self {
        Self { eps, ..self }
    }
    #[inline]
    pub fn with_eps_dedup(self, eps_dedup: f64) -> Self {
        Self { eps_dedup, ..self }
    }
}
