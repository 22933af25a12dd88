//! Two-variable linear programs: vertex enumeration and boundary sampling.
//!
//! The solver works on the graphical method: every pair of constraint lines is
//! intersected, points outside the feasible region are dropped, and the
//! objective is evaluated at the remaining corners.
//!
//! Pipeline (`solve::solve`)
//! - `normalize`: append `x1 >= 0`, `x2 >= 0` unless already present.
//! - `intersect`: pairwise Cramer's rule over canonical equality forms.
//! - `feasible`: tolerance-based membership against the normalized problem.
//! - `dedup`: rounded-key deduplication, first occurrence wins.
//! - `optimal`: strict-improvement extremum over the vertex evaluations.
//!
//! Everything is pure: tolerances travel in an explicit [`LpCfg`] value.
//!
//! Known limitation
//! - There is no unboundedness detection. For an unbounded objective the
//!   solver still reports the best finite vertex it found.

pub mod cfg;
pub mod model;
pub mod plot;
pub mod presets;
pub mod rand;
pub mod sample;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::LpCfg;
pub use model::{
    Constraint, Direction, ObjectiveFunction, Point, Problem, Relation, Solution,
    VertexEvaluation,
};
pub use sample::{sample_line, LineSamples, Linspace};
pub use solve::solve;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::LpCfg;
    pub use crate::model::{
        Constraint, Direction, ObjectiveFunction, Point, Problem, Relation, Solution,
        VertexEvaluation,
    };
    pub use crate::plot::PlotWindow;
    pub use crate::presets::Preset;
    pub use crate::sample::{sample_line, LineSamples};
    pub use crate::solve::solve;
}
