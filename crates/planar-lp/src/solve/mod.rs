//! Vertex-enumeration solver for two-variable LPs.
//!
//! Stages run in a fixed order on one normalized problem:
//! normalize → intersect → filter → dedup → evaluate → select.
//!
//! The result is deterministic: identical inputs give identical `Solution`s,
//! including the tie-break between equally good vertices (first found in
//! `(i, j)` pair order over the normalized constraint list).

mod dedup;
mod feasible;
mod intersect;
mod normalize;
mod optimal;

pub use dedup::dedup_vertices;
pub use feasible::is_feasible_point;
pub use intersect::{canonical_form, intersect_pair, pairwise_intersections, CanonicalLine};
pub use normalize::with_non_negativity;
pub use optimal::select_optimal;

use crate::cfg::LpCfg;
use crate::model::{Problem, Solution, VertexEvaluation};

/// Solve `problem` by enumerating constraint-line intersections.
///
/// Never fails on finite input: parallel pairs are skipped, an empty feasible
/// set yields `is_feasible == false` with no optimum.
pub fn solve(problem: &Problem, cfg: LpCfg) -> Solution {
    let normalized = Problem::new(
        problem.objective,
        with_non_negativity(&problem.constraints),
    );
    let intersection_points = pairwise_intersections(&normalized.constraints, cfg);
    let feasible: Vec<_> = intersection_points
        .iter()
        .copied()
        .filter(|p| is_feasible_point(*p, &normalized.constraints, cfg))
        .collect();
    let feasible_vertices = dedup_vertices(&feasible, cfg.eps_dedup);
    tracing::debug!(
        constraints = normalized.constraints.len(),
        intersections = intersection_points.len(),
        feasible = feasible.len(),
        vertices = feasible_vertices.len(),
        "enumerated vertices"
    );

    let vertex_evaluations: Vec<VertexEvaluation> = feasible_vertices
        .iter()
        .map(|&point| VertexEvaluation {
            point,
            objective_value: problem.objective.eval(point),
            is_feasible: true,
        })
        .collect();

    let optimum = select_optimal(&vertex_evaluations, problem.objective.direction);
    if let Some((p, z)) = optimum {
        tracing::debug!(x1 = p.x1, x2 = p.x2, z, "optimal vertex");
    } else {
        tracing::debug!("no feasible vertex");
    }

    Solution {
        problem: normalized,
        intersection_points,
        is_feasible: !feasible_vertices.is_empty(),
        feasible_vertices,
        vertex_evaluations,
        optimal_point: optimum.map(|(p, _)| p),
        optimal_value: optimum.map(|(_, z)| z),
    }
}

#[cfg(test)]
mod tests;
