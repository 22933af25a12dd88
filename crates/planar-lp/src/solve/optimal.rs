use crate::model::{Direction, Point, VertexEvaluation};

/// Extremal vertex for `direction`.
///
/// A later vertex replaces the current best only on strict improvement, so
/// ties keep the earliest. `None` for an empty list.
pub fn select_optimal(evals: &[VertexEvaluation], direction: Direction) -> Option<(Point, f64)> {
    let improves = |candidate: f64, best: f64| match direction {
        Direction::Maximize => candidate > best,
        Direction::Minimize => candidate < best,
    };
    let (first, rest) = evals.split_first()?;
    let best = rest.iter().fold(first, |best, e| {
        if improves(e.objective_value, best.objective_value) {
            e
        } else {
            best
        }
    });
    Some((best.point, best.objective_value))
}
