//! Display window and clipped traces for plotting a solution.
//!
//! The window starts at the origin. Each axis extends to 1.3× the largest
//! feasible vertex coordinate (at least 10), or 50 when nothing is feasible.

use serde::{Deserialize, Serialize};

use crate::cfg::LpCfg;
use crate::model::{Constraint, Relation, Solution};
use crate::sample::sample_line;

const DEFAULT_EXTENT: f64 = 50.0;
const MIN_EXTENT: f64 = 10.0;
const MARGIN: f64 = 1.3;
/// Hard cap on the displayed axis range.
const VIEW_CAP: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotWindow {
    pub x_max: f64,
    pub y_max: f64,
}

impl Default for PlotWindow {
    fn default() -> Self {
        Self {
            x_max: DEFAULT_EXTENT,
            y_max: DEFAULT_EXTENT,
        }
    }
}

fn axis_extent(values: impl Iterator<Item = f64>) -> Option<f64> {
    let m = values.fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))?;
    Some((m * MARGIN).max(MIN_EXTENT))
}

impl PlotWindow {
    pub fn for_solution(sol: &Solution) -> Self {
        let vs = &sol.feasible_vertices;
        Self {
            x_max: axis_extent(vs.iter().map(|v| v.x1)).unwrap_or(DEFAULT_EXTENT),
            y_max: axis_extent(vs.iter().map(|v| v.x2)).unwrap_or(DEFAULT_EXTENT),
        }
    }

    /// Axis ranges shown to the reader: `[0, x]` and `[0, y]`.
    pub fn view_range(&self) -> (f64, f64) {
        (
            (self.x_max * MARGIN).min(VIEW_CAP),
            (self.y_max * MARGIN).min(VIEW_CAP),
        )
    }

    /// Keep samples with `0 <= y <= y_max`.
    pub fn clip(&self, samples: impl IntoIterator<Item = (f64, f64)>) -> Vec<(f64, f64)> {
        samples
            .into_iter()
            .filter(|&(_, y)| (0.0..=self.y_max).contains(&y))
            .collect()
    }

    /// Sampled boundary of `c` over `[0, x_max]`, clipped. `None` when fewer
    /// than two samples survive clipping.
    pub fn boundary_trace(&self, c: &Constraint, n: usize, cfg: LpCfg) -> Option<Vec<(f64, f64)>> {
        let pts = self.clip(sample_line(c, 0.0, self.x_max, n, cfg));
        (pts.len() >= 2).then_some(pts)
    }

    /// Iso-objective line through the optimum, if there is one. A zero
    /// objective has no level line.
    pub fn objective_trace(&self, sol: &Solution, n: usize, cfg: LpCfg) -> Option<Vec<(f64, f64)>> {
        let z = sol.optimal_value?;
        let line = sol.problem.objective.level_line(z);
        if sample_line(&line, 0.0, self.x_max, n, cfg).is_degenerate() {
            return None;
        }
        self.boundary_trace(&line, n, cfg)
    }

    /// Closed polygon shading the side of a boundary trace that satisfies the
    /// constraint: down to `y = 0` for `<=`, up to `y_max` for `>=`. Equalities
    /// get no shading.
    pub fn shading(&self, c: &Constraint, trace: &[(f64, f64)]) -> Option<Vec<(f64, f64)>> {
        let cap = match c.relation {
            Relation::Le => 0.0,
            Relation::Ge => self.y_max,
            Relation::Eq => return None,
        };
        let (first, last) = (trace.first()?, trace.last()?);
        let mut poly = trace.to_vec();
        poly.push((last.0, cap));
        poly.push((first.0, cap));
        Some(poly)
    }
}
