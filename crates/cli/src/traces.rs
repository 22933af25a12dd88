//! Plot traces for a solution, flattened into a polars table.
//!
//! One row per sample: `trace` (label), `kind`, `x`, `y`. Kinds:
//! `boundary`, `shade`, `objective`, `intersection`, `vertex`, `optimum`.

use anyhow::{bail, Context, Result};
use planar_lp::plot::PlotWindow;
use planar_lp::{LpCfg, Solution};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub label: String,
    pub kind: &'static str,
    pub points: Vec<(f64, f64)>,
}

impl Trace {
    fn new(label: impl Into<String>, kind: &'static str, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            kind,
            points,
        }
    }
}

/// Traces for every user constraint, the optimal iso-objective line, and the
/// point sets of the solution.
pub fn collect(sol: &Solution, window: PlotWindow, samples: usize, cfg: LpCfg) -> Vec<Trace> {
    let mut out = Vec::new();
    for c in sol.problem.user_constraints() {
        let Some(line) = window.boundary_trace(c, samples, cfg) else {
            tracing::debug!(constraint = %c, "boundary outside window");
            continue;
        };
        if let Some(shade) = window.shading(c, &line) {
            out.push(Trace::new(c.to_string(), "shade", shade));
        }
        out.push(Trace::new(c.to_string(), "boundary", line));
    }
    if let Some(line) = window.objective_trace(sol, samples, cfg) {
        let z = sol.optimal_value.unwrap_or_default();
        out.push(Trace::new(format!("Z = {z:.1}"), "objective", line));
    }

    let first_quadrant: Vec<_> = sol
        .intersection_points
        .iter()
        .filter(|p| p.x1 >= 0.0 && p.x2 >= 0.0)
        .map(|p| (p.x1, p.x2))
        .collect();
    if !first_quadrant.is_empty() {
        out.push(Trace::new("intersections", "intersection", first_quadrant));
    }
    if !sol.feasible_vertices.is_empty() {
        let pts = sol.feasible_vertices.iter().map(|p| (p.x1, p.x2)).collect();
        out.push(Trace::new("feasible vertices", "vertex", pts));
    }
    if let Some(p) = sol.optimal_point {
        out.push(Trace::new(format!("optimum {p:.1}"), "optimum", vec![(p.x1, p.x2)]));
    }
    out
}

pub fn to_frame(traces: &[Trace]) -> PolarsResult<DataFrame> {
    let rows: usize = traces.iter().map(|t| t.points.len()).sum();
    let mut labels = Vec::with_capacity(rows);
    let mut kinds = Vec::with_capacity(rows);
    let mut xs = Vec::with_capacity(rows);
    let mut ys = Vec::with_capacity(rows);
    for t in traces {
        for &(x, y) in &t.points {
            labels.push(t.label.as_str());
            kinds.push(t.kind);
            xs.push(x);
            ys.push(y);
        }
    }
    df!(
        "trace" => labels,
        "kind" => kinds,
        "x" => xs,
        "y" => ys
    )
}

/// Write `df` as CSV or Parquet, chosen by the file extension.
pub fn write(df: &mut DataFrame, path: &Path) -> Result<()> {
    crate::provenance::ensure_parent(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let file = || File::create(path).with_context(|| format!("creating {}", path.display()));
    match ext.as_deref() {
        Some("csv") => {
            let mut f = file()?;
            CsvWriter::new(&mut f).include_header(true).finish(df)?;
        }
        Some("parquet") => {
            ParquetWriter::new(file()?).finish(df)?;
        }
        _ => bail!(
            "unsupported output extension for {}: expected .csv or .parquet",
            path.display()
        ),
    }
    Ok(())
}
