//! Plain-text results report.

use std::fmt;

use planar_lp::{LpCfg, Solution};

/// Render the problem, its feasible vertices, and the optimum.
///
/// Each vertex is re-checked against the normalized problem and marked
/// `✓`/`✗` accordingly.
pub fn render(sol: &Solution, cfg: LpCfg) -> String {
    Report { sol, cfg }.to_string()
}

struct Report<'a> {
    sol: &'a Solution,
    cfg: LpCfg,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report { sol, cfg } = *self;
        writeln!(out, "=== PROBLEM ===")?;
        writeln!(out, "- {}", sol.problem.objective)?;
        writeln!(out, "- Constraints:")?;
        for c in sol.problem.user_constraints() {
            writeln!(out, "  - {c}")?;
        }
        writeln!(out, "  - x1 >= 0, x2 >= 0")?;
        writeln!(out)?;

        writeln!(out, "=== FEASIBLE REGION VERTICES ===")?;
        writeln!(
            out,
            "{} intersection point(s), {} feasible vertex(es)",
            sol.intersection_points.len(),
            sol.feasible_vertices.len()
        )?;
        if sol.vertex_evaluations.is_empty() {
            writeln!(out, "No feasible vertices found.")?;
        }
        for (i, e) in sol.vertex_evaluations.iter().enumerate() {
            let mark = if sol.problem.contains(e.point, cfg) {
                "✓"
            } else {
                "✗"
            };
            writeln!(
                out,
                "{}. {:.3} -> Z = {:.3} {mark}",
                i + 1,
                e.point,
                e.objective_value
            )?;
        }
        writeln!(out)?;

        writeln!(out, "=== OPTIMAL SOLUTION ===")?;
        match sol.optimum() {
            Some((p, z)) => {
                writeln!(out, "Optimal point: x1* = {:.3}, x2* = {:.3}", p.x1, p.x2)?;
                writeln!(out, "Optimal value: Z* = {z:.3}")?;
            }
            None => writeln!(out, "No feasible solution found.")?,
        }
        Ok(())
    }
}
