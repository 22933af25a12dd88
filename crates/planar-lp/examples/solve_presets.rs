//! Solve every bundled preset and print its vertices and optimum.
//!
//! Run: cargo run -p planar-lp --example solve_presets

use planar_lp::prelude::*;

fn main() {
    let cfg = LpCfg::default();
    for preset in Preset::ALL {
        let problem = preset.problem();
        let sol = solve(&problem, cfg);
        println!("[{}] {}", preset.name(), problem.objective);
        for c in problem.user_constraints() {
            println!("  s.t. {c}");
        }
        for e in &sol.vertex_evaluations {
            println!("  vertex {:.3} -> Z = {:.3}", e.point, e.objective_value);
        }
        match sol.optimum() {
            Some((p, z)) => println!("  optimum {p:.3}, Z* = {z:.3}"),
            None => println!("  infeasible"),
        }
    }
}
