//! Problem sources for the CLI: JSON files and bundled presets.
//!
//! Non-finite coefficients are rejected here; the solver assumes finite input.

use anyhow::{anyhow, bail, ensure, Context, Result};
use planar_lp::presets::Preset;
use planar_lp::{LpCfg, Problem};
use std::fs;
use std::path::Path;

/// Load a problem from `input` (JSON) or from a preset name.
pub fn load(input: Option<&Path>, preset: Option<&str>) -> Result<Problem> {
    let problem = match (input, preset) {
        (Some(path), _) => {
            let bytes =
                fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice::<Problem>(&bytes)
                .with_context(|| format!("parsing problem JSON {}", path.display()))?
        }
        (None, Some(name)) => Preset::from_name(name)
            .ok_or_else(|| {
                let known: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                anyhow!("unknown preset {name:?}; expected one of {}", known.join(", "))
            })?
            .problem(),
        (None, None) => bail!("no problem given: pass --input FILE or --preset NAME"),
    };
    validate(&problem)?;
    Ok(problem)
}

pub fn validate(problem: &Problem) -> Result<()> {
    ensure!(
        problem.objective.is_finite(),
        "objective coefficients must be finite: {}",
        problem.objective
    );
    for (i, c) in problem.constraints.iter().enumerate() {
        ensure!(c.is_finite(), "constraint #{} is not finite: {c}", i + 1);
    }
    Ok(())
}

/// Solver tolerances from CLI flags.
pub fn cfg(eps: f64, eps_dedup: f64) -> Result<LpCfg> {
    ensure!(eps.is_finite() && eps > 0.0, "--eps must be positive, got {eps}");
    ensure!(
        eps_dedup.is_finite() && eps_dedup > 0.0,
        "--eps-dedup must be positive, got {eps_dedup}"
    );
    Ok(LpCfg::default().with_eps(eps).with_eps_dedup(eps_dedup))
}
