use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use planar_lp::plot::PlotWindow;
use planar_lp::presets::Preset;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;
mod traces;

#[derive(Parser)]
#[command(name = "planar-lp")]
#[command(about = "Solve and plot two-variable linear programs")]
struct Cmd {
    /// Log verbosity: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Problem JSON file
    #[arg(long)]
    input: Option<PathBuf>,
    /// Bundled example problem (see `presets`)
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Args)]
struct Tolerances {
    /// Determinant, feasibility, and zero-coefficient tolerance
    #[arg(long, default_value_t = 1e-10)]
    eps: f64,
    /// Grid size for merging near-duplicate vertices
    #[arg(long, default_value_t = 1e-6)]
    eps_dedup: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a problem and print (or write) the results
    Solve {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        tol: Tolerances,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the results here instead of stdout (adds a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sample constraint boundaries and solution points into a CSV/Parquet table
    Lines {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        tol: Tolerances,
        #[arg(long)]
        out: PathBuf,
        /// Samples per boundary line
        #[arg(long, default_value_t = 500)]
        samples: usize,
    },
    /// List bundled example problems
    Presets,
    /// Print a small provenance JSON block
    Report,
}

/// Run parameters recorded in provenance sidecars.
#[derive(Serialize)]
struct Params<'a> {
    command: &'a str,
    input: Option<&'a Path>,
    preset: Option<&'a str>,
    eps: f64,
    eps_dedup: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<usize>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            source,
            tol,
            format,
            out,
        } => solve(source, tol, format, out),
        Action::Lines {
            source,
            tol,
            out,
            samples,
        } => lines(source, tol, out, samples),
        Action::Presets => presets(),
        Action::Report => report(),
    }
}

fn solve(source: Source, tol: Tolerances, format: Format, out: Option<PathBuf>) -> Result<()> {
    let cfg = input::cfg(tol.eps, tol.eps_dedup)?;
    let problem = input::load(source.input.as_deref(), source.preset.as_deref())?;
    tracing::info!(constraints = problem.constraints.len(), "solve");
    let sol = planar_lp::solve(&problem, cfg);
    tracing::info!(
        vertices = sol.feasible_vertices.len(),
        feasible = sol.is_feasible,
        "solved"
    );

    let body = match format {
        Format::Text => report::render(&sol, cfg),
        Format::Json => serde_json::to_string_pretty(&sol)?,
    };
    let Some(out) = out else {
        println!("{body}");
        return Ok(());
    };
    provenance::ensure_parent(&out)?;
    fs::write(&out, body).with_context(|| format!("writing {}", out.display()))?;
    let params = Params {
        command: "solve",
        input: source.input.as_deref(),
        preset: source.preset.as_deref(),
        eps: cfg.eps,
        eps_dedup: cfg.eps_dedup,
        samples: None,
    };
    provenance::write_sidecar(&out, provenance::Payload::new(serde_json::to_value(params)?))?;
    tracing::info!(out = %out.display(), "results written");
    Ok(())
}

fn lines(source: Source, tol: Tolerances, out: PathBuf, samples: usize) -> Result<()> {
    anyhow::ensure!(samples >= 2, "--samples must be at least 2, got {samples}");
    let cfg = input::cfg(tol.eps, tol.eps_dedup)?;
    let problem = input::load(source.input.as_deref(), source.preset.as_deref())?;
    let sol = planar_lp::solve(&problem, cfg);
    let window = PlotWindow::for_solution(&sol);
    tracing::info!(x_max = window.x_max, y_max = window.y_max, samples, "lines");

    let traces = traces::collect(&sol, window, samples, cfg);
    let mut df = traces::to_frame(&traces)?;
    traces::write(&mut df, &out)?;
    let params = Params {
        command: "lines",
        input: source.input.as_deref(),
        preset: source.preset.as_deref(),
        eps: cfg.eps,
        eps_dedup: cfg.eps_dedup,
        samples: Some(samples),
    };
    provenance::write_sidecar(&out, provenance::Payload::new(serde_json::to_value(params)?))?;
    tracing::info!(rows = df.height(), traces = traces.len(), out = %out.display(), "table written");
    Ok(())
}

fn presets() -> Result<()> {
    for p in Preset::ALL {
        let problem = p.problem();
        println!("{:<12} {}", p.name(), problem.objective);
        for c in &problem.constraints {
            println!("{:<12}   {c}", "");
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "planar_lp": planar_lp::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn source_requires_exactly_one() {
        assert!(Cmd::try_parse_from(["planar-lp", "solve"]).is_err());
        assert!(
            Cmd::try_parse_from(["planar-lp", "solve", "--preset", "mix", "--input", "p.json"])
                .is_err()
        );
        let cmd = Cmd::try_parse_from(["planar-lp", "-v", "solve", "--preset", "mix"]).unwrap();
        assert_eq!(cmd.verbose, 1);
        assert!(matches!(cmd.action, Action::Solve { .. }));
    }

    #[test]
    fn solve_writes_results_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("res/mix.json");
        let source = Source {
            input: None,
            preset: Some("mix".into()),
        };
        let tol = Tolerances {
            eps: 1e-10,
            eps_dedup: 1e-6,
        };
        solve(source, tol, Format::Json, Some(out.clone())).unwrap();
        let sol: planar_lp::Solution =
            serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(sol.optimal_value, Some(800.0));
        assert!(dir.path().join("res/mix.provenance.json").exists());
    }
}
