//! Aggregated multirun N-sweep trajectory plotting.
//!
//! Loads a JSON collection of independent sweep runs, min-max normalizes
//! each run's entropy metrics, reduces across runs to mean/std series, and
//! renders a two-panel summary figure plus a CSV of the aggregate series.

pub mod cli;
pub mod config;
pub mod data;
pub mod render;
pub mod stats;

use std::error::Error;
use std::fs::write;
use std::path::Path;

use tracing::info;

use crate::cli::Args;
use crate::config::PlotConfig;

/// Full load -> normalize -> aggregate -> render pipeline for one
/// invocation.
///
/// A missing or empty results file is reported on stderr and produces no
/// figure; both are a normal exit.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let input = Path::new(&args.input);
    if !input.exists() {
        eprintln!("Error: The file '{}' was not found.", args.input);
        return Ok(());
    }
    let runs = data::load_runs(input)?;
    if runs.is_empty() {
        eprintln!("Error: The results file is empty.");
        return Ok(());
    }
    info!(runs = runs.len(), steps = runs[0].len(), "loaded sweep results");

    let (htse_rows, hsie_rows) = stats::normalized_metric_rows(&runs);
    let agg = stats::AggregateSeries::from_rows(&htse_rows, &hsie_rows);
    info!(turning_point = agg.turning_point(), "aggregated runs");

    let cfg = PlotConfig::load_or_default(&args.config);
    let out_path = Path::new(&args.output);
    render::render_summary(out_path, &cfg, &htse_rows, &hsie_rows, &agg)?;
    println!("Aggregated summary plot saved to: {}", args.output);

    if !args.no_csv {
        let csv_path = out_path.with_extension("csv");
        write(&csv_path, stats::summary_csv(&agg))?;
        println!("Aggregate series written to: {}", csv_path.display());
    }
    Ok(())
}
