//! Loading of aggregated multirun sweep results.

use std::error::Error;
use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

/// One recorded step of a sweep run.
///
/// The sweep driver writes many more fields per record; only the two
/// entropy metrics matter for the summary figure.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StepRecord {
    pub final_htse: f32,
    pub final_hsie: f32,
}

/// One independent run: its step records in sweep order.
pub type Run = Vec<StepRecord>;

/// Parse the results JSON: a top-level array of runs, each an array of
/// step records.
pub fn load_runs(path: &Path) -> Result<Vec<Run>, Box<dyn Error>> {
    let text = read_to_string(path)?;
    let runs: Vec<Run> = serde_json::from_str(&text)?;
    Ok(runs)
}
