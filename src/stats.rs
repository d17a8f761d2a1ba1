//! Per-run normalization and cross-run aggregation of sweep metrics.

use tracing::debug;

use crate::data::Run;

/// Min-max scale a sequence into [0, 1].
///
/// A constant sequence maps to all zeros rather than dividing by the
/// zero range.
pub fn minmax_scale(values: &[f32]) -> Vec<f32> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    let range = max - min;
    if range <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| (v - min) / range).collect()
}

/// Normalize each run's metric sequences independently.
///
/// Returns the (htse, hsie) matrices, one row per run.
pub fn normalized_metric_rows(runs: &[Run]) -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
    let mut htse_rows = Vec::with_capacity(runs.len());
    let mut hsie_rows = Vec::with_capacity(runs.len());
    for run in runs {
        let htse: Vec<f32> = run.iter().map(|r| r.final_htse).collect();
        let hsie: Vec<f32> = run.iter().map(|r| r.final_hsie).collect();
        htse_rows.push(minmax_scale(&htse));
        hsie_rows.push(minmax_scale(&hsie));
    }
    (htse_rows, hsie_rows)
}

/// Elementwise mean and population standard deviation across the run axis.
///
/// Rows are assumed rectangular; lengths follow the first row.
pub fn mean_std_across_runs(rows: &[Vec<f32>]) -> (Vec<f32>, Vec<f32>) {
    let Some(first) = rows.first() else {
        return (Vec::new(), Vec::new());
    };
    let n_steps = first.len();
    let n_runs = rows.len() as f32;
    let mut means = Vec::with_capacity(n_steps);
    let mut stds = Vec::with_capacity(n_steps);
    for step in 0..n_steps {
        let mean = rows.iter().map(|row| row[step]).sum::<f32>() / n_runs;
        let var = rows
            .iter()
            .map(|row| {
                let d = row[step] - mean;
                d * d
            })
            .sum::<f32>()
            / n_runs;
        means.push(mean);
        stds.push(var.max(0.0).sqrt());
    }
    (means, stds)
}

/// Index of the maximum value, first occurrence winning ties.
pub fn argmax(values: &[f32]) -> usize {
    let mut best_idx = 0;
    let mut best = f32::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best {
            best = v;
            best_idx = i;
        }
    }
    best_idx
}

/// Mean and std series for both metrics over the sweep.
#[derive(Debug, Clone)]
pub struct AggregateSeries {
    pub mean_htse: Vec<f32>,
    pub std_htse: Vec<f32>,
    pub mean_hsie: Vec<f32>,
    pub std_hsie: Vec<f32>,
}

impl AggregateSeries {
    pub fn from_rows(htse_rows: &[Vec<f32>], hsie_rows: &[Vec<f32>]) -> Self {
        let (mean_htse, std_htse) = mean_std_across_runs(htse_rows);
        let (mean_hsie, std_hsie) = mean_std_across_runs(hsie_rows);
        debug!(steps = mean_htse.len(), "aggregated run matrix");
        Self {
            mean_htse,
            std_htse,
            mean_hsie,
            std_hsie,
        }
    }

    #[inline]
    pub fn n_steps(&self) -> usize {
        self.mean_htse.len()
    }

    /// Step at which mean hsie peaks: where the sweep's compression phase
    /// begins.
    pub fn turning_point(&self) -> usize {
        argmax(&self.mean_hsie)
    }
}

/// CSV of the aggregate series, one row per step.
pub fn summary_csv(agg: &AggregateSeries) -> String {
    let mut out = String::from("step,mean_htse,std_htse,mean_hsie,std_hsie\n");
    for step in 0..agg.n_steps() {
        out.push_str(&format!(
            "{step},{:.6},{:.6},{:.6},{:.6}\n",
            agg.mean_htse[step], agg.std_htse[step], agg.mean_hsie[step], agg.std_hsie[step]
        ));
    }
    out
}
