//! Two-panel summary figure for the aggregated sweep.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::config::PlotConfig;
use crate::stats::AggregateSeries;

const RUN_COLOR: RGBColor = RGBColor(128, 128, 128);
const HTSE_COLOR: RGBColor = RGBColor(0, 100, 0);
const HSIE_COLOR: RGBColor = RGBColor(0, 0, 139);

/// Color ramp over the sweep: early steps blue, late steps red.
fn step_color(step: usize, last: usize) -> HSLColor {
    let t = if last == 0 {
        0.0
    } else {
        step as f64 / last as f64
    };
    HSLColor((240.0 - 240.0 * t) / 360.0, 0.90, 0.45)
}

/// Render the two-panel figure: mean trajectory in the normalized
/// (htse, hsie) plane, and metric evolution with std bands.
pub fn render_summary(
    out_path: &Path,
    cfg: &PlotConfig,
    htse_rows: &[Vec<f32>],
    hsie_rows: &[Vec<f32>],
    agg: &AggregateSeries,
) -> Result<(), Box<dyn Error>> {
    let n_runs = htse_rows.len();
    let n_steps = agg.n_steps();
    if n_runs == 0 || n_steps == 0 {
        return Ok(());
    }
    let turning = agg.turning_point();
    let marker = cfg.style.marker_size as i32;

    let root =
        BitMapBackend::new(out_path, (cfg.figure.width, cfg.figure.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        &format!("IB Dynamics Revealed by N-Sweep (Aggregated over {n_runs} Runs)"),
        ("sans-serif", 32),
    )?;
    let panels = root.split_evenly((1, 2));

    // Panel 1: per-run trajectory cloud plus the mean trajectory colored
    // by step index.
    let mut chart = ChartBuilder::on(&panels[0])
        .caption(
            "1. Mean Trajectory in Semantic State Space",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.05f32..1.05f32, -0.05f32..1.05f32)?;

    chart
        .configure_mesh()
        .x_desc("Normalized Cognitive Cost (H'_tse)")
        .y_desc("Normalized Semantic Robustness (H'_sie)")
        .draw()?;

    for (htse, hsie) in htse_rows.iter().zip(hsie_rows) {
        let pts = htse.iter().zip(hsie).map(|(&x, &y)| (x, y));
        chart.draw_series(LineSeries::new(pts, RUN_COLOR.mix(cfg.style.run_alpha)))?;
    }

    let last = n_steps - 1;
    chart.draw_series((0..n_steps).map(|i| {
        Circle::new(
            (agg.mean_htse[i], agg.mean_hsie[i]),
            marker,
            step_color(i, last).filled(),
        )
    }))?;

    chart
        .draw_series(std::iter::once(Circle::new(
            (agg.mean_htse[0], agg.mean_hsie[0]),
            marker + 4,
            BLUE.filled(),
        )))?
        .label("Start (N increases)")
        .legend(|(x, y)| Circle::new((x + 10, y), 6, BLUE.filled()));

    chart
        .draw_series(std::iter::once(Circle::new(
            (agg.mean_htse[turning], agg.mean_hsie[turning]),
            marker + 4,
            RED.filled(),
        )))?
        .label("Turning Point (Compression Starts)")
        .legend(|(x, y)| Circle::new((x + 10, y), 6, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    // Panel 2: mean lines with +/- std bands over the step axis.
    let x_max = (last as f32).max(1.0);
    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;
    for i in 0..n_steps {
        y_min = y_min
            .min(agg.mean_htse[i] - agg.std_htse[i])
            .min(agg.mean_hsie[i] - agg.std_hsie[i]);
        y_max = y_max
            .max(agg.mean_htse[i] + agg.std_htse[i])
            .max(agg.mean_hsie[i] + agg.std_hsie[i]);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    let pad = 0.05 * (y_max - y_min).max(1e-6);
    let y_lo = y_min - pad;
    let y_hi = y_max + pad;

    let mut chart = ChartBuilder::on(&panels[1])
        .caption("2. Mean Entropy Evolution with Std. Dev.", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f32..x_max, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("N-Sweep Step (Model Capacity N increases then decreases)")
        .y_desc("Normalized Entropy Value")
        .draw()?;

    let mut htse_band: Vec<(f32, f32)> = (0..n_steps)
        .map(|i| (i as f32, agg.mean_htse[i] + agg.std_htse[i]))
        .collect();
    for i in (0..n_steps).rev() {
        htse_band.push((i as f32, agg.mean_htse[i] - agg.std_htse[i]));
    }
    chart
        .draw_series(std::iter::once(Polygon::new(
            htse_band,
            HTSE_COLOR.mix(cfg.style.band_alpha).filled(),
        )))?
        .label("Std. Dev.")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 16, y + 5)], HTSE_COLOR.mix(0.3).filled())
        });

    let mut hsie_band: Vec<(f32, f32)> = (0..n_steps)
        .map(|i| (i as f32, agg.mean_hsie[i] + agg.std_hsie[i]))
        .collect();
    for i in (0..n_steps).rev() {
        hsie_band.push((i as f32, agg.mean_hsie[i] - agg.std_hsie[i]));
    }
    chart.draw_series(std::iter::once(Polygon::new(
        hsie_band,
        HSIE_COLOR.mix(cfg.style.band_alpha).filled(),
    )))?;

    chart
        .draw_series(LineSeries::new(
            agg.mean_htse.iter().enumerate().map(|(i, &m)| (i as f32, m)),
            HTSE_COLOR.stroke_width(3),
        ))?
        .label("H'_tse (Mean)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], HTSE_COLOR.stroke_width(3)));

    chart
        .draw_series(LineSeries::new(
            agg.mean_hsie.iter().enumerate().map(|(i, &m)| (i as f32, m)),
            HSIE_COLOR.stroke_width(3),
        ))?
        .label("H'_sie (Mean)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], HSIE_COLOR.stroke_width(3)));

    chart
        .draw_series(DashedLineSeries::new(
            [(turning as f32, y_lo), (turning as f32, y_hi)],
            8,
            5,
            RED.stroke_width(2),
        ))?
        .label(format!("Mean Compression Starts (Step {turning})"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
