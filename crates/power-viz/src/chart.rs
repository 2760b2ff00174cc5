//! Power-curve charting on top of the sweep output
//!
//! Draws one power-vs-sample-size curve per (effect size, significance
//! level) pair, a dashed vertical marker at each pair's target sample size,
//! and a dashed horizontal reference line at the target power. The chart
//! contributes no computational logic; everything it shows comes from the
//! [`SweepResult`] it consumes.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use power_analysis::SweepResult;
use power_core::{Error, Result};
use std::path::Path;

/// Labels and caption for a power chart
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Caption override; when `None` a caption naming the effect size(s)
    /// and tail is generated from the sweep result
    pub caption: Option<String>,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            caption: None,
            x_label: "Sample size".to_string(),
            y_label: "analytical power (β)".to_string(),
        }
    }
}

fn draw_err<E>(e: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Computation(format!("failed to draw chart: {}", e))
}

fn default_caption(result: &SweepResult) -> String {
    match result.effect_sizes() {
        [r] => format!("Expected effect size: r = {:.3}, tail = {}", r, result.tail()),
        rs => {
            let listed: Vec<String> = rs.iter().map(|r| format!("{:.2}", r)).collect();
            format!(
                "Expected effect sizes: r = [{}], tail = {}",
                listed.join(", "),
                result.tail()
            )
        }
    }
}

/// Render the power curves of a sweep into a caller-supplied drawing area
///
/// Generic over the `plotters` backend, so the same rendering works against
/// an SVG file, a bitmap, or an in-memory buffer.
pub fn render_power_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    result: &SweepResult,
    options: &ChartOptions,
) -> Result<()> {
    area.fill(&WHITE).map_err(draw_err)?;

    let (n_r, n_alpha, _) = result.shape();
    let first = result.sample_sizes().first().copied().unwrap_or(0);
    let last = result.sample_sizes().last().copied().unwrap_or(first);
    let x_min = first as f64;
    // A degenerate single-candidate range still needs a non-empty axis
    let x_max = last.max(first + 1) as f64;

    let caption = options
        .caption
        .clone()
        .unwrap_or_else(|| default_caption(result));

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..1f64)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .draw()
        .map_err(draw_err)?;

    for r_idx in 0..n_r {
        for alpha_idx in 0..n_alpha {
            let color = Palette99::pick(r_idx * n_alpha + alpha_idx).mix(1.0);
            let curve: Vec<(f64, f64)> = result
                .sample_sizes()
                .iter()
                .zip(result.curve(r_idx, alpha_idx).iter())
                .map(|(&n, &p)| (n as f64, p))
                .collect();

            let target_n = result.target_n(r_idx, alpha_idx);
            let label = if n_r > 1 {
                format!(
                    "r={:.2}, α={:.4} -- N={}",
                    result.effect_sizes()[r_idx],
                    result.alphas()[alpha_idx],
                    target_n
                )
            } else {
                format!("α={:.4} -- N={}", result.alphas()[alpha_idx], target_n)
            };

            chart
                .draw_series(LineSeries::new(curve, color))
                .map_err(draw_err)?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

            // Vertical marker at the target sample size, in the curve color
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(target_n as f64, 0.0), (target_n as f64, 1.0)],
                    4,
                    3,
                    color.into(),
                ))
                .map_err(draw_err)?;
        }
    }

    // Horizontal reference line at the target power
    chart
        .draw_series(DashedLineSeries::new(
            vec![(x_min, result.target_power()), (x_max, result.target_power())],
            4,
            3,
            BLACK.into(),
        ))
        .map_err(draw_err)?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    area.present().map_err(draw_err)?;

    Ok(())
}

/// Render the power curves of a sweep to an SVG file
///
/// Creates the drawing surface implicitly; use [`render_power_chart`] to
/// draw into an existing one.
pub fn save_power_chart<P: AsRef<Path>>(
    path: P,
    result: &SweepResult,
    options: &ChartOptions,
) -> Result<()> {
    let root = SVGBackend::new(path.as_ref(), (900, 540)).into_drawing_area();
    render_power_chart(&root, result, options)
}
