//! Power-curve visualization
//!
//! A thin charting layer over the `power-analysis` sweep: it draws power as
//! a function of sample size, one curve per (effect size, significance
//! level) pair, with the located target sample sizes marked. Rendering is
//! generic over any `plotters` drawing backend; a convenience entry point
//! writes straight to an SVG file.
//!
//! # Example
//!
//! ```rust,no_run
//! use power_analysis::PowerSweep;
//! use power_viz::{save_power_chart, ChartOptions};
//!
//! let result = PowerSweep::new(vec![0.4], vec![0.05, 0.01, 0.001])
//!     .run()
//!     .unwrap();
//! save_power_chart("power.svg", &result, &ChartOptions::default()).unwrap();
//! ```

mod chart;

// Re-exports
pub use chart::{render_power_chart, save_power_chart, ChartOptions};
