//! Analytical statistical power for Pearson correlation tests
//!
//! This crate re-exports the pearson-power workspace: closed-form power
//! calculation via the Fisher z-transformation, a grid sweep that locates
//! the sample size reaching a target power, and (behind the `viz` feature)
//! a plotting layer for the resulting power curves.
//!
//! # Example
//!
//! ```rust
//! use pearson_power::{power, PowerSweep, Tail};
//!
//! // Power of a single design
//! let p = power(0.4, 0.05, 100.0, Tail::Right).unwrap();
//! assert!(p > 0.99);
//!
//! // Sample size needed to hit 95% power
//! let result = PowerSweep::new(vec![0.4], vec![0.05])
//!     .target_power(0.95)
//!     .run()
//!     .unwrap();
//! let n = result.target_n(0, 0);
//! assert!(n > pearson_power::MIN_SAMPLE_SIZE);
//! ```

// Re-export workspace crates
pub use power_analysis::{
    critical_z, fisher_z, power, power_curve, power_sweep, PowerSweep, SweepResult,
    MIN_SAMPLE_SIZE,
};
pub use power_core::{Error, Result, Tail};

#[cfg(feature = "viz")]
pub use power_viz::{render_power_chart, save_power_chart, ChartOptions};
