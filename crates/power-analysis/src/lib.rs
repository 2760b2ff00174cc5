//! Analytical power for Pearson correlation tests
//!
//! This crate answers two questions about an experiment that will be
//! analyzed with a Pearson correlation:
//!
//! - **How much power does it have?** Given an expected effect size, a
//!   significance level, a sample size, and a test tail, [`power`] returns
//!   the probability of correctly rejecting the null, computed in closed
//!   form via the Fisher z-transformation.
//! - **How many samples does it need?** [`PowerSweep`] evaluates the power
//!   over a grid of effect sizes, significance levels, and candidate sample
//!   sizes, and reports per (r, alpha) pair the sample size whose power is
//!   closest to a target level.
//!
//! # Examples
//!
//! ## Power of a single design
//!
//! ```rust
//! use power_analysis::{power, Tail};
//!
//! let p = power(0.4, 0.05, 100.0, Tail::Right).unwrap();
//! println!("The power of this experiment is: {:.2}", p);
//! ```
//!
//! ## Sample size search
//!
//! ```rust
//! use power_analysis::PowerSweep;
//!
//! let result = PowerSweep::new(vec![0.3, 0.5], vec![0.05, 0.01])
//!     .target_power(0.95)
//!     .run()
//!     .unwrap();
//!
//! // Larger effects need fewer samples
//! assert!(result.target_n(1, 0) < result.target_n(0, 0));
//! ```

mod power;
mod sweep;

// Re-exports
pub use power::{critical_z, fisher_z, power, power_curve};
pub use power_core::{Error, Result, Tail};
pub use sweep::{PowerSweep, SweepResult, MIN_SAMPLE_SIZE};

/// Convenience constructor for a sweep with the default settings
pub fn power_sweep(effect_sizes: Vec<f64>, alphas: Vec<f64>) -> PowerSweep {
    PowerSweep::new(effect_sizes, alphas)
}
