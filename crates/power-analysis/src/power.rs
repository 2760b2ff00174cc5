//! Analytical power of a Pearson correlation test
//!
//! The calculation rests on the Fisher z-transformation of the expected
//! correlation, which turns the test statistic into an approximately normal
//! quantity and gives a closed-form normal approximation to the power of the
//! test without any simulation.

use power_core::{Error, Result, Tail};
use statrs::distribution::{ContinuousCDF, Normal};

/// Fisher z-transform of a correlation coefficient
///
/// Variance-stabilizing transform `0.5 * ln((1 + r) / (1 - r))`. Diverges to
/// ±infinity as `r` approaches ±1; this is deliberate — the divergence flows
/// through the power formula and saturates the result at 1 or 0 rather than
/// being guarded against.
pub fn fisher_z(r: f64) -> f64 {
    0.5 * ((1.0 + r) / (1.0 - r)).ln()
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {}", e)))
}

/// Critical z-value for a significance level under the given tail
///
/// One-sided tests use `Φ⁻¹(1 - alpha)`, two-sided tests `Φ⁻¹(1 - alpha/2)`.
pub fn critical_z(alpha: f64, tail: Tail) -> Result<f64> {
    let normal = standard_normal()?;
    Ok(normal.inverse_cdf(tail.critical_probability(alpha)))
}

/// Analytical power of a Pearson correlation test
///
/// Given an expected correlation `r`, a significance level `alpha`, a sample
/// size `n`, and the test [`Tail`], returns the probability of correctly
/// rejecting the null hypothesis of zero correlation.
///
/// The sample size is carried as `f64` through the transform. Two edge cases
/// are numerically defined rather than errors:
///
/// - `r = ±1` makes the Fisher transform diverge, so the power saturates at
///   1 (or 0 for a right-tailed test of a perfectly negative effect);
/// - `n < 2` makes the square-root argument negative, so the result is NaN.
///
/// # Example
///
/// ```rust
/// use power_analysis::{power, Tail};
///
/// let p = power(0.4, 0.05, 100.0, Tail::Right).unwrap();
/// assert!(p > 0.99);
/// ```
pub fn power(r: f64, alpha: f64, n: f64, tail: Tail) -> Result<f64> {
    let normal = standard_normal()?;
    let z_alpha = normal.inverse_cdf(tail.critical_probability(alpha));
    let z_beta = fisher_z(r) * (n - 2.0).sqrt() - z_alpha;
    Ok(normal.cdf(z_beta))
}

/// Power across a slice of sample sizes
///
/// Evaluates the same calculation as [`power`] elementwise over `ns`,
/// computing the Fisher transform and the critical value once. The output
/// has the same length as `ns`; an empty slice yields an empty vector.
pub fn power_curve(r: f64, alpha: f64, ns: &[f64], tail: Tail) -> Result<Vec<f64>> {
    let normal = standard_normal()?;
    let z_alpha = normal.inverse_cdf(tail.critical_probability(alpha));
    let c = fisher_z(r);

    Ok(ns
        .iter()
        .map(|&n| normal.cdf(c * (n - 2.0).sqrt() - z_alpha))
        .collect())
}
