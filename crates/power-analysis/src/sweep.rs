//! Power grid sweep and target sample size search
//!
//! Evaluates the power function over the cartesian product of effect sizes
//! and significance levels, for every candidate sample size up to a maximum,
//! and locates per (r, alpha) pair the sample size whose power lands closest
//! to a target level.

use crate::power::power_curve;
use power_core::{Error, Result, Tail};
use tracing::debug;

/// Smallest candidate sample size considered by a sweep.
///
/// Below this the normal approximation behind the analytical formula is
/// unreliable, so the candidate range starts here rather than at the
/// mathematical floor of 3.
pub const MIN_SAMPLE_SIZE: usize = 5;

/// Configuration for a power sweep
///
/// Defaults to a single effect size of 0.4, significance levels
/// {0.05, 0.01, 0.001}, a right-tailed test, candidate sample sizes up to
/// 200, and a target power of 0.95. Setters follow the chained style:
///
/// ```rust
/// use power_analysis::{PowerSweep, Tail};
///
/// let result = PowerSweep::new(vec![0.3, 0.5], vec![0.05, 0.01])
///     .tail(Tail::Right)
///     .n_max(150)
///     .target_power(0.9)
///     .run()
///     .unwrap();
/// assert_eq!(result.shape(), (2, 2, 146));
/// ```
#[derive(Debug, Clone)]
pub struct PowerSweep {
    effect_sizes: Vec<f64>,
    alphas: Vec<f64>,
    tail: Tail,
    n_max: usize,
    target_power: f64,
}

impl Default for PowerSweep {
    fn default() -> Self {
        Self {
            effect_sizes: vec![0.4],
            alphas: vec![0.05, 0.01, 0.001],
            tail: Tail::Right,
            n_max: 200,
            target_power: 0.95,
        }
    }
}

impl PowerSweep {
    /// Create a sweep over the given effect sizes and significance levels,
    /// keeping the defaults for everything else
    pub fn new(effect_sizes: Vec<f64>, alphas: Vec<f64>) -> Self {
        Self {
            effect_sizes,
            alphas,
            ..Self::default()
        }
    }

    /// Set the tail of the test
    pub fn tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    /// Set the maximum candidate sample size (inclusive)
    pub fn n_max(mut self, n_max: usize) -> Self {
        self.n_max = n_max;
        self
    }

    /// Set the power level the sample size search aims for
    pub fn target_power(mut self, target_power: f64) -> Self {
        self.target_power = target_power;
        self
    }

    /// Run the sweep
    ///
    /// Effect sizes are sorted ascending and significance levels descending
    /// before computing, so the output index order is deterministic
    /// regardless of input order. Fails if the candidate range
    /// `MIN_SAMPLE_SIZE..=n_max` is empty; empty effect-size or alpha inputs
    /// are fine and produce empty grids.
    pub fn run(&self) -> Result<SweepResult> {
        let sample_sizes: Vec<usize> = (MIN_SAMPLE_SIZE..=self.n_max).collect();
        if sample_sizes.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "n_max {} leaves no candidate sample sizes (minimum is {})",
                self.n_max, MIN_SAMPLE_SIZE
            )));
        }
        let ns: Vec<f64> = sample_sizes.iter().map(|&n| n as f64).collect();

        let mut effect_sizes = self.effect_sizes.clone();
        effect_sizes.sort_by(f64::total_cmp);
        let mut alphas = self.alphas.clone();
        alphas.sort_by(|a, b| b.total_cmp(a));

        debug!(
            n_effect_sizes = effect_sizes.len(),
            n_alphas = alphas.len(),
            n_candidates = sample_sizes.len(),
            tail = %self.tail,
            "running power sweep"
        );

        let mut power = Vec::with_capacity(effect_sizes.len() * alphas.len() * ns.len());
        let mut target_n = Vec::with_capacity(effect_sizes.len() * alphas.len());

        for &r in &effect_sizes {
            for &alpha in &alphas {
                let curve = power_curve(r, alpha, &ns, self.tail)?;

                // Ascending scan with a strict comparison: ties resolve to
                // the smallest candidate sample size.
                let mut best = 0;
                let mut best_dist = f64::INFINITY;
                for (i, &p) in curve.iter().enumerate() {
                    let dist = (p - self.target_power).abs();
                    if dist < best_dist {
                        best_dist = dist;
                        best = i;
                    }
                }

                debug!(r, alpha, target_n = sample_sizes[best], "located target sample size");
                target_n.push(sample_sizes[best]);
                power.extend_from_slice(&curve);
            }
        }

        Ok(SweepResult {
            effect_sizes,
            alphas,
            sample_sizes,
            tail: self.tail,
            target_power: self.target_power,
            power,
            target_n,
        })
    }
}

/// Output of a power sweep
///
/// Holds the full power grid, stored row-major and indexed by
/// [effect size, significance level, sample size], plus the per-pair target
/// sample sizes. Effect sizes are ascending and significance levels
/// descending, as normalized by [`PowerSweep::run`].
#[derive(Debug, Clone)]
pub struct SweepResult {
    effect_sizes: Vec<f64>,
    alphas: Vec<f64>,
    sample_sizes: Vec<usize>,
    tail: Tail,
    target_power: f64,
    power: Vec<f64>,
    target_n: Vec<usize>,
}

impl SweepResult {
    /// Effect sizes, ascending
    pub fn effect_sizes(&self) -> &[f64] {
        &self.effect_sizes
    }

    /// Significance levels, descending
    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// Candidate sample sizes, ascending
    pub fn sample_sizes(&self) -> &[usize] {
        &self.sample_sizes
    }

    /// Tail of the test the grid was computed under
    pub fn tail(&self) -> Tail {
        self.tail
    }

    /// Power level the sample size search aimed for
    pub fn target_power(&self) -> f64 {
        self.target_power
    }

    /// Grid dimensions: (effect sizes, significance levels, sample sizes)
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.effect_sizes.len(),
            self.alphas.len(),
            self.sample_sizes.len(),
        )
    }

    /// Power curve for one (effect size, significance level) pair
    pub fn curve(&self, r_idx: usize, alpha_idx: usize) -> &[f64] {
        let len = self.sample_sizes.len();
        let start = (r_idx * self.alphas.len() + alpha_idx) * len;
        &self.power[start..start + len]
    }

    /// Power at one grid cell
    pub fn power_at(&self, r_idx: usize, alpha_idx: usize, n_idx: usize) -> f64 {
        self.curve(r_idx, alpha_idx)[n_idx]
    }

    /// Target sample size for one (effect size, significance level) pair
    pub fn target_n(&self, r_idx: usize, alpha_idx: usize) -> usize {
        self.target_n[r_idx * self.alphas.len() + alpha_idx]
    }

    /// The full power grid, row-major over [r, alpha, n]
    pub fn power_grid(&self) -> &[f64] {
        &self.power
    }

    /// The full target sample size grid, row-major over [r, alpha]
    pub fn target_n_grid(&self) -> &[usize] {
        &self.target_n
    }
}
