//! Property-based tests for the analytical power calculation
//!
//! These tests pin down the mathematical properties the power function must
//! satisfy across a wide range of inputs, plus the end-to-end sweep
//! scenarios a caller relies on.

use approx::assert_abs_diff_eq;
use power_analysis::{power, power_curve, PowerSweep, Tail};
use proptest::prelude::*;

proptest! {
    // Property: power is a probability for every valid input
    #[test]
    fn prop_power_is_a_probability(
        r in -0.99..0.99f64,
        alpha in 0.001..0.5f64,
        n in 3u32..1000,
    ) {
        for tail in [Tail::Left, Tail::Right, Tail::Both] {
            let p = power(r, alpha, n as f64, tail).unwrap();
            prop_assert!((0.0..=1.0).contains(&p), "power {} out of [0, 1]", p);
        }
    }

    // Property: power never decreases as the sample grows
    #[test]
    fn prop_power_monotone_in_n(
        r in 0.05..0.95f64,
        alpha in 0.001..0.2f64,
    ) {
        let ns: Vec<f64> = (3..400).map(|n| n as f64).collect();
        let curve = power_curve(r, alpha, &ns, Tail::Right).unwrap();
        for pair in curve.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    // Property: a larger positive effect never lowers right-tailed power
    #[test]
    fn prop_power_monotone_in_effect_size(
        alpha in 0.001..0.2f64,
        n in 10u32..500,
    ) {
        let mut last = 0.0;
        for step in 1..20 {
            let r = step as f64 * 0.05;
            let p = power(r, alpha, n as f64, Tail::Right).unwrap();
            prop_assert!(p >= last);
            last = p;
        }
    }

    // Property: the two-sided critical value is larger, so two-sided power
    // cannot exceed right-tailed power for a positive effect
    #[test]
    fn prop_two_sided_power_never_exceeds_one_sided(
        r in 0.01..0.95f64,
        alpha in 0.001..0.2f64,
        n in 5u32..500,
    ) {
        let one_sided = power(r, alpha, n as f64, Tail::Right).unwrap();
        let two_sided = power(r, alpha, n as f64, Tail::Both).unwrap();
        prop_assert!(two_sided <= one_sided);
    }
}

#[test]
fn zero_effect_power_is_exactly_alpha() {
    for alpha in [0.05, 0.01, 0.001] {
        let p = power(0.0, alpha, 100.0, Tail::Right).unwrap();
        assert_abs_diff_eq!(p, alpha, epsilon = 1e-9);
    }
}

#[test]
fn invalid_tail_text_never_reaches_the_computation() {
    let err = "bottom".parse::<Tail>().unwrap_err();
    assert!(err.to_string().contains("bottom"));
}

#[test]
fn end_to_end_sweep_scenario() {
    let result = PowerSweep::new(vec![0.3, 0.5], vec![0.05, 0.01])
        .target_power(0.95)
        .n_max(200)
        .run()
        .unwrap();

    assert_eq!(result.shape(), (2, 2, 196));
    for &p in result.power_grid() {
        assert!((0.0..=1.0).contains(&p));
    }

    // r = 0.5 reaches the target with fewer samples than r = 0.3 at both
    // significance levels
    assert!(result.target_n(1, 0) < result.target_n(0, 0));
    assert!(result.target_n(1, 1) < result.target_n(0, 1));

    // The power at each pair's target N actually sits near the target
    for r_idx in 0..2 {
        for alpha_idx in 0..2 {
            let target_n = result.target_n(r_idx, alpha_idx);
            let n_idx = target_n - result.sample_sizes()[0];
            let p = result.power_at(r_idx, alpha_idx, n_idx);
            assert!(
                (p - 0.95).abs() < 0.05,
                "power {} at target N {} is far from the target",
                p,
                target_n
            );
        }
    }
}

#[test]
fn sweep_normalizes_input_order() {
    let a = PowerSweep::new(vec![0.3, 0.5], vec![0.01, 0.05]).run().unwrap();
    let b = PowerSweep::new(vec![0.5, 0.3], vec![0.05, 0.01]).run().unwrap();

    assert_eq!(a.alphas(), &[0.05, 0.01]);
    assert_eq!(a.effect_sizes(), &[0.3, 0.5]);
    assert_eq!(a.target_n_grid(), b.target_n_grid());
    for (&x, &y) in a.power_grid().iter().zip(b.power_grid().iter()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-15);
    }
}
