//! Property-based tests for Wilson score intervals
//!
//! These tests check the ordering, narrowing, widening and symmetry
//! properties over a wide range of counts and confidence levels.

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use proportion_confidence::{ProportionConfidenceInterval, WilsonScoreCI};

    /// `(successes, trials)` with `0 <= successes <= trials`
    fn counts(max_trials: u64) -> impl Strategy<Value = (u64, u64)> {
        (1u64..=max_trials).prop_flat_map(|n| (0..=n, Just(n)))
    }

    proptest! {
        // Property: 0 <= lower <= proportion <= upper <= 1
        #[test]
        fn prop_bounds_ordering(
            (x, n) in counts(1_000_000_000),
            level in 0.01f64..0.999_999,
        ) {
            let result = WilsonScoreCI::new(level).unwrap().interval(x, n).unwrap();

            prop_assert!(result.lower_bound >= 0.0);
            prop_assert!(result.lower_bound <= result.proportion,
                "lower {} > proportion {}", result.lower_bound, result.proportion);
            prop_assert!(result.proportion <= result.upper_bound,
                "proportion {} > upper {}", result.proportion, result.upper_bound);
            prop_assert!(result.upper_bound <= 1.0);
        }

        // Property: scaling both counts by a larger factor narrows the interval
        #[test]
        fn prop_scaling_narrows(
            (x, n) in counts(1_000),
            k in 1u64..48,
            level in 0.5f64..0.999,
        ) {
            let wilson = WilsonScoreCI::new(level).unwrap();
            let coarse = wilson.interval(x * k, n * k).unwrap();
            let fine = wilson.interval(x * (k + 1), n * (k + 1)).unwrap();

            prop_assert!(fine.width() < coarse.width(),
                "k={} width {} not below {}", k + 1, fine.width(), coarse.width());
        }

        // Property: a higher confidence level widens the interval
        #[test]
        fn prop_level_widens(
            (x, n) in counts(10_000),
            low in 0.05f64..0.9,
            step in 0.01f64..0.09,
        ) {
            let narrow = WilsonScoreCI::new(low).unwrap().interval(x, n).unwrap();
            let wide = WilsonScoreCI::new(low + step).unwrap().interval(x, n).unwrap();

            prop_assert!(wide.width() > narrow.width());
            prop_assert!(wide.lower_bound <= narrow.lower_bound);
            prop_assert!(wide.upper_bound >= narrow.upper_bound);
        }

        // Property: swapping successes and failures mirrors the bounds
        #[test]
        fn prop_success_failure_symmetry(
            (x, n) in counts(1_000_000),
            level in 0.5f64..0.9999,
        ) {
            let wilson = WilsonScoreCI::new(level).unwrap();
            let a = wilson.interval(x, n).unwrap();
            let b = wilson.interval(n - x, n).unwrap();

            prop_assert!((a.upper_bound - (1.0 - b.lower_bound)).abs() < 1e-9);
        }

        // Property: the observed proportion is always inside its own interval
        #[test]
        fn prop_contains_proportion((x, n) in counts(100_000)) {
            let result = WilsonScoreCI::default().interval(x, n).unwrap();
            prop_assert!(result.contains(result.proportion));
            prop_assert!(result.interval().contains(result.proportion));
        }

        // Property: trait and inherent entry points agree
        #[test]
        fn prop_trait_matches_inherent((x, n) in counts(10_000)) {
            let wilson = WilsonScoreCI::default();
            let via_trait = ProportionConfidenceInterval::interval(&wilson, x, n).unwrap();
            prop_assert_eq!(via_trait, wilson.interval(x, n).unwrap());
        }
    }
}
