//! Property tests for the metric algebra: symmetry, output ranges, and the
//! impossibility of a positive verdict past a saturating threshold.

use proptest::prelude::*;
use textsim_core::{
    ScoreConfig, ScoreWeights, cosine_similarity, hamming_similarity, jaccard_similarity,
    levenshtein_similarity, score,
};

/// Inputs guaranteed to carry at least one token.
fn worded() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,8}( [a-z0-9_]{1,8}){0,4}"
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    // Symmetry holds on the Result, not just the Ok value: the degenerate
    // cases error identically under argument swap.
    #[test]
    fn levenshtein_is_symmetric(a in ".{0,24}", b in ".{0,24}") {
        prop_assert_eq!(levenshtein_similarity(&a, &b), levenshtein_similarity(&b, &a));
    }

    #[test]
    fn jaccard_is_symmetric(a in ".{0,24}", b in ".{0,24}") {
        prop_assert_eq!(jaccard_similarity(&a, &b), jaccard_similarity(&b, &a));
    }

    #[test]
    fn cosine_is_symmetric_up_to_rounding(a in ".{0,24}", b in ".{0,24}") {
        // Summation order differs between the two calls (hash iteration),
        // so allow float rounding slack on the Ok values.
        match (cosine_similarity(&a, &b), cosine_similarity(&b, &a)) {
            (Ok(x), Ok(y)) => prop_assert!((x - y).abs() < 1e-9),
            (lhs, rhs) => prop_assert_eq!(lhs, rhs),
        }
    }

    #[test]
    fn successful_metrics_stay_in_unit_range(a in ".{0,24}", b in ".{0,24}") {
        for value in [
            hamming_similarity(&a, &b),
            levenshtein_similarity(&a, &b),
            cosine_similarity(&a, &b),
            jaccard_similarity(&a, &b),
        ]
        .into_iter()
        .flatten()
        {
            prop_assert!((0.0..=1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn equal_worded_inputs_hit_the_extremes(a in worded()) {
        prop_assert!((levenshtein_similarity(&a, &a).expect("non-empty") - 1.0).abs() < 1e-12);
        prop_assert!((jaccard_similarity(&a, &a).expect("worded") - 1.0).abs() < 1e-12);
        prop_assert!((cosine_similarity(&a, &a).expect("worded") - 1.0).abs() < 1e-9);
        prop_assert!(hamming_similarity(&a, &a).expect("non-empty").abs() < 1e-12);
    }

    #[test]
    fn saturating_threshold_never_matches(a in worded(), b in worded()) {
        let config = ScoreConfig { threshold: 1.1, weights: ScoreWeights::default() };
        let report = score(&a, &b, config).expect("worded inputs");
        prop_assert!(!report.matched);
    }

    #[test]
    fn composite_equals_weighted_mean_of_breakdown(
        a in worded(),
        b in worded(),
        wh in 0.0f64..2.0,
        wl in 0.0f64..2.0,
        wc in 0.0f64..2.0,
        wj in 0.0f64..2.0,
    ) {
        let config = ScoreConfig {
            threshold: 0.4,
            weights: ScoreWeights { hamming: wh, levenshtein: wl, cosine: wc, jaccard: wj },
        };
        let report = score(&a, &b, config).expect("worded inputs");
        let by_hand = (wh * report.hamming
            + wl * report.levenshtein
            + wc * report.cosine
            + wj * report.jaccard)
            / 4.0;
        prop_assert!((report.score - by_hand).abs() < 1e-12);
    }
}
