use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MetricError;
use crate::metrics::{
    cosine_similarity, hamming_similarity, jaccard_similarity, levenshtein_similarity,
};

/// Default decision threshold used by [`ScoreConfig::default`].
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Configurable per-metric weights for the composite formula:
///
/// `score = (w_h*H + w_l*L + w_c*C + w_j*J) / 4`
///
/// Weights multiply the raw metric values; the divisor stays 4 regardless
/// of the weights, so they are scale factors, not a normalized mixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub hamming: f64,
    pub levenshtein: f64,
    pub cosine: f64,
    pub jaccard: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            hamming: 1.0,
            levenshtein: 1.0,
            cosine: 1.0,
            jaccard: 1.0,
        }
    }
}

/// Scoring configuration, passed by value on every call.
///
/// `ScoreConfig::default()` builds a fresh value each time (threshold 0.4,
/// unit weights); no state is shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Strict cutoff: the verdict is positive only when `score > threshold`.
    /// A score equal to the threshold is a negative verdict.
    pub threshold: f64,
    pub weights: ScoreWeights,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            weights: ScoreWeights::default(),
        }
    }
}

/// Full scoring breakdown for one input pair.
///
/// The raw (unweighted) metric values are kept separate so consumers can
/// show per-metric explanations next to the blended score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Positional mismatch fraction (0.0 = identical overlapping prefixes).
    pub hamming: f64,
    /// Normalized edit-distance similarity.
    pub levenshtein: f64,
    /// Term-frequency cosine similarity.
    pub cosine: f64,
    /// Token-set Jaccard similarity.
    pub jaccard: f64,
    /// Weighted composite: mean of the four weighted metric values.
    pub score: f64,
    /// `score > threshold`, strictly.
    pub matched: bool,
}

/// Score `a` against `b` and apply the threshold verdict.
///
/// The metrics are evaluated in the order hamming, levenshtein, cosine,
/// jaccard; the order does not affect the mean, but it decides which
/// degenerate-input error surfaces first. The first failure aborts the
/// whole computation — no partial score is ever produced.
///
/// # Errors
///
/// Propagates the first [`MetricError`] raised by any metric.
///
/// # Examples
///
/// ```
/// use textsim_core::{ScoreConfig, score};
///
/// let report = score("Hello, world!", "Hello, Python!", ScoreConfig::default())
///     .expect("both inputs have word characters");
/// assert!(report.matched);
/// assert!((report.jaccard - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn score(a: &str, b: &str, config: ScoreConfig) -> Result<ScoreReport, MetricError> {
    let hamming = hamming_similarity(a, b)?;
    let levenshtein = levenshtein_similarity(a, b)?;
    let cosine = cosine_similarity(a, b)?;
    let jaccard = jaccard_similarity(a, b)?;

    let w = config.weights;
    let composite =
        (w.hamming * hamming + w.levenshtein * levenshtein + w.cosine * cosine + w.jaccard * jaccard)
            / 4.0;
    let matched = composite > config.threshold;
    trace!(
        score = composite,
        threshold = config.threshold,
        matched,
        "composite score computed"
    );

    Ok(ScoreReport {
        hamming,
        levenshtein,
        cosine,
        jaccard,
        score: composite,
        matched,
    })
}
