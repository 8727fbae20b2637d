//! Positional mismatch fraction.

use crate::error::MetricError;

/// Fraction of mismatching aligned positions between `a` and `b`.
///
/// Characters are compared index-by-index over the overlapping prefix
/// (`0..min(m, n)`) and the mismatch count is divided by `max(m, n)`.
/// Positions past the shorter input's end are never compared, but the
/// longer denominator still dilutes the fraction. Equal-length inputs
/// compare every position.
///
/// Orientation: **0.0 means identical** overlapping prefixes — this metric
/// is a mismatch fraction, not a similarity. The composite scorer blends
/// the raw fraction, so a positive weight here rewards *disagreeing*
/// prefixes in the blended score.
///
/// # Errors
///
/// Returns [`MetricError::BothEmpty`] when both inputs are empty — the
/// normalizing max length is zero.
///
/// # Examples
///
/// ```
/// use textsim_core::hamming_similarity;
///
/// // 1 mismatch in a 4-char overlap, normalized by the longer length 5.
/// let frac = hamming_similarity("abcd", "abxde").expect("non-degenerate");
/// assert!((frac - 0.2).abs() < 1e-12);
/// ```
pub fn hamming_similarity(a: &str, b: &str) -> Result<f64, MetricError> {
    let m = a.chars().count();
    let n = b.chars().count();
    let max_len = m.max(n);
    if max_len == 0 {
        return Err(MetricError::BothEmpty);
    }

    // zip stops at the shorter sequence, which is exactly the overlap.
    let mismatches = a
        .chars()
        .zip(b.chars())
        .filter(|(ca, cb)| ca != cb)
        .count();

    Ok(mismatches as f64 / max_len as f64)
}
