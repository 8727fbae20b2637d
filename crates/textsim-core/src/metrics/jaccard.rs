//! Token-set overlap.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::MetricError;
use crate::tokenize::tokenize;

/// Jaccard similarity of the two inputs' token sets: `|A ∩ B| / |A ∪ B|`.
///
/// Both inputs run through the shared tokenizer and collapse to sets, so
/// repeated words count once. The result is in `[0, 1]`: 1.0 for identical
/// non-empty sets, 0.0 for disjoint vocabularies. Symmetric under argument
/// swap.
///
/// # Errors
///
/// Returns [`MetricError::EmptyUnion`] when neither input yields a token —
/// the union denominator is zero.
///
/// # Examples
///
/// ```
/// use textsim_core::jaccard_similarity;
///
/// // {hello, world} vs {hello, python}: intersection 1, union 3.
/// let sim = jaccard_similarity("Hello, world!", "Hello, Python!").expect("tokens on both sides");
/// assert!((sim - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn jaccard_similarity(a: &str, b: &str) -> Result<f64, MetricError> {
    let set_a: HashSet<String> = tokenize(a).into_iter().collect();
    let set_b: HashSet<String> = tokenize(b).into_iter().collect();
    if set_a.is_empty() && set_b.is_empty() {
        return Err(MetricError::EmptyUnion);
    }

    Ok(jaccard(&set_a, &set_b))
}

/// Generic Jaccard similarity over pre-built sets.
///
/// The caller guarantees at least one set is non-empty, so the union size
/// is always positive.
#[must_use]
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count() as f64;
    let union_size = a.union(b).count() as f64;
    intersection / union_size
}
