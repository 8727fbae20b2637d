//! Frequency-vector similarity.

use std::collections::{HashMap, HashSet};

use crate::error::MetricError;
use crate::tokenize::tokenize;

/// Cosine similarity of the two inputs' term-frequency vectors.
///
/// Both inputs run through the shared tokenizer keeping multiplicities.
/// The vector space is the combined vocabulary of both token lists; each
/// input's vector holds its count per vocabulary term. The result is the
/// dot product over the product of Euclidean norms: 1.0 for identical
/// token multisets, 0.0 for disjoint vocabularies. Counts are
/// non-negative, so the effective range is `[0, 1]`. Symmetric under
/// argument swap.
///
/// Vocabulary enumeration order is consistent within a call (both vectors
/// come from one iteration) but not across calls; the result does not
/// depend on it.
///
/// # Errors
///
/// Returns [`MetricError::ZeroNorm`] when either input yields no tokens —
/// its vector has zero magnitude and the norm product is zero.
///
/// # Examples
///
/// ```
/// use textsim_core::cosine_similarity;
///
/// // Vectors [1, 1, 0] and [1, 0, 1] over {hello, world, python}.
/// let sim = cosine_similarity("Hello, world!", "Hello, Python!").expect("tokens on both sides");
/// assert!((sim - 0.5).abs() < 1e-12);
/// ```
pub fn cosine_similarity(a: &str, b: &str) -> Result<f64, MetricError> {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return Err(MetricError::ZeroNorm);
    }

    let freq_a = frequencies(&tokens_a);
    let freq_b = frequencies(&tokens_b);
    let vocabulary: HashSet<&str> = freq_a.keys().chain(freq_b.keys()).copied().collect();

    let mut dot = 0.0;
    let mut norm_sq_a = 0.0;
    let mut norm_sq_b = 0.0;
    for term in vocabulary {
        let fa = f64::from(freq_a.get(term).copied().unwrap_or(0));
        let fb = f64::from(freq_b.get(term).copied().unwrap_or(0));
        dot += fa * fb;
        norm_sq_a += fa * fa;
        norm_sq_b += fb * fb;
    }

    Ok(dot / (norm_sq_a.sqrt() * norm_sq_b.sqrt()))
}

/// Count token multiplicities, borrowing the token storage.
fn frequencies(tokens: &[String]) -> HashMap<&str, u32> {
    let mut freq: HashMap<&str, u32> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }
    freq
}
