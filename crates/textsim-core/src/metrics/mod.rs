//! The four similarity metrics.
//!
//! # Overview
//!
//! Each metric is a pure function over two string slices, answering a
//! different question about how the inputs relate:
//!
//! - **Edit distance** (`levenshtein`): How many single-character edits
//!   separate the two sequences, normalized by the longer length?
//! - **Positional mismatch** (`hamming`): How many aligned positions
//!   disagree over the overlapping prefix?
//! - **Token-set overlap** (`jaccard`): How much of the combined word
//!   vocabulary is shared?
//! - **Frequency vectors** (`cosine`): How closely do the word-count
//!   vectors point in the same direction?
//!
//! The edit-distance and positional metrics compare raw `char` sequences;
//! the set and vector metrics run both inputs through
//! [`crate::tokenize::tokenize`] first. All four fail with a
//! [`crate::MetricError`] instead of dividing by zero on degenerate input.

pub mod cosine;
pub mod hamming;
pub mod jaccard;
pub mod levenshtein;

pub use cosine::cosine_similarity;
pub use hamming::hamming_similarity;
pub use jaccard::jaccard_similarity;
pub use levenshtein::levenshtein_similarity;
