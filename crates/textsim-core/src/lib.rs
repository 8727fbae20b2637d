#![forbid(unsafe_code)]
//! textsim-core library.
//!
//! Four similarity metrics over Unicode text — normalized edit distance,
//! positional mismatch fraction, token-set Jaccard, and term-frequency
//! cosine — plus a weighted composite scorer that blends them into a single
//! score and a threshold verdict.
//!
//! All functions are pure and synchronous; every piece of working data is
//! local to the call, so concurrent callers need no coordination.
//!
//! # Conventions
//!
//! - **Errors**: metric and scoring functions return `Result` with
//!   [`MetricError`]. Degenerate inputs (zero denominators) fail eagerly;
//!   there are no sentinel fallbacks.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `error!`,
//!   `debug!`, `trace!`).

pub mod error;
pub mod metrics;
pub mod score;
pub mod tokenize;

pub use error::MetricError;
pub use metrics::{
    cosine_similarity, hamming_similarity, jaccard_similarity, levenshtein_similarity,
};
pub use score::{ScoreConfig, ScoreReport, ScoreWeights, score};
pub use tokenize::tokenize;
