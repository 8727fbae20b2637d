//! Weighted composite scoring over the four metrics.

pub mod composite;

pub use composite::{DEFAULT_THRESHOLD, ScoreConfig, ScoreReport, ScoreWeights, score};
