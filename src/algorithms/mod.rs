//! Core string similarity measures
//!
//! Each measure is implemented as a standalone function for composability,
//! plus a trait-based interface so callers can treat them uniformly.

pub mod lcs;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;

pub use lcs::*;
pub use levenshtein::*;
pub use ngram::*;

use crate::error::FeatureError;

/// Trait for measures that return an integer distance.
/// 0 means the inputs are indistinguishable to the measure.
pub trait Distance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> Result<usize, FeatureError>;

    /// Name of the measure, used as the output column name
    fn name(&self) -> &'static str;
}

/// Trait for measures that return a ratio between 0.0 (nothing shared)
/// and 1.0 (identical).
pub trait Ratio: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> Result<f64, FeatureError>;

    /// Name of the measure, used as the output column name
    fn name(&self) -> &'static str;
}

/// Average of two character counts, rejecting the degenerate 0/0 case.
#[inline]
pub(crate) fn average_length(m: usize, n: usize, metric: &'static str) -> Result<f64, FeatureError> {
    if m == 0 && n == 0 {
        return Err(FeatureError::ZeroAverageLength { metric });
    }
    Ok((m + n) as f64 / 2.0)
}
