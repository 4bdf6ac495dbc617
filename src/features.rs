//! Feature vectors
//!
//! One `FeatureVector` holds all four measures for a single name pair, in
//! output column order.

use crate::algorithms::{edit_distance, lcs_ratio, lcss_ratio, ngram_distance};
use crate::error::FeatureError;
use serde::Serialize;

/// The four similarity measures for one name pair
///
/// Ratios are `f64` and written with shortest round-trip formatting, so
/// `2/6.5` appears as `0.3076923076923077` rather than a single-precision
/// `0.30769232`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    /// N-gram boundary distance
    pub ngram: usize,
    /// Levenshtein edit distance
    pub edit: usize,
    /// Longest common substring over average length
    pub lcs: f64,
    /// Longest common subsequence over average length
    pub lcss: f64,
}

impl FeatureVector {
    /// Column names, in output order
    pub const NAMES: [&'static str; 4] = ["ngram", "edit", "lcs", "lcss"];

    /// Compute all four measures for `a` and `b`.
    ///
    /// ```
    /// use name_features::FeatureVector;
    ///
    /// let v = FeatureVector::compute("CAT", "CATS").unwrap();
    /// assert_eq!((v.ngram, v.edit), (3, 1));
    /// ```
    pub fn compute(a: &str, b: &str) -> Result<Self, FeatureError> {
        Ok(Self {
            ngram: ngram_distance(a, b)?,
            edit: edit_distance(a, b),
            lcs: lcs_ratio(a, b)?,
            lcss: lcss_ratio(a, b)?,
        })
    }
}

/// A feature vector tagged with the class label of its batch.
///
/// Serializes to `ngram,edit,lcs,lcss,label`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledRow<'a> {
    pub ngram: usize,
    pub edit: usize,
    pub lcs: f64,
    pub lcss: f64,
    pub label: &'a str,
}

impl<'a> LabeledRow<'a> {
    #[must_use]
    pub fn new(features: &FeatureVector, label: &'a str) -> Self {
        Self {
            ngram: features.ngram,
            edit: features.edit,
            lcs: features.lcs,
            lcss: features.lcss,
            label,
        }
    }
}
