//! name-features - string-similarity feature vectors for name pairs
//!
//! Computes four measures per name pair, intended as classifier input for
//! telling matching from non-matching names:
//!
//! - n-gram boundary distance
//! - Levenshtein edit distance
//! - longest common substring ratio
//! - longest common subsequence ratio
//!
//! The measures are pure and case-sensitive. The `batch` module drives them
//! over a delimited pair file, normalizing case and skipping unusable records.

pub mod algorithms;
pub mod batch;
pub mod error;
pub mod features;

pub use algorithms::normalize::NormalizationMode;
pub use algorithms::{
    edit_distance, lcs_ratio, lcss_ratio, ngram_distance, Distance, Levenshtein,
    LongestCommonSubsequence, LongestCommonSubstring, Ngram, Ratio,
};
pub use batch::{BatchConfig, BatchSummary, NamePair};
pub use error::{BatchError, FeatureError};
pub use features::{FeatureVector, LabeledRow};
