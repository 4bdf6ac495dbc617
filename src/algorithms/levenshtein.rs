//! Levenshtein (edit) distance implementation
//!
//! Minimum number of single-character insertions, deletions or substitutions
//! turning one string into the other. Unicode-aware: operates on `char`s.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(m*n), the full table is built per call

use super::Distance;
use crate::error::FeatureError;

const METRIC: &str = "edit";

/// Levenshtein distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Distance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> Result<usize, FeatureError> {
        Ok(edit_distance(a, b))
    }

    fn name(&self) -> &'static str {
        METRIC
    }
}

/// Levenshtein distance between two strings.
///
/// Empty strings are valid: the distance is the other string's length.
///
/// # Examples
/// ```
/// use name_features::algorithms::levenshtein::edit_distance;
///
/// assert_eq!(edit_distance("KITTEN", "SITTING"), 3);
/// assert_eq!(edit_distance("", "ABC"), 3);
/// ```
#[must_use]
pub fn edit_distance(word1: &str, word2: &str) -> usize {
    let a: Vec<char> = word1.chars().collect();
    let b: Vec<char> = word2.chars().collect();
    let (m, n) = (a.len(), b.len());

    // dp[i][j] = distance between the first i chars of a and the first j of b
    let mut dp: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 0..m {
        for j in 0..n {
            dp[i + 1][j + 1] = if a[i] == b[j] {
                dp[i][j]
            } else {
                let substitution = dp[i][j];
                let deletion = dp[i][j + 1];
                let insertion = dp[i + 1][j];
                1 + substitution.min(deletion).min(insertion)
            };
        }
    }

    dp[m][n]
}
