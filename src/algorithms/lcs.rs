//! Longest common substring and subsequence ratios
//!
//! Both measures divide a common-run length by the average length of the two
//! inputs, so identical strings score 1.0 and strings sharing nothing 0.0.
//!
//! - Substring: the longest *contiguous* run present in both strings.
//! - Subsequence: the longest run of characters appearing in both strings in
//!   the same order, not necessarily adjacent.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(m*n), a fresh table per call

use super::{average_length, Ratio};
use crate::error::FeatureError;

const SUBSTRING_METRIC: &str = "lcs";
const SUBSEQUENCE_METRIC: &str = "lcss";

/// Longest-common-substring ratio calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestCommonSubstring;

impl Ratio for LongestCommonSubstring {
    fn ratio(&self, a: &str, b: &str) -> Result<f64, FeatureError> {
        lcs_ratio(a, b)
    }

    fn name(&self) -> &'static str {
        SUBSTRING_METRIC
    }
}

/// Longest-common-subsequence ratio calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestCommonSubsequence;

impl Ratio for LongestCommonSubsequence {
    fn ratio(&self, a: &str, b: &str) -> Result<f64, FeatureError> {
        lcss_ratio(a, b)
    }

    fn name(&self) -> &'static str {
        SUBSEQUENCE_METRIC
    }
}

/// Length of the longest contiguous run shared by `a` and `b`.
///
/// The table is `m x n`; cells on the first row or column start a new run.
#[must_use]
pub fn longest_common_substring_length(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut dp: Vec<Vec<usize>> = vec![vec![0; n]; m];
    let mut max_len = 0;

    for i in 0..m {
        for j in 0..n {
            if a[i] == b[j] {
                dp[i][j] = if i == 0 || j == 0 { 1 } else { dp[i - 1][j - 1] + 1 };
                max_len = max_len.max(dp[i][j]);
            }
        }
    }

    max_len
}

/// Length of the longest common subsequence of `a` and `b`.
#[must_use]
pub fn longest_common_subsequence_length(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut dp: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                1 + dp[i - 1][j - 1]
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    dp[m][n]
}

/// Longest common substring length divided by the average input length.
///
/// Both strings must be non-empty.
///
/// ```
/// use name_features::algorithms::lcs::lcs_ratio;
///
/// // "AB" (or "BD") over an average length of 6.5
/// let r = lcs_ratio("ABCBDAB", "BDCABA").unwrap();
/// assert!((r - 2.0 / 6.5).abs() < 1e-9);
/// ```
pub fn lcs_ratio(a: &str, b: &str) -> Result<f64, FeatureError> {
    if a.is_empty() || b.is_empty() {
        return Err(FeatureError::EmptyInput { metric: SUBSTRING_METRIC });
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let avg = average_length(a_chars.len(), b_chars.len(), SUBSTRING_METRIC)?;

    Ok(longest_common_substring_length(&a_chars, &b_chars) as f64 / avg)
}

/// Longest common subsequence length divided by the average input length.
///
/// One empty input yields 0.0; two empty inputs are an error since the
/// average length is zero.
///
/// ```
/// use name_features::algorithms::lcs::lcss_ratio;
///
/// let r = lcss_ratio("ABCBDAB", "BDCABA").unwrap();
/// assert!((r - 4.0 / 6.5).abs() < 1e-9);
/// ```
pub fn lcss_ratio(a: &str, b: &str) -> Result<f64, FeatureError> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let avg = average_length(a_chars.len(), b_chars.len(), SUBSEQUENCE_METRIC)?;

    Ok(longest_common_subsequence_length(&a_chars, &b_chars) as f64 / avg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_longest_common_substring_length() {
        assert_eq!(longest_common_substring_length(&chars("ABCDEF"), &chars("ZBCDF")), 3); // BCD
        assert_eq!(longest_common_substring_length(&chars("ABCBDAB"), &chars("BDCABA")), 2);
        assert_eq!(longest_common_substring_length(&chars("ABC"), &chars("XYZ")), 0);
        // Run touching the first column of the table
        assert_eq!(longest_common_substring_length(&chars("XAB"), &chars("ABY")), 2);
    }

    #[test]
    fn test_longest_common_subsequence_length() {
        assert_eq!(longest_common_subsequence_length(&chars("ABCDGH"), &chars("AEDFHR")), 3); // ADH
        assert_eq!(longest_common_subsequence_length(&chars("AGGTAB"), &chars("GXTXAYB")), 4); // GTAB
        assert_eq!(longest_common_subsequence_length(&chars("ABCBDAB"), &chars("BDCABA")), 4);
        assert_eq!(longest_common_subsequence_length(&chars(""), &chars("ABC")), 0);
    }

    #[test]
    fn test_ratios_known_values() {
        assert_close(lcs_ratio("ABCBDAB", "BDCABA").unwrap(), 0.307_692_307_692);
        assert_close(lcss_ratio("ABCBDAB", "BDCABA").unwrap(), 0.615_384_615_384);
        assert_close(lcs_ratio("JOHNSON", "JONSON").unwrap(), 4.0 / 6.5);
        assert_close(lcss_ratio("JOHNSON", "JONSON").unwrap(), 6.0 / 6.5);
    }

    #[test]
    fn test_ratios_identity() {
        for s in ["A", "SMITH", "MACDONALD"] {
            assert_eq!(lcs_ratio(s, s), Ok(1.0));
            assert_eq!(lcss_ratio(s, s), Ok(1.0));
        }
    }

    #[test]
    fn test_ratios_symmetry_and_bounds() {
        let words = ["A", "AB", "JOHN", "JON", "JONATHAN", "NATHAN", "ABCBDAB", "BDCABA"];
        for a in words {
            for b in words {
                let lcs = lcs_ratio(a, b).unwrap();
                let lcss = lcss_ratio(a, b).unwrap();
                assert_eq!(lcs, lcs_ratio(b, a).unwrap(), "{a} / {b}");
                assert_eq!(lcss, lcss_ratio(b, a).unwrap(), "{a} / {b}");
                assert!((0.0..=1.0).contains(&lcs), "{a} / {b}");
                assert!((0.0..=1.0).contains(&lcss), "{a} / {b}");
                assert!(lcs <= lcss, "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_substring_rejects_empty_input() {
        let err = FeatureError::EmptyInput { metric: "lcs" };
        assert_eq!(lcs_ratio("", "ABC"), Err(err.clone()));
        assert_eq!(lcs_ratio("ABC", ""), Err(err.clone()));
        assert_eq!(lcs_ratio("", ""), Err(err));
    }

    #[test]
    fn test_subsequence_empty_input() {
        assert_eq!(lcss_ratio("", "ABC"), Ok(0.0));
        assert_eq!(lcss_ratio("", ""), Err(FeatureError::ZeroAverageLength { metric: "lcss" }));
    }
}
