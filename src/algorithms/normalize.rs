//! Case normalization applied to name fields before comparison
//!
//! The similarity measures are case-sensitive; callers wanting
//! case-insensitive features normalize both fields first.

use serde::{Deserialize, Serialize};

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMode {
    /// Leave the input untouched
    None,
    /// Convert to uppercase
    #[default]
    Uppercase,
    /// Convert to lowercase
    Lowercase,
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::None => s.to_owned(),
        NormalizationMode::Uppercase => s.to_uppercase(),
        NormalizationMode::Lowercase => s.to_lowercase(),
    }
}

/// Normalize both strings according to the specified mode
#[must_use]
pub fn normalize_pair(a: &str, b: &str, mode: NormalizationMode) -> (String, String) {
    (normalize_string(a, mode), normalize_string(b, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase() {
        assert_eq!(
            normalize_string("McDonald", NormalizationMode::Uppercase),
            "MCDONALD"
        );
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(
            normalize_string("O'Brien", NormalizationMode::Lowercase),
            "o'brien"
        );
    }

    #[test]
    fn test_none_keeps_input() {
        assert_eq!(normalize_string("MiXeD", NormalizationMode::None), "MiXeD");
    }

    #[test]
    fn test_default_is_uppercase() {
        assert_eq!(NormalizationMode::default(), NormalizationMode::Uppercase);
    }

    #[test]
    fn test_normalize_pair() {
        let (a, b) = normalize_pair("José", "jose", NormalizationMode::Uppercase);
        assert_eq!(a, "JOSÉ");
        assert_eq!(b, "JOSE");
    }
}
