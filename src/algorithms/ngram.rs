//! N-gram boundary distance
//!
//! Counts the boundary-marked character bigrams the two strings do not share.
//! Each string becomes a start marker `#c`, its inner bigrams and an end
//! marker `c#`. A single-character string yields only its start marker.
//!
//! # Complexity
//! - Time: O(m+n) to build the bigram sequences and the match profile
//! - Space: O(m+n)

use super::Distance;
use crate::error::FeatureError;
use ahash::AHashMap;
use smallvec::SmallVec;

/// Marker placed before the first and after the last character.
pub const BOUNDARY_MARKER: char = '#';

const METRIC: &str = "ngram";

/// Bigram sequences for typical name lengths stay on the stack.
pub type Bigrams = SmallVec<[String; 16]>;

/// N-gram boundary distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ngram;

impl Ngram {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Distance for Ngram {
    fn distance(&self, a: &str, b: &str) -> Result<usize, FeatureError> {
        ngram_distance(a, b)
    }

    fn name(&self) -> &'static str {
        METRIC
    }
}

/// Build the boundary-augmented bigram sequence of `s`, in order.
///
/// Returns an empty sequence for an empty string.
///
/// ```
/// use name_features::algorithms::ngram::boundary_bigrams;
///
/// assert_eq!(boundary_bigrams("CAT").as_slice(), ["#C", "CA", "AT", "T#"]);
/// // No end marker for a single character
/// assert_eq!(boundary_bigrams("A").as_slice(), ["#A"]);
/// ```
#[must_use]
pub fn boundary_bigrams(s: &str) -> Bigrams {
    let chars: SmallVec<[char; 32]> = s.chars().collect();
    let mut bigrams = Bigrams::new();

    let Some(&first) = chars.first() else {
        return bigrams;
    };
    bigrams.push([BOUNDARY_MARKER, first].iter().collect());

    if chars.len() > 1 {
        bigrams.extend(chars.windows(2).map(|w| w.iter().collect::<String>()));
        let last = chars[chars.len() - 1];
        bigrams.push([last, BOUNDARY_MARKER].iter().collect());
    }

    bigrams
}

/// Number of (a, b) element pairs with equal values.
///
/// Repeated bigrams match once per occurrence pair, so this can exceed
/// either sequence's length.
#[must_use]
pub fn pairwise_matches(a: &[String], b: &[String]) -> usize {
    let mut profile: AHashMap<&str, usize> = AHashMap::with_capacity(b.len());
    for gram in b {
        *profile.entry(gram.as_str()).or_insert(0) += 1;
    }

    a.iter()
        .map(|gram| profile.get(gram.as_str()).copied().unwrap_or(0))
        .sum()
}

/// Calculate the n-gram boundary distance: `|A| + |B| - 2 * matches`,
/// floored at 0.
///
/// Both strings must be non-empty.
///
/// ```
/// use name_features::algorithms::ngram::ngram_distance;
///
/// assert_eq!(ngram_distance("CAT", "CATS"), Ok(3));
/// assert!(ngram_distance("", "CAT").is_err());
/// ```
pub fn ngram_distance(a: &str, b: &str) -> Result<usize, FeatureError> {
    if a.is_empty() || b.is_empty() {
        return Err(FeatureError::EmptyInput { metric: METRIC });
    }

    let a_grams = boundary_bigrams(a);
    let b_grams = boundary_bigrams(b);
    let matches = pairwise_matches(&a_grams, &b_grams);

    Ok((a_grams.len() + b_grams.len()).saturating_sub(2 * matches))
}
