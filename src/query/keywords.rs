//! Keyword extraction.
//!
//! Turns a raw query into the normalized tokens that are matched against
//! item text:
//!
//! 1. lower-case the query
//! 2. replace every character that is not `a-z`, `0-9`, whitespace or `-`
//!    with a space
//! 3. split on whitespace and strip hyphens from each token
//! 4. drop empty tokens, stop words and pure numbers
//!
//! # Examples
//!
//! ```
//! use faceta::query::keywords::extract_keywords;
//!
//! assert_eq!(extract_keywords("Show me high-end Watches under $200"), vec!["watches"]);
//! ```

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

use crate::query::intent::normalized_intent_terms;

/// Function words and trigger words that never count as keywords.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "with", "and", "for", "under", "below", "less", "than", "between", "over",
    "above", "at", "least", "most", "good", "great", "high", "reviews", "review", "stars", "star",
    "me", "show", "find", "in", "on", "of", "to",
];

/// Stop words plus every price-intent term, so that intent words do not
/// also score as keyword matches.
pub static STOP_WORDS: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_STOP_WORDS
        .iter()
        .map(|&word| word.to_string())
        .chain(normalized_intent_terms())
        .collect()
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("number pattern is valid"));

/// Whether `token` is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Whether `token` is a pure integer or decimal number.
pub fn is_number(token: &str) -> bool {
    NUMBER.is_match(token)
}

/// Lower-case `query` and blank out every character outside `[a-z0-9\s-]`.
pub fn normalize(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Extract keywords from a raw query, in query order.
pub fn extract_keywords(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(|token| token.replace('-', ""))
        .filter(|token| !token.is_empty() && !is_stop_word(token) && !is_number(token))
        .collect()
}
