//! Structured constraints produced from a free-text query.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Detected tendency toward cheaper or pricier items.
///
/// Used as a ranking bias, never as a hard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceIntent {
    /// The query asked for premium / expensive items.
    FavorExpensive,
    /// The query asked for cheap / budget items.
    FavorCheap,
}

impl fmt::Display for PriceIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceIntent::FavorExpensive => f.write_str("favor-expensive"),
            PriceIntent::FavorCheap => f.write_str("favor-cheap"),
        }
    }
}

/// Constraints interpreted from a raw query.
///
/// All bounds are inclusive. `min_price` and `max_price` may both be set
/// (a closed range), either alone, or neither. Keywords are lower-case,
/// non-empty tokens; duplicates are allowed and order does not matter for
/// matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub max_price: Option<f64>,
    pub min_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub keywords: Vec<String>,
    pub price_intent: Option<PriceIntent>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_price_intent(mut self, intent: PriceIntent) -> Self {
        self.price_intent = Some(intent);
        self
    }

    /// Add a keyword. The keyword is lower-cased; empty keywords are ignored.
    pub fn with_keyword<S: AsRef<str>>(mut self, keyword: S) -> Self {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if !keyword.is_empty() {
            self.keywords.push(keyword);
        }
        self
    }

    /// Whether `keyword` is one of the interpreted keywords.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// True when nothing at all was interpreted.
    pub fn is_empty(&self) -> bool {
        self.max_price.is_none()
            && self.min_price.is_none()
            && self.min_rating.is_none()
            && self.keywords.is_empty()
            && self.price_intent.is_none()
    }
}
