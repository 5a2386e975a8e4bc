//! Configuration for relevance scoring and ranking.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{FacetaError, Result};

/// Coefficients of the scoring function and the relevance threshold.
///
/// The defaults reproduce the reference catalog behavior exactly. Every
/// field may be overridden from a JSON file; missing fields keep their
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Added once per keyword found in the item text.
    pub keyword_weight: f64,

    /// Added when the item's category is named as a keyword.
    pub category_hint_weight: f64,

    /// Added when the item is at or below the interpreted price ceiling.
    pub max_price_weight: f64,

    /// Added when the item is at or above the interpreted price floor.
    pub min_price_weight: f64,

    /// Added when the item is at or above the interpreted rating floor.
    pub min_rating_weight: f64,

    /// Multiplier of the normalized price position under a price intent.
    pub price_intent_weight: f64,

    /// Multiplier of the item rating, always applied.
    pub rating_bias: f64,

    /// Multiplier of the item price, always subtracted.
    pub price_penalty: f64,

    /// Items scoring at or below this value are considered irrelevant.
    pub relevance_threshold: f64,

    /// Lower bound of the price span used to normalize price positions.
    pub min_price_span: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 2.5,
            category_hint_weight: 2.5,
            max_price_weight: 2.0,
            min_price_weight: 1.5,
            min_rating_weight: 2.0,
            price_intent_weight: 3.0,
            rating_bias: 0.2,
            price_penalty: 0.01,
            relevance_threshold: 0.5,
            min_price_span: 1.0,
        }
    }
}

impl RankingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read ranking config {}", path.display()))?;
        Self::from_json(&input)
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(input: &str) -> Result<Self> {
        let config: RankingConfig = serde_json::from_str(input)
            .map_err(|e| FacetaError::config(format!("Failed to parse ranking config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every coefficient is finite and the price span is positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("keyword_weight", self.keyword_weight),
            ("category_hint_weight", self.category_hint_weight),
            ("max_price_weight", self.max_price_weight),
            ("min_price_weight", self.min_price_weight),
            ("min_rating_weight", self.min_rating_weight),
            ("price_intent_weight", self.price_intent_weight),
            ("rating_bias", self.rating_bias),
            ("price_penalty", self.price_penalty),
            ("relevance_threshold", self.relevance_threshold),
            ("min_price_span", self.min_price_span),
        ];

        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(FacetaError::config(format!("{name} must be finite, got {value}")));
        }
        if self.min_price_span <= 0.0 {
            return Err(FacetaError::config(format!(
                "min_price_span must be positive, got {}",
                self.min_price_span
            )));
        }
        Ok(())
    }

    /// Set the relevance threshold.
    pub fn with_relevance_threshold(mut self, threshold: f64) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    /// Set the per-keyword weight.
    pub fn with_keyword_weight(mut self, weight: f64) -> Self {
        self.keyword_weight = weight;
        self
    }

    /// Set the price intent multiplier.
    pub fn with_price_intent_weight(mut self, weight: f64) -> Self {
        self.price_intent_weight = weight;
        self
    }

    /// Set the minimum price span.
    pub fn with_min_price_span(mut self, span: f64) -> Self {
        self.min_price_span = span;
        self
    }
}
