//! Relevance scoring of catalog items against interpreted constraints.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::LazyLock;

use ahash::AHashSet;
use serde::Serialize;

use crate::catalog::Item;
use crate::query::{ConstraintSet, PriceIntent};
use crate::ranking::config::RankingConfig;

/// Category names that boost items of exactly that category when they
/// appear as a keyword.
pub static CATEGORY_HINTS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    ["shoes", "electronics", "apparel", "accessories", "watches", "bags"]
        .into_iter()
        .collect()
});

/// Per-term contributions to an item's score.
///
/// Every term is already weighted; [`ScoreBreakdown::total`] is their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Number of keywords found in the item text.
    pub keyword_matches: usize,
    pub keywords: f64,
    pub category_hint: f64,
    pub max_price: f64,
    pub min_price: f64,
    pub min_rating: f64,
    pub price_intent: f64,
    pub rating_bias: f64,
    /// Always zero or negative.
    pub price_penalty: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.keywords
            + self.category_hint
            + self.max_price
            + self.min_price
            + self.min_rating
            + self.price_intent
            + self.rating_bias
            + self.price_penalty
    }
}

/// Trait for item scorers.
pub trait Scorer: Debug + Send + Sync {
    /// Score `item` against `constraints`.
    ///
    /// `price_position` is the item's price normalized to `[0, 1]` over the
    /// current candidate set.
    fn score(
        &self,
        item: &Item,
        constraints: &ConstraintSet,
        price_position: f64,
    ) -> ScoreBreakdown;

    /// Get the name of this scorer.
    fn name(&self) -> &'static str;
}

/// The additive keyword/constraint/bias scorer.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    config: RankingConfig,
}

impl HeuristicScorer {
    pub fn new(config: RankingConfig) -> Self {
        HeuristicScorer { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }
}

fn bonus(applies: bool, weight: f64) -> f64 {
    if applies { weight } else { 0.0 }
}

impl Scorer for HeuristicScorer {
    fn score(
        &self,
        item: &Item,
        constraints: &ConstraintSet,
        price_position: f64,
    ) -> ScoreBreakdown {
        let config = &self.config;
        let text = item.searchable_text();

        let keyword_matches = constraints
            .keywords
            .iter()
            .filter(|keyword| {
                let needle: Cow<'_, str> = if keyword.chars().any(char::is_uppercase) {
                    Cow::Owned(keyword.to_lowercase())
                } else {
                    Cow::Borrowed(keyword.as_str())
                };
                text.contains(needle.as_ref())
            })
            .count();

        let hint = item.category.hint();
        let category_hinted = CATEGORY_HINTS.contains(hint) && constraints.has_keyword(hint);

        let price_intent = match constraints.price_intent {
            Some(PriceIntent::FavorExpensive) => price_position * config.price_intent_weight,
            Some(PriceIntent::FavorCheap) => (1.0 - price_position) * config.price_intent_weight,
            None => 0.0,
        };

        ScoreBreakdown {
            keyword_matches,
            keywords: keyword_matches as f64 * config.keyword_weight,
            category_hint: bonus(category_hinted, config.category_hint_weight),
            max_price: bonus(
                constraints.max_price.is_some_and(|max| item.price <= max),
                config.max_price_weight,
            ),
            min_price: bonus(
                constraints.min_price.is_some_and(|min| item.price >= min),
                config.min_price_weight,
            ),
            min_rating: bonus(
                constraints.min_rating.is_some_and(|min| item.rating >= min),
                config.min_rating_weight,
            ),
            price_intent,
            rating_bias: item.rating * config.rating_bias,
            price_penalty: -item.price * config.price_penalty,
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
