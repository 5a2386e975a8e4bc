//! Ranking of candidate items: score, threshold, order, fallback.
//!
//! 1. Normalize each price to `[0, 1]` over the candidate set, using a span
//!    of at least `min_price_span`.
//! 2. Score every item.
//! 3. Drop items scoring at or below the relevance threshold.
//! 4. Sort the survivors (see [`compare_scored`]).
//! 5. If nothing survives, fall back to the full candidate set in its
//!    original order. The text heuristic alone never empties a result.

use std::cmp::Ordering;

use log::{debug, trace};
use serde::Serialize;

use crate::catalog::Item;
use crate::error::Result;
use crate::query::{ConstraintSet, PriceIntent};
use crate::ranking::config::RankingConfig;
use crate::ranking::scorer::{HeuristicScorer, ScoreBreakdown, Scorer};

/// An item with its normalized price position and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem<'a> {
    pub item: &'a Item,
    /// Price rescaled to `[0, 1]` over the candidate set.
    pub price_position: f64,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// The ordered outcome of ranking a candidate set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking<'a> {
    pub items: Vec<ScoredItem<'a>>,
    /// True when every candidate fell below the relevance threshold and the
    /// original order was returned instead.
    pub fallback: bool,
}

impl<'a> Ranking<'a> {
    fn empty() -> Self {
        Ranking {
            items: Vec::new(),
            fallback: false,
        }
    }

    /// The ranked items without their scores.
    pub fn items(&self) -> Vec<&'a Item> {
        self.items.iter().map(|scored| scored.item).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Normalized price position of every item, in input order.
///
/// Positions are `(price - min) / max(min_span, max - min)`. A span that is
/// not positive puts every item at position 0.
pub fn price_positions(items: &[&Item], min_span: f64) -> Vec<f64> {
    if items.is_empty() {
        return Vec::new();
    }

    let (min, max) = items
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), item| {
            (min.min(item.price), max.max(item.price))
        });
    let span = (max - min).max(min_span);

    if span.is_nan() || span <= 0.0 {
        return vec![0.0; items.len()];
    }

    items.iter().map(|item| (item.price - min) / span).collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compare two scored items for ranking.
///
/// Sort order:
/// 1. **Score** - higher first
/// 2. **Price intent** - with `FavorExpensive` the higher price position
///    first, with `FavorCheap` the lower one first
/// 3. **Rating** - higher first
/// 4. **Price** - lower first
///
/// Items equal on every key compare equal, so a stable sort keeps their
/// input order.
pub fn compare_scored(
    a: &ScoredItem<'_>,
    b: &ScoredItem<'_>,
    intent: Option<PriceIntent>,
) -> Ordering {
    descending(a.score, b.score)
        .then_with(|| match intent {
            Some(PriceIntent::FavorExpensive) => descending(a.price_position, b.price_position),
            Some(PriceIntent::FavorCheap) => ascending(a.price_position, b.price_position),
            None => Ordering::Equal,
        })
        .then_with(|| descending(a.item.rating, b.item.rating))
        .then_with(|| ascending(a.item.price, b.item.price))
}

/// Scores, filters and orders candidate items.
#[derive(Debug, Clone)]
pub struct Ranker<S: Scorer = HeuristicScorer> {
    scorer: S,
    relevance_threshold: f64,
    min_price_span: f64,
}

impl Default for Ranker<HeuristicScorer> {
    fn default() -> Self {
        let config = RankingConfig::default();
        Ranker {
            relevance_threshold: config.relevance_threshold,
            min_price_span: config.min_price_span,
            scorer: HeuristicScorer::new(config),
        }
    }
}

impl Ranker<HeuristicScorer> {
    /// Create a ranker using the heuristic scorer with `config`'s weights.
    ///
    /// Fails with [`FacetaError::Config`](crate::error::FacetaError::Config)
    /// if `config` does not validate.
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;
        let relevance_threshold = config.relevance_threshold;
        let min_price_span = config.min_price_span;
        Ok(Ranker {
            scorer: HeuristicScorer::new(config),
            relevance_threshold,
            min_price_span,
        })
    }
}

impl<S: Scorer> Ranker<S> {
    /// Create a ranker with a custom scorer. Only the threshold and price
    /// span are taken from `config`, which must validate.
    pub fn with_scorer(scorer: S, config: &RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Ranker {
            scorer,
            relevance_threshold: config.relevance_threshold,
            min_price_span: config.min_price_span,
        })
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn relevance_threshold(&self) -> f64 {
        self.relevance_threshold
    }

    /// Score every item, keeping input order.
    pub fn score_all<'a>(
        &self,
        items: &[&'a Item],
        constraints: &ConstraintSet,
    ) -> Vec<ScoredItem<'a>> {
        let positions = price_positions(items, self.min_price_span);

        items
            .iter()
            .zip(positions)
            .map(|(&item, price_position)| {
                let breakdown = self.scorer.score(item, constraints, price_position);
                let score = breakdown.total();
                trace!("item {} scored {:.3}: {:?}", item.id, score, breakdown);
                ScoredItem {
                    item,
                    price_position,
                    score,
                    breakdown,
                }
            })
            .collect()
    }

    /// Items scoring above the relevance threshold, in rank order.
    ///
    /// Unlike [`Ranker::rank_scored`] this never falls back, so the result
    /// may be empty.
    pub fn relevant<'a>(
        &self,
        items: &[&'a Item],
        constraints: &ConstraintSet,
    ) -> Vec<ScoredItem<'a>> {
        let mut relevant: Vec<ScoredItem<'a>> = self
            .score_all(items, constraints)
            .into_iter()
            .filter(|scored| scored.score > self.relevance_threshold)
            .collect();

        relevant.sort_by(|a, b| compare_scored(a, b, constraints.price_intent));
        relevant
    }

    /// Rank `items`, falling back to the original order when nothing is relevant.
    pub fn rank_scored<'a>(&self, items: &[&'a Item], constraints: &ConstraintSet) -> Ranking<'a> {
        if items.is_empty() {
            return Ranking::empty();
        }

        let relevant = self.relevant(items, constraints);
        if !relevant.is_empty() {
            debug!(
                "Ranked {} of {} candidates with {} ({} keywords)",
                relevant.len(),
                items.len(),
                self.scorer.name(),
                constraints.keywords.len()
            );
            return Ranking {
                items: relevant,
                fallback: false,
            };
        }

        debug!(
            "No candidate scored above {}; returning all {} in original order",
            self.relevance_threshold,
            items.len()
        );
        Ranking {
            items: self.score_all(items, constraints),
            fallback: true,
        }
    }

    /// Rank `items` and return them without scores.
    pub fn rank<'a>(&self, items: &[&'a Item], constraints: &ConstraintSet) -> Vec<&'a Item> {
        self.rank_scored(items, constraints).items()
    }
}

/// Rank `items` against `constraints` with the default configuration.
///
/// # Examples
///
/// ```
/// use faceta::catalog::{Category, Item};
/// use faceta::{interpret, rank};
///
/// let items = vec![
///     Item::new(1, "Trail Shoes", "Grippy outsole", Category::Shoes, 69.0, 4.1),
///     Item::new(2, "Headphones", "Wireless", Category::Electronics, 129.99, 4.5),
/// ];
///
/// let ranked = rank(&items, &interpret("cheap shoes"));
/// assert_eq!(ranked[0].id, 1);
/// ```
pub fn rank<'a>(items: &'a [Item], constraints: &ConstraintSet) -> Vec<&'a Item> {
    let candidates: Vec<&'a Item> = items.iter().collect();
    Ranker::default().rank(&candidates, constraints)
}
