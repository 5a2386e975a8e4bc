//! The browse pipeline: facet filter, then interpret and rank.
//!
//! Facets narrow the catalog exactly. The free-text query then only
//! reorders (and, above the relevance threshold, prunes) what is left. An
//! empty query leaves the filtered set in catalog order.

use log::debug;
use serde::Serialize;

use crate::catalog::Item;
use crate::error::Result;
use crate::query::{ConstraintSet, explain};
use crate::ranking::{HeuristicScorer, Ranker, RankingConfig, ScoreBreakdown, Scorer};
use crate::search::facet::FacetFilter;

/// One result of a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub item: &'a Item,
    /// Relevance score, absent when the query was empty.
    pub score: Option<f64>,
    /// Per-term score contributions, absent when the query was empty.
    pub breakdown: Option<ScoreBreakdown>,
}

/// The outcome of a search over a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    /// The trimmed query.
    pub query: String,
    /// Interpreted constraints, absent when the query was empty.
    pub constraints: Option<ConstraintSet>,
    /// Names of the interpretation rules that fired.
    pub matched_rules: Vec<&'static str>,
    pub hits: Vec<SearchHit<'a>>,
    /// Number of items that passed the facet filter.
    pub candidates: usize,
    /// True when the hits were ranked against a query.
    pub ranked: bool,
    /// True when no candidate was relevant and catalog order was kept.
    pub fallback: bool,
}

impl<'a> SearchOutcome<'a> {
    /// The hit items in result order.
    pub fn items(&self) -> Vec<&'a Item> {
        self.hits.iter().map(|hit| hit.item).collect()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Keep at most `limit` hits.
    pub fn truncate(&mut self, limit: usize) {
        self.hits.truncate(limit);
    }
}

/// Searches a borrowed catalog with a fixed ranker.
#[derive(Debug, Clone)]
pub struct CatalogSearch<'c, S: Scorer = HeuristicScorer> {
    items: &'c [Item],
    ranker: Ranker<S>,
}

impl<'c> CatalogSearch<'c> {
    /// Create a search over `items` with the heuristic scorer.
    ///
    /// Fails if `config` does not validate.
    pub fn new(items: &'c [Item], config: RankingConfig) -> Result<Self> {
        Ok(CatalogSearch {
            items,
            ranker: Ranker::new(config)?,
        })
    }
}

impl<'c, S: Scorer> CatalogSearch<'c, S> {
    /// Create a search over `items` with a custom ranker.
    pub fn with_ranker(items: &'c [Item], ranker: Ranker<S>) -> Self {
        CatalogSearch { items, ranker }
    }

    pub fn items(&self) -> &'c [Item] {
        self.items
    }

    /// Filter by `filter`, then interpret and rank against `raw_query`.
    pub fn search(&self, filter: &FacetFilter, raw_query: &str) -> SearchOutcome<'c> {
        let candidates = filter.apply(self.items);
        debug!(
            "Facets {} kept {} of {} items",
            filter,
            candidates.len(),
            self.items.len()
        );

        let interpretation = explain(raw_query);
        if interpretation.query.is_empty() {
            return SearchOutcome {
                query: interpretation.query,
                constraints: None,
                matched_rules: Vec::new(),
                candidates: candidates.len(),
                hits: candidates
                    .into_iter()
                    .map(|item| SearchHit {
                        item,
                        score: None,
                        breakdown: None,
                    })
                    .collect(),
                ranked: false,
                fallback: false,
            };
        }

        let ranking = self
            .ranker
            .rank_scored(&candidates, &interpretation.constraints);

        SearchOutcome {
            query: interpretation.query,
            constraints: Some(interpretation.constraints),
            matched_rules: interpretation.matched_rules,
            candidates: candidates.len(),
            hits: ranking
                .items
                .into_iter()
                .map(|scored| SearchHit {
                    item: scored.item,
                    score: Some(scored.score),
                    breakdown: Some(scored.breakdown),
                })
                .collect(),
            ranked: true,
            fallback: ranking.fallback,
        }
    }
}

/// Filter `items` by `filter`, then interpret and rank against `raw_query`.
///
/// Fails only if `config` does not validate.
pub fn search<'a>(
    items: &'a [Item],
    filter: &FacetFilter,
    raw_query: &str,
    config: &RankingConfig,
) -> Result<SearchOutcome<'a>> {
    Ok(CatalogSearch::new(items, config.clone())?.search(filter, raw_query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, sample_catalog};

    fn ids(outcome: &SearchOutcome<'_>) -> Vec<u32> {
        outcome.items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_catalog_order() {
        let items = sample_catalog();
        let filter = FacetFilter::new()
            .with_category(Category::Shoes)
            .with_max_price(100.0);

        let outcome = search(&items, &filter, "   ", &RankingConfig::default()).unwrap();
        assert!(!outcome.ranked);
        assert!(outcome.constraints.is_none());
        assert_eq!(ids(&outcome), vec![1, 14]);
        assert!(outcome.hits.iter().all(|hit| hit.score.is_none()));
    }

    #[test]
    fn test_query_ranks_filtered_set() {
        let items = sample_catalog();
        let filter = FacetFilter::new().with_category(Category::Electronics);

        let outcome = search(&items, &filter, "cheap shoes", &RankingConfig::default()).unwrap();
        assert!(outcome.ranked);
        assert!(!outcome.fallback);
        assert_eq!(outcome.candidates, 3);
        // The speaker wins on price intent; the $249 camera is not relevant.
        assert_eq!(ids(&outcome), vec![12, 2]);
        assert_eq!(outcome.matched_rules, vec!["intent-cheap"]);
    }

    #[test]
    fn test_unmatched_query_falls_back() {
        let items = sample_catalog();
        let filter = FacetFilter::new().with_category(Category::Watches);

        let outcome = search(&items, &filter, "zzz", &RankingConfig::default()).unwrap();
        assert!(outcome.ranked);
        assert!(outcome.fallback);
        assert_eq!(ids(&outcome), vec![4, 5]);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let items = sample_catalog();
        let config = RankingConfig::default().with_min_price_span(-1.0);
        assert!(search(&items, &FacetFilter::new(), "bags", &config).is_err());
    }

    #[test]
    fn test_truncate() {
        let items = sample_catalog();
        let mut outcome = CatalogSearch::new(&items, RankingConfig::default())
            .unwrap()
            .search(&FacetFilter::new(), "cheap shoes");

        assert_eq!(ids(&outcome)[..3], [14, 1, 3]);
        outcome.truncate(2);
        assert_eq!(ids(&outcome), vec![14, 1]);
    }
}
