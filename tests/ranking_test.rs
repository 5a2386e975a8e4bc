//! Integration tests for relevance ranking.

use faceta::catalog::{Category, Item, sample_catalog};
use faceta::query::{ConstraintSet, interpret};
use faceta::ranking::*;

fn ids(items: &[&Item]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

#[test]
fn test_empty_input_yields_empty_output() {
    let items: Vec<Item> = Vec::new();
    assert!(rank(&items, &interpret("cheap shoes")).is_empty());
}

#[test]
fn test_cheap_shoes() {
    let items = vec![
        Item::new(1, "Trail Running Shoes", "Grippy outsole", Category::Shoes, 69.0, 4.1),
        Item::new(2, "Wireless Headphones", "Noise cancelling", Category::Electronics, 129.99, 4.5),
    ];
    let ranked = rank(&items, &interpret("cheap shoes"));

    assert_eq!(ranked[0].id, 1);
    // The headphones score 0.2 * 4.5 - 0.01 * 129.99 < 0.5 and are dropped.
    assert_eq!(ids(&ranked), vec![1]);
}

#[test]
fn test_rating_floor_bonus_is_inclusive() {
    let items = vec![
        Item::new(1, "Speaker A", "", Category::Electronics, 40.0, 4.4),
        Item::new(2, "Speaker B", "", Category::Electronics, 40.0, 4.5),
    ];
    let constraints = interpret("4.5 stars");
    assert_eq!(constraints.min_rating, Some(4.5));

    let ranking = Ranker::default().rank_scored(&items.iter().collect::<Vec<_>>(), &constraints);
    assert_eq!(ranking.items[0].item.id, 2);
    assert_eq!(ranking.items[0].breakdown.min_rating, 2.0);
    assert_eq!(ids(&ranking.items()), vec![2]);
}

#[test]
fn test_price_ceiling_bonus_is_inclusive() {
    let items = vec![
        Item::new(1, "Tote", "", Category::Bags, 50.0, 3.0),
        Item::new(2, "Duffel", "", Category::Bags, 50.01, 3.0),
    ];
    let constraints = interpret("under $50");
    let ranking = Ranker::default().rank_scored(&items.iter().collect::<Vec<_>>(), &constraints);

    assert!(!ranking.fallback);
    assert_eq!(ids(&ranking.items()), vec![1]);
    assert_eq!(ranking.items[0].breakdown.max_price, 2.0);
}

#[test]
fn test_fallback_returns_original_order() {
    let items: Vec<Item> = sample_catalog()
        .into_iter()
        .filter(|item| item.price > 40.0)
        .collect();
    let ranked = rank(&items, &interpret("zzzz"));

    // Above $40 the rating bias never outweighs the price penalty by more than 0.5.
    let expected: Vec<u32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids(&ranked), expected);
}

#[test]
fn test_premium_watches() {
    let items = sample_catalog();
    let ranked = rank(&items, &interpret("premium watches"));

    // The smart watch is the priciest watch; both watches lead the list.
    assert_eq!(ids(&ranked[..2]), vec![4, 5]);
}

#[test]
fn test_ranking_is_deterministic() {
    let items = sample_catalog();
    let constraints = interpret("leather under 150 with good reviews");

    let first = rank(&items, &constraints);
    let second = rank(&items, &constraints);
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_items_are_not_mutated() {
    let items = sample_catalog();
    let before = items.clone();
    let _ = rank(&items, &interpret("premium bags over 20"));
    assert_eq!(items, before);
}

#[test]
fn test_custom_threshold() {
    let items = sample_catalog();
    let candidates: Vec<&Item> = items.iter().collect();
    let constraints = ConstraintSet::new().with_keyword("leather");

    // Leather items score 2.5 plus biases; a threshold of 10 excludes all of them.
    let strict = Ranker::new(RankingConfig::default().with_relevance_threshold(10.0)).unwrap();
    let ranking = strict.rank_scored(&candidates, &constraints);
    assert!(ranking.fallback);
    assert_eq!(ranking.len(), items.len());

    let ranking = Ranker::default().rank_scored(&candidates, &constraints);
    assert!(!ranking.fallback);
    assert_eq!(ids(&ranking.items())[..3], [11, 5, 3]);
}

#[test]
fn test_custom_scorer() {
    #[derive(Debug)]
    struct RatingOnly;

    impl Scorer for RatingOnly {
        fn score(&self, item: &Item, _: &ConstraintSet, _: f64) -> ScoreBreakdown {
            ScoreBreakdown {
                rating_bias: item.rating,
                ..ScoreBreakdown::default()
            }
        }

        fn name(&self) -> &'static str {
            "rating-only"
        }
    }

    let items = sample_catalog();
    let candidates: Vec<&Item> = items.iter().collect();
    let ranker = Ranker::with_scorer(RatingOnly, &RankingConfig::default()).unwrap();

    let ranked = ranker.rank(&candidates, &ConstraintSet::new());
    assert_eq!(ranked[0].id, 7);
    assert_eq!(ranked.last().map(|item| item.id), Some(14));
}

#[test]
fn test_zero_price_span_is_rejected() {
    let config = RankingConfig::default().with_min_price_span(0.0);
    assert!(Ranker::new(config).is_err());
}

#[test]
fn test_single_price_candidates_still_rank() {
    let items = vec![
        Item::new(1, "Canvas Tote", "", Category::Bags, 20.0, 4.2),
        Item::new(2, "Leather Tote", "", Category::Bags, 20.0, 4.6),
    ];
    let ranking = Ranker::default().rank_scored(
        &items.iter().collect::<Vec<_>>(),
        &interpret("cheap tote"),
    );

    assert!(!ranking.fallback);
    assert!(ranking.items.iter().all(|scored| scored.score.is_finite()));
    assert_eq!(ids(&ranking.items()), vec![2, 1]);
}
