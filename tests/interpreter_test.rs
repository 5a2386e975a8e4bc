//! Integration tests for free-text query interpretation.

use faceta::query::*;

#[test]
fn test_empty_query_has_no_constraints() {
    for query in ["", "   ", "\n\t"] {
        let constraints = interpret(query);
        assert_eq!(constraints, ConstraintSet::default(), "{query:?}");
        assert!(constraints.keywords.is_empty());
    }
}

#[test]
fn test_full_query() {
    let constraints = interpret("cheap running shoes under $80 with 4 stars");

    assert_eq!(constraints.max_price, Some(80.0));
    assert_eq!(constraints.min_price, None);
    assert_eq!(constraints.min_rating, Some(4.0));
    assert_eq!(constraints.price_intent, Some(PriceIntent::FavorCheap));
    assert_eq!(constraints.keywords, vec!["running", "shoes"]);
}

#[test]
fn test_between_is_order_independent() {
    let constraints = interpret("between 20 and 10");
    assert_eq!(constraints.min_price, Some(10.0));
    assert_eq!(constraints.max_price, Some(20.0));
    assert!(constraints.keywords.is_empty());

    let constraints = interpret("bags between $20 - $50");
    assert_eq!(constraints.min_price, Some(20.0));
    assert_eq!(constraints.max_price, Some(50.0));
    assert_eq!(constraints.keywords, vec!["bags"]);
}

#[test]
fn test_price_bounds() {
    assert_eq!(interpret("under $50").max_price, Some(50.0));
    assert_eq!(interpret("less than 30.5").max_price, Some(30.5));
    assert_eq!(interpret("Below 99").max_price, Some(99.0));
    assert_eq!(interpret("over 100").min_price, Some(100.0));
    assert_eq!(interpret("more than $15").min_price, Some(15.0));
}

#[test]
fn test_cheaper_than_is_a_bound_not_an_intent() {
    let constraints = interpret("cheaper than 30");

    assert_eq!(constraints.max_price, Some(30.0));
    assert_eq!(constraints.price_intent, None);
    assert_eq!(constraints.keywords, vec!["cheaper"]);
}

#[test]
fn test_rating_floor() {
    assert_eq!(interpret("4.5 stars").min_rating, Some(4.5));
    assert_eq!(interpret("5 star headphones").min_rating, Some(5.0));
    assert_eq!(interpret("good reviews").min_rating, Some(4.0));
    assert_eq!(interpret("high review jacket").min_rating, Some(4.0));
    assert_eq!(interpret("reviews").min_rating, None);
}

#[test]
fn test_price_intent() {
    let constraints = interpret("premium watches");
    assert_eq!(constraints.price_intent, Some(PriceIntent::FavorExpensive));
    assert_eq!(constraints.keywords, vec!["watches"]);

    let constraints = interpret("low-cost speaker");
    assert_eq!(constraints.price_intent, Some(PriceIntent::FavorCheap));
    assert_eq!(constraints.keywords, vec!["speaker"]);

    assert_eq!(detect_price_intent("Top Tier camera"), Some(PriceIntent::FavorExpensive));
    assert_eq!(detect_price_intent("a sweater"), None);
}

#[test]
fn test_expensive_wins_over_cheap() {
    let constraints = interpret("premium but affordable");

    assert_eq!(constraints.price_intent, Some(PriceIntent::FavorExpensive));
    assert_eq!(constraints.keywords, vec!["but"]);
}

#[test]
fn test_spaced_intent_term_leaves_second_word() {
    let constraints = interpret("High End bags");

    assert_eq!(constraints.price_intent, Some(PriceIntent::FavorExpensive));
    assert_eq!(constraints.keywords, vec!["end", "bags"]);
}

#[test]
fn test_numbers_and_punctuation_are_not_keywords() {
    let constraints = interpret("USB-C chargers, 2 pack!!");
    assert_eq!(constraints.keywords, vec!["usbc", "chargers", "pack"]);
}

#[test]
fn test_non_ascii_prefix_still_signals_intent() {
    let constraints = interpret("éhigh-end");
    assert_eq!(constraints.price_intent, Some(PriceIntent::FavorExpensive));
    assert!(constraints.keywords.is_empty());
}

#[test]
fn test_star_rating_with_two_decimals_is_ignored() {
    let constraints = interpret("4.55 stars");
    assert_eq!(constraints.min_rating, None);
    assert!(constraints.keywords.is_empty());

    assert_eq!(interpret("4.5 stars").min_rating, Some(4.5));
}

#[test]
fn test_explain_reports_rules() {
    let interpretation = explain("  affordable bags under 40 with good reviews ");

    assert_eq!(interpretation.query, "affordable bags under 40 with good reviews");
    assert_eq!(
        interpretation.matched_rules,
        vec!["price-under", "rating-reviews", "intent-cheap"]
    );
    assert_eq!(interpretation.constraints.keywords, vec!["bags"]);
}

#[test]
fn test_interpretation_serializes() {
    let json = serde_json::to_value(interpret("premium watches under 300")).unwrap();

    assert_eq!(json["max_price"], 300.0);
    assert_eq!(json["price_intent"], "favor-expensive");
    assert_eq!(json["min_rating"], serde_json::Value::Null);
}
