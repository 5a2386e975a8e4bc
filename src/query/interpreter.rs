//! Free-text query interpreter.
//!
//! Interpretation is a total function: any string, including the empty
//! string, yields a [`ConstraintSet`]. Patterns that do not match simply
//! leave the corresponding constraint unset.

use log::debug;
use serde::Serialize;

use crate::query::constraints::ConstraintSet;
use crate::query::intent::INTENT_RULES;
use crate::query::keywords::extract_keywords;
use crate::query::rules::{RANGE_RULES, RATING_RULES, RuleGroup};

/// The result of interpreting a query together with the rules that fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    /// The trimmed query that was interpreted.
    pub query: String,
    pub constraints: ConstraintSet,
    /// Names of the rules that matched, in evaluation order.
    pub matched_rules: Vec<&'static str>,
}

fn rule_groups() -> [&'static RuleGroup; 3] {
    [&*RANGE_RULES, &*RATING_RULES, &*INTENT_RULES]
}

/// Interpret `raw_query` and report which rules fired.
pub fn explain(raw_query: &str) -> Interpretation {
    let query = raw_query.trim();
    let mut constraints = ConstraintSet::new();
    let mut matched_rules = Vec::new();

    if !query.is_empty() {
        for group in rule_groups() {
            if let Some(rule) = group.apply(query, &mut constraints) {
                matched_rules.push(rule);
            }
        }
        constraints.keywords = extract_keywords(query);
    }

    debug!(
        "Interpreted {:?}: rules={:?} keywords={:?}",
        query, matched_rules, constraints.keywords
    );

    Interpretation {
        query: query.to_string(),
        constraints,
        matched_rules,
    }
}

/// Interpret a raw query string into structured constraints.
///
/// # Examples
///
/// ```
/// use faceta::query::{PriceIntent, interpret};
///
/// let constraints = interpret("cheap running shoes under $80 with 4 stars");
/// assert_eq!(constraints.max_price, Some(80.0));
/// assert_eq!(constraints.min_rating, Some(4.0));
/// assert_eq!(constraints.price_intent, Some(PriceIntent::FavorCheap));
/// assert_eq!(constraints.keywords, vec!["running", "shoes"]);
/// ```
pub fn interpret(raw_query: &str) -> ConstraintSet {
    explain(raw_query).constraints
}
