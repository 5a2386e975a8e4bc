//! Price-tendency detection.
//!
//! Two fixed vocabularies signal whether the user leans toward pricier or
//! cheaper items. Matching is case-insensitive and bounded by ASCII word
//! boundaries, so any non-ASCII character separates words just as it does
//! during keyword normalization. Every hyphen in a term may also be written
//! as whitespace or omitted entirely ("high-end", "high end", "highend").
//! When both vocabularies match, the expensive intent wins because its rule
//! is evaluated first.

use lazy_static::lazy_static;
use regex::Captures;

use crate::query::constraints::{ConstraintSet, PriceIntent};
use crate::query::rules::{Rule, RuleGroup};

/// Terms signalling [`PriceIntent::FavorExpensive`].
pub const EXPENSIVE_TERMS: &[&str] =
    &["expensive", "premium", "high-end", "pricey", "pricy", "top-tier"];

/// Terms signalling [`PriceIntent::FavorCheap`].
pub const CHEAP_TERMS: &[&str] =
    &["cheap", "budget", "affordable", "inexpensive", "low-cost", "low-end"];

/// Build an ASCII word-bounded, case-insensitive alternation over `terms`.
pub fn vocabulary_pattern(terms: &[&str]) -> String {
    let alternatives: Vec<String> = terms
        .iter()
        .map(|term| {
            term.split('-')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"[-\s]?")
        })
        .collect();

    format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", alternatives.join("|"))
}

/// Intent terms in the form the keyword extractor produces (hyphens removed).
pub fn normalized_intent_terms() -> impl Iterator<Item = String> {
    EXPENSIVE_TERMS
        .iter()
        .chain(CHEAP_TERMS)
        .map(|term| term.replace('-', ""))
}

fn favor_expensive(_: &Captures<'_>, constraints: &mut ConstraintSet) -> Option<()> {
    constraints.price_intent = Some(PriceIntent::FavorExpensive);
    Some(())
}

fn favor_cheap(_: &Captures<'_>, constraints: &mut ConstraintSet) -> Option<()> {
    constraints.price_intent = Some(PriceIntent::FavorCheap);
    Some(())
}

lazy_static! {
    /// Price intent rules; expensive is checked first.
    pub static ref INTENT_RULES: RuleGroup = RuleGroup::new(
        "intent",
        vec![
            Rule::new("intent-expensive", &vocabulary_pattern(EXPENSIVE_TERMS), favor_expensive),
            Rule::new("intent-cheap", &vocabulary_pattern(CHEAP_TERMS), favor_cheap),
        ],
    );
}

/// Detect the price intent of a query, if any.
pub fn detect_price_intent(query: &str) -> Option<PriceIntent> {
    let mut constraints = ConstraintSet::new();
    INTENT_RULES.apply(query, &mut constraints);
    constraints.price_intent
}
