//! Ordered pattern/action rules for query interpretation.
//!
//! Each independent constraint category (price range, rating floor, price
//! intent) is a [`RuleGroup`]: an ordered list of [`Rule`]s evaluated in
//! priority order where the first rule that matches wins. Groups do not
//! interact with each other.
//!
//! # Price range rules
//!
//! | Rule            | Pattern                                         | Effect                          |
//! |-----------------|-------------------------------------------------|---------------------------------|
//! | `price-between` | `between X and/to/-/– Y`                        | `min = min(X,Y)`, `max = max(X,Y)` |
//! | `price-under`   | `under/below/less than/cheaper than X`          | `max = X`                       |
//! | `price-over`    | `over/above/more than/at least X`               | `min = X`                       |
//!
//! An optional `$` may precede any number. Word boundaries are ASCII, so
//! they agree with keyword normalization: any non-ASCII character separates
//! words.
//!
//! # Rating rules
//!
//! | Rule            | Pattern                         | Effect     |
//! |-----------------|---------------------------------|------------|
//! | `rating-stars`  | `N star(s)`                     | `min = N`  |
//! | `rating-reviews`| `good/great/high review(s)`     | `min = 4`  |
//!
//! `N` is an integer or has one decimal digit, and must not continue a
//! longer number: "4.55 stars" sets no floor.

use std::fmt;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::query::constraints::ConstraintSet;

/// Rating floor implied by phrases like "good reviews".
pub const IMPLIED_REVIEW_RATING: f64 = 4.0;

/// Decimal number with an optional `$` prefix (the prefix is not captured).
const PRICE: &str = r"\$?(\d+(?:\.\d+)?)";

/// Turns the captures of a matched pattern into constraint updates.
///
/// Returns `None` when the captures cannot be used, in which case the rule
/// counts as not matched.
pub type RuleAction = fn(&Captures<'_>, &mut ConstraintSet) -> Option<()>;

/// A pattern paired with the action applied when it matches.
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    action: RuleAction,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl Rule {
    /// Create a rule from a constant pattern.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Rules are
    /// built from literals once per process, so this is a programming error.
    pub fn new(name: &'static str, pattern: &str, action: RuleAction) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("rule '{name}' has an invalid pattern: {e}"));
        Rule {
            name,
            pattern,
            action,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule to `query`. Returns true if it matched and updated `constraints`.
    pub fn apply(&self, query: &str, constraints: &mut ConstraintSet) -> bool {
        match self.pattern.captures(query) {
            Some(captures) => (self.action)(&captures, constraints).is_some(),
            None => false,
        }
    }
}

/// An ordered list of rules where the first match wins.
#[derive(Debug)]
pub struct RuleGroup {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        RuleGroup { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply rules in order until one matches. Returns the name of the
    /// matching rule, if any.
    pub fn apply(&self, query: &str, constraints: &mut ConstraintSet) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.apply(query, constraints))
            .map(Rule::name)
    }
}

/// Parse capture group `index` as a number.
pub(crate) fn number(captures: &Captures<'_>, index: usize) -> Option<f64> {
    captures.get(index)?.as_str().parse().ok()
}

fn price_between(captures: &Captures<'_>, constraints: &mut ConstraintSet) -> Option<()> {
    let a = number(captures, 1)?;
    let b = number(captures, 2)?;
    constraints.min_price = Some(a.min(b));
    constraints.max_price = Some(a.max(b));
    Some(())
}

fn price_under(captures: &Captures<'_>, constraints: &mut ConstraintSet) -> Option<()> {
    constraints.max_price = Some(number(captures, 1)?);
    Some(())
}

fn price_over(captures: &Captures<'_>, constraints: &mut ConstraintSet) -> Option<()> {
    constraints.min_price = Some(number(captures, 1)?);
    Some(())
}

fn rating_stars(captures: &Captures<'_>, constraints: &mut ConstraintSet) -> Option<()> {
    constraints.min_rating = Some(number(captures, 1)?);
    Some(())
}

fn rating_reviews(_: &Captures<'_>, constraints: &mut ConstraintSet) -> Option<()> {
    constraints.min_rating = Some(IMPLIED_REVIEW_RATING);
    Some(())
}

lazy_static! {
    /// Price range rules, highest priority first.
    pub static ref RANGE_RULES: RuleGroup = RuleGroup::new(
        "range",
        vec![
            Rule::new(
                "price-between",
                &format!(r"(?i)(?-u:\b)between\s*{PRICE}\s*(?:and|to|-|–)\s*{PRICE}"),
                price_between,
            ),
            Rule::new(
                "price-under",
                &format!(r"(?i)(?-u:\b)(?:under|below|less\s+than|cheaper\s+than)\s*{PRICE}"),
                price_under,
            ),
            Rule::new(
                "price-over",
                &format!(r"(?i)(?-u:\b)(?:over|above|more\s+than|at\s+least)\s*{PRICE}"),
                price_over,
            ),
        ],
    );

    /// Rating floor rules; an explicit star count beats the implied floor.
    pub static ref RATING_RULES: RuleGroup = RuleGroup::new(
        "rating",
        vec![
            Rule::new(
                "rating-stars",
                r"(?i)(?:^|[^0-9A-Za-z_.])(\d+(?:\.\d)?)\s*stars?(?-u:\b)",
                rating_stars,
            ),
            Rule::new(
                "rating-reviews",
                r"(?i)(?-u:\b)(?:good|great|high)\s+reviews?(?-u:\b)",
                rating_reviews,
            ),
        ],
    );
}
