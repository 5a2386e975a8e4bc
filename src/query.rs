//! Free-text query interpretation.
//!
//! Turns an unstructured query such as `"cheap running shoes under $80"`
//! into a [`ConstraintSet`]: price bounds, a rating floor, a price intent
//! and a keyword list. The interpreter is a fixed, deterministic, rule-based
//! heuristic.
//!
//! # Architecture
//!
//! ```text
//! raw query ──trim──┬─▶ RANGE_RULES  (between / under / over)   ─┐
//!                   ├─▶ RATING_RULES (N stars / good reviews)    ├─▶ ConstraintSet
//!                   ├─▶ INTENT_RULES (premium / cheap / ...)     │
//!                   └─▶ extract_keywords (normalize, stop words) ─┘
//! ```
//!
//! Each rule group is evaluated independently; inside a group the first
//! matching rule wins.

pub mod constraints;
pub mod intent;
pub mod interpreter;
pub mod keywords;
pub mod rules;

pub use constraints::{ConstraintSet, PriceIntent};
pub use intent::detect_price_intent;
pub use interpreter::{Interpretation, explain, interpret};
pub use keywords::extract_keywords;
