//! # Faceta
//!
//! Heuristic free-text query interpretation and ranking for product catalogs.
//!
//! ## Features
//!
//! - Rule-based interpretation of queries like `"cheap running shoes under $80"`
//!   into price bounds, a rating floor, a price intent and keywords
//! - Additive relevance scoring with a threshold and a no-empty-result fallback
//! - Exact facet filtering (category, price, rating) ahead of ranking
//! - JSON and JSON Lines catalog loading
//!
//! ## Example
//!
//! ```
//! use faceta::catalog::sample_catalog;
//! use faceta::{interpret, rank};
//!
//! let items = sample_catalog();
//! let constraints = interpret("cheap shoes");
//! let ranked = rank(&items, &constraints);
//!
//! assert_eq!(ranked[0].name, "Foam Flip Flops");
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod query;
pub mod ranking;
pub mod search;

pub use error::{FacetaError, Result};
pub use query::{ConstraintSet, Interpretation, PriceIntent, explain, interpret};
pub use ranking::{Ranker, RankingConfig, ScoredItem, rank};
pub use search::{FacetFilter, SearchOutcome, search};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
