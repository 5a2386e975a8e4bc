//! Faceted browsing over a catalog.
//!
//! # Examples
//!
//! ```
//! use faceta::catalog::{Category, sample_catalog};
//! use faceta::ranking::RankingConfig;
//! use faceta::search::{FacetFilter, search};
//!
//! let items = sample_catalog();
//! let filter = FacetFilter::new().with_category(Category::Shoes);
//! let outcome = search(&items, &filter, "cheap shoes", &RankingConfig::default()).unwrap();
//!
//! assert!(outcome.ranked);
//! assert!(outcome.items().iter().all(|item| item.category == Category::Shoes));
//! ```

pub mod facet;
pub mod pipeline;

pub use facet::FacetFilter;
pub use pipeline::{CatalogSearch, SearchHit, SearchOutcome, search};
