//! Product catalog: items, categories and loaders.
//!
//! A catalog is a fixed, in-memory list of [`Item`]s. It is loaded once
//! (from the built-in sample list, a generated list, or a JSON/JSONL file)
//! and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use faceta::catalog::{Catalog, Category, sample_catalog};
//!
//! let catalog = Catalog::new(sample_catalog()).unwrap();
//! let shoes = catalog.category_counts()[&Category::Shoes];
//! assert!(shoes > 0);
//! ```

pub mod converter;
pub mod item;
pub mod sample;

use std::collections::{BTreeMap, HashSet};

use crate::error::{FacetaError, Result};

pub use converter::{
    CatalogConverter, JsonCatalogConverter, JsonlCatalogConverter, load_catalog, parse_json,
    parse_jsonl,
};
pub use item::{Category, Item};
pub use sample::{sample_catalog, synthetic_catalog};

/// A validated, immutable list of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate ids and out-of-range prices or ratings.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        Self::validate(&items)?;
        Ok(Catalog { items })
    }

    /// Check that ids are unique and every item is valid.
    pub fn validate(items: &[Item]) -> Result<()> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(FacetaError::catalog(format!("duplicate item id {}", item.id)));
            }
        }
        Ok(())
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Catalog {
            items: sample_catalog(),
        }
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items per category. Categories with no items are omitted.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
