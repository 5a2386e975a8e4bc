//! Structured facet filtering of catalog items.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Item};

/// Exact constraints chosen by the user, applied before ranking.
///
/// Unset fields match everything. Price and rating bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetFilter {
    /// Only items of this category.
    pub category: Option<Category>,
    /// Only items priced at or below this value.
    pub max_price: Option<f64>,
    /// Only items rated at or above this value.
    pub min_rating: Option<f64>,
}

impl FacetFilter {
    /// Create a filter that matches every item.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Check if no facet is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.max_price.is_none() && self.min_rating.is_none()
    }

    /// Check if an item satisfies every set facet.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = self.category
            && item.category != category
        {
            return false;
        }
        if let Some(max_price) = self.max_price
            && item.price > max_price
        {
            return false;
        }
        if let Some(min_rating) = self.min_rating
            && item.rating < min_rating
        {
            return false;
        }
        true
    }

    /// The matching items, in input order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl fmt::Display for FacetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(category) = self.category {
            parts.push(format!("category={category}"));
        }
        if let Some(max_price) = self.max_price {
            parts.push(format!("price<={max_price}"));
        }
        if let Some(min_rating) = self.min_rating {
            parts.push(format!("rating>={min_rating}"));
        }

        if parts.is_empty() {
            write!(f, "*")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}
