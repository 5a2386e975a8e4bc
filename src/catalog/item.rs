//! Catalog items and the closed set of product categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FacetaError, Result};

/// Product category.
///
/// The set is closed: every item in a catalog belongs to exactly one of
/// these labels. Each label doubles as a category hint token for ranking
/// (see [`Category::hint`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(alias = "shoes")]
    Shoes,
    #[serde(alias = "electronics")]
    Electronics,
    #[serde(alias = "apparel")]
    Apparel,
    #[serde(alias = "accessories")]
    Accessories,
    #[serde(alias = "watches")]
    Watches,
    #[serde(alias = "bags")]
    Bags,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Shoes,
        Category::Electronics,
        Category::Apparel,
        Category::Accessories,
        Category::Watches,
        Category::Bags,
    ];

    /// Display label, e.g. `"Shoes"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shoes => "Shoes",
            Category::Electronics => "Electronics",
            Category::Apparel => "Apparel",
            Category::Accessories => "Accessories",
            Category::Watches => "Watches",
            Category::Bags => "Bags",
        }
    }

    /// Lower-cased label used as a category hint keyword, e.g. `"shoes"`.
    pub fn hint(&self) -> &'static str {
        match self {
            Category::Shoes => "shoes",
            Category::Electronics => "electronics",
            Category::Apparel => "apparel",
            Category::Accessories => "accessories",
            Category::Watches => "watches",
            Category::Bags => "bags",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FacetaError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                FacetaError::invalid_argument(format!(
                    "unknown category '{needle}' (expected one of: {})",
                    Category::ALL.map(|c| c.as_str()).join(", ")
                ))
            })
    }
}

/// A product in the catalog.
///
/// Items are never mutated by interpretation or ranking; the engine only
/// ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable identifier.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Category label.
    pub category: Category,
    /// Price, non-negative.
    pub price: f64,
    /// Average rating in `[1.0, 5.0]`.
    pub rating: f64,
}

impl Item {
    /// Create a new item.
    pub fn new<N, D>(
        id: u32,
        name: N,
        description: D,
        category: Category,
        price: f64,
        rating: f64,
    ) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Item {
            id,
            name: name.into(),
            description: description.into(),
            category,
            price,
            rating,
        }
    }

    /// Lower-cased concatenation of name, description and category that
    /// keywords are matched against.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.category).to_lowercase()
    }

    /// Check the item's numeric invariants.
    pub fn validate(&self) -> Result<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(FacetaError::catalog(format!(
                "item {} has invalid price {}",
                self.id, self.price
            )));
        }
        if !(1.0..=5.0).contains(&self.rating) {
            return Err(FacetaError::catalog(format!(
                "item {} has rating {} outside [1.0, 5.0]",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_ignores_case() {
        assert_eq!("shoes".parse::<Category>().unwrap(), Category::Shoes);
        assert_eq!(" WATCHES ".parse::<Category>().unwrap(), Category::Watches);
        assert!("furniture".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_hint_is_lowercase_label() {
        for category in Category::ALL {
            assert_eq!(category.hint(), category.as_str().to_lowercase());
        }
    }

    #[test]
    fn test_category_serde_accepts_lowercase_alias() {
        let category: Category = serde_json::from_str("\"bags\"").unwrap();
        assert_eq!(category, Category::Bags);
        assert_eq!(serde_json::to_string(&Category::Bags).unwrap(), "\"Bags\"");
    }

    #[test]
    fn test_searchable_text() {
        let item = Item::new(1, "Trail Shoes", "Grippy OUTSOLE", Category::Shoes, 69.0, 4.1);
        assert_eq!(item.searchable_text(), "trail shoes grippy outsole shoes");
    }

    #[test]
    fn test_validate() {
        let item = Item::new(1, "Belt", "Leather", Category::Accessories, 29.99, 3.8);
        assert!(item.validate().is_ok());

        let negative = Item { price: -1.0, ..item.clone() };
        assert!(negative.validate().is_err());

        let nan = Item { price: f64::NAN, ..item.clone() };
        assert!(nan.validate().is_err());

        let too_good = Item { rating: 5.1, ..item };
        assert!(too_good.validate().is_err());
    }
}
