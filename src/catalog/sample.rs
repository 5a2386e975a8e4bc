//! Built-in and generated catalogs.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::item::{Category, Item};

/// The fixed product list the browser ships with.
#[rustfmt::skip]
pub fn sample_catalog() -> Vec<Item> {
    vec![
        Item::new(1, "Trail Running Shoes", "Lightweight trail shoes with a grippy outsole", Category::Shoes, 69.00, 4.1),
        Item::new(2, "Wireless Headphones", "Over-ear Bluetooth headphones with active noise cancellation", Category::Electronics, 129.99, 4.5),
        Item::new(3, "Leather Chelsea Boots", "Handmade leather boots for everyday wear", Category::Shoes, 149.00, 4.6),
        Item::new(4, "Smart Fitness Watch", "Heart-rate tracking smartwatch with GPS", Category::Watches, 199.99, 4.3),
        Item::new(5, "Classic Analog Watch", "Stainless steel watch with a leather strap", Category::Watches, 89.50, 4.0),
        Item::new(6, "Canvas Tote Bag", "Durable everyday tote with an inner pocket", Category::Bags, 24.99, 4.2),
        Item::new(7, "Travel Backpack", "Water-resistant backpack with a padded laptop sleeve", Category::Bags, 79.00, 4.7),
        Item::new(8, "Merino Wool Sweater", "Soft crew-neck sweater for cold days", Category::Apparel, 59.00, 4.4),
        Item::new(9, "Rain Jacket", "Packable waterproof jacket with a hood", Category::Apparel, 95.00, 3.9),
        Item::new(10, "Polarized Sunglasses", "UV400 sunglasses with a lightweight frame", Category::Accessories, 35.00, 4.1),
        Item::new(11, "Leather Belt", "Full-grain leather belt with a brass buckle", Category::Accessories, 29.99, 3.8),
        Item::new(12, "Portable Speaker", "Compact Bluetooth speaker with 12-hour battery", Category::Electronics, 49.99, 4.2),
        Item::new(13, "Action Camera", "Waterproof 4K action camera with stabilization", Category::Electronics, 249.00, 4.4),
        Item::new(14, "Foam Flip Flops", "Comfortable summer sandals for the beach", Category::Shoes, 12.99, 3.6),
    ]
}

const ADJECTIVES: &[&str] = &[
    "Classic", "Compact", "Durable", "Lightweight", "Vintage", "Modern", "Rugged", "Slim",
    "Wireless", "Waterproof", "Leather", "Canvas",
];

fn nouns(category: Category) -> &'static [&'static str] {
    match category {
        Category::Shoes => &["Sneakers", "Boots", "Loafers", "Sandals", "Runners"],
        Category::Electronics => &["Headphones", "Speaker", "Camera", "Charger", "Keyboard"],
        Category::Apparel => &["Jacket", "Sweater", "Shirt", "Hoodie", "Trousers"],
        Category::Accessories => &["Belt", "Sunglasses", "Scarf", "Wallet", "Gloves"],
        Category::Watches => &["Chronograph", "Smartwatch", "Diver Watch", "Field Watch"],
        Category::Bags => &["Backpack", "Tote", "Duffel", "Messenger Bag", "Sling"],
    }
}

/// Generate a reproducible catalog of `count` items.
///
/// Prices fall in `[5, 500)` rounded to cents, ratings in `[1.0, 5.0]`
/// rounded to one decimal. The same seed always yields the same catalog.
pub fn synthetic_catalog(count: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
            let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("Classic");
            let noun = nouns(category).choose(&mut rng).copied().unwrap_or("Item");
            let price = (rng.random_range(5.0..500.0_f64) * 100.0).round() / 100.0;
            let rating = (rng.random_range(1.0..=5.0_f64) * 10.0).round() / 10.0;

            Item::new(
                i as u32 + 1,
                format!("{adjective} {noun}"),
                format!("{adjective} {} for daily use", noun.to_lowercase()),
                category,
                price,
                rating,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_is_valid() {
        let items = sample_catalog();
        let ids: HashSet<u32> = items.iter().map(|item| item.id).collect();

        assert_eq!(ids.len(), items.len());
        for item in &items {
            assert!(item.validate().is_ok(), "invalid sample item {}", item.id);
        }
    }

    #[test]
    fn test_synthetic_catalog_is_reproducible() {
        let a = synthetic_catalog(50, 7);
        let b = synthetic_catalog(50, 7);
        let c = synthetic_catalog(50, 8);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_synthetic_catalog_respects_bounds() {
        for item in synthetic_catalog(500, 42) {
            assert!(item.validate().is_ok());
            assert!(item.price >= 5.0 && item.price <= 500.0);
        }
    }
}
