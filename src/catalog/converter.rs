//! Catalog converters for loading items from files.
//!
//! Two formats are supported:
//!
//! - JSON: a single array of item objects
//! - JSONL (JSON Lines): one item object per line
//!
//! ```jsonl
//! {"id": 1, "name": "Trail Shoes", "description": "Grippy outsole", "category": "Shoes", "price": 69.0, "rating": 4.1}
//! {"id": 2, "name": "Headphones", "description": "Noise cancelling", "category": "Electronics", "price": 129.99, "rating": 4.5}
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::catalog::Catalog;
use crate::catalog::item::Item;
use crate::error::{FacetaError, Result};

/// A trait for converting serialized catalogs into items.
pub trait CatalogConverter {
    /// Parse the whole input into items.
    fn parse(&self, input: &str) -> Result<Vec<Item>>;

    /// Name of the format handled by this converter.
    fn name(&self) -> &'static str;
}

/// Converter for a JSON array of items.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCatalogConverter;

impl CatalogConverter for JsonCatalogConverter {
    fn parse(&self, input: &str) -> Result<Vec<Item>> {
        serde_json::from_str(input)
            .map_err(|e| FacetaError::catalog(format!("Failed to parse JSON catalog: {e}")))
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// Converter for JSON Lines, one item per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlCatalogConverter;

impl CatalogConverter for JsonlCatalogConverter {
    fn parse(&self, input: &str) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for (line_num, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue; // Skip empty lines
            }
            let item = serde_json::from_str(line).map_err(|e| {
                FacetaError::catalog(format!("Failed to parse line {}: {e}", line_num + 1))
            })?;
            items.push(item);
        }
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "jsonl"
    }
}

/// Parse a JSON array of items.
pub fn parse_json(input: &str) -> Result<Vec<Item>> {
    JsonCatalogConverter.parse(input)
}

/// Parse JSON Lines, one item per line.
pub fn parse_jsonl(input: &str) -> Result<Vec<Item>> {
    JsonlCatalogConverter.parse(input)
}

/// Pick a converter from the file extension. Unknown extensions are read as JSON.
pub fn converter_for_path(path: &Path) -> Box<dyn CatalogConverter> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jsonl") | Some("ndjson") => Box::new(JsonlCatalogConverter),
        _ => Box::new(JsonCatalogConverter),
    }
}

/// Load and validate a catalog file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;

    let converter = converter_for_path(path);
    let items = converter.parse(&input)?;
    debug!(
        "Loaded {} items from {} ({})",
        items.len(),
        path.display(),
        converter.name()
    );

    Catalog::new(items)
}
