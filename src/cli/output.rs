//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Category, Item};
use crate::cli::args::{FacetaArgs, OutputFormat};
use crate::error::Result;
use crate::query::{ConstraintSet, Interpretation};
use crate::ranking::ScoreBreakdown;
use crate::search::{FacetFilter, SearchOutcome};

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub facets: FacetFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintSet>,
    pub matched_rules: Vec<String>,
    pub candidates: usize,
    pub ranked: bool,
    pub fallback: bool,
    pub duration_ms: u64,
    pub hits: Vec<SearchResultHit>,
}

/// A single search result row.
#[derive(Debug, Serialize)]
pub struct SearchResultHit {
    pub rank: usize,
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl SearchResults {
    /// Build the printable form of `outcome`. Breakdowns are kept only with `explain`.
    pub fn from_outcome(
        outcome: &SearchOutcome<'_>,
        facets: FacetFilter,
        explain: bool,
        duration_ms: u64,
    ) -> Self {
        let hits = outcome
            .hits
            .iter()
            .enumerate()
            .map(|(i, hit)| SearchResultHit {
                rank: i + 1,
                id: hit.item.id,
                name: hit.item.name.clone(),
                category: hit.item.category,
                price: hit.item.price,
                rating: hit.item.rating,
                score: hit.score,
                breakdown: hit.breakdown.filter(|_| explain),
            })
            .collect();

        SearchResults {
            query: outcome.query.clone(),
            facets,
            constraints: outcome.constraints.clone(),
            matched_rules: outcome.matched_rules.iter().map(|rule| rule.to_string()).collect(),
            candidates: outcome.candidates,
            ranked: outcome.ranked,
            fallback: outcome.fallback,
            duration_ms,
            hits,
        }
    }
}

/// Catalog listing.
#[derive(Debug, Serialize)]
pub struct CatalogListing {
    pub total_items: usize,
    pub category_counts: BTreeMap<Category, usize>,
    pub items: Vec<Item>,
}

/// Output search results in the selected format.
pub fn output_search_results(results: &SearchResults, args: &FacetaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_search_results_human(results, args);
            Ok(())
        }
        OutputFormat::Json => output_json(results, args),
    }
}

/// Output an interpretation in the selected format.
pub fn output_interpretation(interpretation: &Interpretation, args: &FacetaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_interpretation_human(interpretation, args);
            Ok(())
        }
        OutputFormat::Json => output_json(interpretation, args),
    }
}

/// Output a catalog listing in the selected format.
pub fn output_catalog(listing: &CatalogListing, args: &FacetaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_catalog_human(listing, args);
            Ok(())
        }
        OutputFormat::Json => output_json(listing, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FacetaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// One-line summary of interpreted constraints, e.g. `price<=80 rating>=4 intent=favor-cheap`.
pub fn describe_constraints(constraints: &ConstraintSet) -> String {
    let mut parts = Vec::new();
    if let Some(min_price) = constraints.min_price {
        parts.push(format!("price>={min_price}"));
    }
    if let Some(max_price) = constraints.max_price {
        parts.push(format!("price<={max_price}"));
    }
    if let Some(min_rating) = constraints.min_rating {
        parts.push(format!("rating>={min_rating}"));
    }
    if let Some(intent) = constraints.price_intent {
        parts.push(format!("intent={intent}"));
    }
    if !constraints.keywords.is_empty() {
        parts.push(format!("keywords=[{}]", constraints.keywords.join(", ")));
    }

    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(" ")
    }
}

fn describe_breakdown(breakdown: &ScoreBreakdown) -> String {
    let terms = [
        ("keywords", breakdown.keywords),
        ("hint", breakdown.category_hint),
        ("max-price", breakdown.max_price),
        ("min-price", breakdown.min_price),
        ("min-rating", breakdown.min_rating),
        ("intent", breakdown.price_intent),
        ("rating", breakdown.rating_bias),
        ("price", breakdown.price_penalty),
    ];

    terms
        .iter()
        .filter(|(_, value)| *value != 0.0)
        .map(|(name, value)| format!("{name} {value:+.2}"))
        .collect::<Vec<_>>()
        .join("  ")
}

fn output_search_results_human(results: &SearchResults, args: &FacetaArgs) {
    if args.verbosity() > 0 {
        println!("Search Results:");
        println!("═══════════════");
        if !results.query.is_empty() {
            println!("Query: {}", results.query);
        }
        println!("Facets: {}", results.facets);
        if let Some(constraints) = &results.constraints {
            println!("Constraints: {}", describe_constraints(constraints));
        }

        let mode = match (results.ranked, results.fallback) {
            (false, _) => "catalog order",
            (true, false) => "ranked",
            (true, true) => "no relevant items, catalog order",
        };
        println!("Candidates: {} ({mode})", results.candidates);
        println!("Search time: {}ms", results.duration_ms);
        println!();
    }

    if results.hits.is_empty() {
        println!("No items match the selected facets.");
        return;
    }

    for hit in &results.hits {
        let score = hit
            .score
            .map(|score| format!("  score {score:.3}"))
            .unwrap_or_default();
        println!(
            "{:>3}. [{}] {} ({})  ${:.2}  {:.1}★{score}",
            hit.rank, hit.id, hit.name, hit.category, hit.price, hit.rating
        );
        if let Some(breakdown) = &hit.breakdown {
            println!("     {}", describe_breakdown(breakdown));
        }
    }
}

fn output_interpretation_human(interpretation: &Interpretation, args: &FacetaArgs) {
    let constraints = &interpretation.constraints;

    if args.verbosity() > 0 {
        println!("Interpretation:");
        println!("═══════════════");
        println!("Query: {}", interpretation.query);
        println!();
    }

    let show = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    println!("Min price:    {}", show(constraints.min_price));
    println!("Max price:    {}", show(constraints.max_price));
    println!("Min rating:   {}", show(constraints.min_rating));
    println!(
        "Price intent: {}",
        constraints
            .price_intent
            .map(|intent| intent.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Keywords:     {}", constraints.keywords.join(", "));

    if args.verbosity() > 1 && !interpretation.matched_rules.is_empty() {
        println!("Rules:        {}", interpretation.matched_rules.join(", "));
    }
}

fn output_catalog_human(listing: &CatalogListing, args: &FacetaArgs) {
    if args.verbosity() > 0 {
        println!("Catalog:");
        println!("════════");
        println!("Total items: {}", listing.total_items);
        for (category, count) in &listing.category_counts {
            println!("  {category} ({count})");
        }
        println!();
    }

    for item in &listing.items {
        println!(
            "[{}] {} ({})  ${:.2}  {:.1}★",
            item.id, item.name, item.category, item.price, item.rating
        );
    }
}
