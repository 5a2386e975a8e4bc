//! Command implementations for the Faceta CLI.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::catalog::{Catalog, load_catalog};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{FacetaError, Result};
use crate::query::explain;
use crate::ranking::RankingConfig;
use crate::search::{CatalogSearch, FacetFilter};

/// Execute a CLI command.
pub fn execute_command(args: FacetaArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args, &args),
        Command::Interpret(interpret_args) => {
            output_interpretation(&explain(&interpret_args.query), &args)
        }
        Command::Catalog(catalog_args) => list_catalog(catalog_args, &args),
    }
}

/// Load the catalog at `path`, or the built-in sample catalog.
pub fn open_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            load_catalog(path)
        }
        None => Ok(Catalog::sample()),
    }
}

/// Build the facet filter from command line flags.
pub fn facet_filter(args: &SearchArgs) -> Result<FacetFilter> {
    let mut filter = FacetFilter::new();
    if let Some(category) = args.category {
        filter = filter.with_category(category);
    }
    if let Some(max_price) = args.max_price {
        if !max_price.is_finite() || max_price < 0.0 {
            return Err(FacetaError::invalid_argument(format!(
                "--max-price must be a non-negative number, got {max_price}"
            )));
        }
        filter = filter.with_max_price(max_price);
    }
    if let Some(min_rating) = args.min_rating {
        if !min_rating.is_finite() {
            return Err(FacetaError::invalid_argument(format!(
                "--min-rating must be a number, got {min_rating}"
            )));
        }
        filter = filter.with_min_rating(min_rating);
    }
    Ok(filter)
}

/// Run a search and collect printable results.
pub fn search_results(args: &SearchArgs) -> Result<SearchResults> {
    if args.limit == 0 {
        return Err(FacetaError::invalid_argument("--limit must be positive"));
    }

    let filter = facet_filter(args)?;
    let config = match &args.config {
        Some(path) => {
            info!("Loading ranking config from {}", path.display());
            RankingConfig::from_file(path)?
        }
        None => RankingConfig::default(),
    };
    let catalog = open_catalog(args.catalog.as_deref())?;

    let start_time = Instant::now();
    let mut outcome = CatalogSearch::new(catalog.items(), config)?.search(&filter, &args.query);
    outcome.truncate(args.limit);
    let duration = start_time.elapsed();

    Ok(SearchResults::from_outcome(
        &outcome,
        filter,
        args.explain,
        duration.as_millis() as u64,
    ))
}

fn run_search(args: &SearchArgs, cli_args: &FacetaArgs) -> Result<()> {
    let results = search_results(args)?;
    output_search_results(&results, cli_args)
}

/// List a catalog, optionally restricted to one category.
pub fn catalog_listing(args: &CatalogArgs) -> Result<CatalogListing> {
    let catalog = open_catalog(args.catalog.as_deref())?;
    let category_counts = catalog.category_counts();
    let total_items = catalog.len();

    let items = catalog
        .into_items()
        .into_iter()
        .filter(|item| args.category.is_none_or(|category| item.category == category))
        .collect();

    Ok(CatalogListing {
        total_items,
        category_counts,
        items,
    })
}

fn list_catalog(args: &CatalogArgs, cli_args: &FacetaArgs) -> Result<()> {
    let listing = catalog_listing(args)?;
    output_catalog(&listing, cli_args)
}
