//! Command line argument parsing for the Faceta CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Category;

/// Faceta - faceted product browsing with free-text query interpretation
#[derive(Parser, Debug, Clone)]
#[command(name = "faceta")]
#[command(about = "Faceted product browsing with heuristic free-text ranking")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Faceta Contributors")]
#[command(long_about = None)]
pub struct FacetaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FacetaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Filter and rank catalog items against a free-text query
    Search(SearchArgs),

    /// Show the constraints interpreted from a query
    Interpret(InterpretArgs),

    /// List catalog items and category counts
    Catalog(CatalogArgs),
}

/// Arguments for searching a catalog
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text query (omit to browse by facets only)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Catalog file (JSON or JSONL); defaults to the built-in sample catalog
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// Only items of this category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Only items priced at or below this value
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<f64>,

    /// Only items rated at or above this value
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<f64>,

    /// Maximum number of results
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Ranking configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Include per-term score breakdowns
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for interpreting a query
#[derive(Parser, Debug, Clone)]
pub struct InterpretArgs {
    /// Free-text query
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for listing a catalog
#[derive(Parser, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog file (JSON or JSONL); defaults to the built-in sample catalog
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// Only items of this category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
