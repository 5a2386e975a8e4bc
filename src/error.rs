//! Error types for the Faceta library.
//!
//! Query interpretation and ranking are total and never fail. Errors only
//! surface at the edges: loading catalogs, loading ranking configuration and
//! validating command line input. All of them are represented by the
//! [`FacetaError`] enum.
//!
//! # Examples
//!
//! ```
//! use faceta::error::{FacetaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FacetaError::invalid_argument("limit must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Faceta operations.
#[derive(Error, Debug)]
pub enum FacetaError {
    /// I/O errors (reading catalog or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog-related errors (malformed or invalid items)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Ranking configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors carrying additional context
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FacetaError.
pub type Result<T> = std::result::Result<T, FacetaError>;

impl FacetaError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        FacetaError::Catalog(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FacetaError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FacetaError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FacetaError::Other(msg.into())
    }
}
