//! Error types for the presentation layer.

use thiserror::Error;

/// Result type for dashboard computations.
pub type Result<T> = std::result::Result<T, DashError>;

/// Errors that can occur while filtering and aggregating.
#[derive(Debug, Error)]
pub enum DashError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
