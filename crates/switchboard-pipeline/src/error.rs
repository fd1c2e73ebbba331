//! Error types for the transform stages.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while reshaping and joining.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Forecast table is too narrow to carry a month column
    #[error("forecast table has no month column: need at least 2 columns, got {0}")]
    NoMonthColumn(usize),

    /// A required column is missing from the cost table
    #[error("cost table is missing column {0:?}")]
    MissingColumn(&'static str),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
