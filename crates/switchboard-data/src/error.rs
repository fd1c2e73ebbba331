//! Error types for workbook loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading source workbooks.
///
/// All of these are fatal to the session: the dashboard has nothing to
/// show without its source tables, so load failures propagate to the
/// caller instead of degrading.
#[derive(Debug, Error)]
pub enum DataError {
    /// Source workbook does not exist at the configured path
    #[error("workbook not found: {path}")]
    WorkbookNotFound {
        /// Configured path that was checked
        path: PathBuf,
    },

    /// Workbook exists but could not be opened or read
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        /// Path of the workbook
        path: PathBuf,
        /// Underlying calamine error
        #[source]
        source: calamine::XlsxError,
    },

    /// A named sheet is missing from the workbook
    #[error("sheet {sheet:?} not found in workbook {path}")]
    SheetNotFound {
        /// Name of the missing sheet
        sheet: String,
        /// Path of the workbook
        path: PathBuf,
    },

    /// Configured header row lies beyond the sheet contents
    #[error("header row {header_row} is out of range for sheet {sheet:?} ({rows} rows)")]
    HeaderOffset {
        /// Name of the sheet
        sheet: String,
        /// Configured zero-based header row
        header_row: usize,
        /// Number of rows actually present
        rows: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
