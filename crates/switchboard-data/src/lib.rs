#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/switchboard-ops/switchboard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod error;
pub mod table;
pub mod workbook;

pub use config::SourceConfig;
pub use context::{DataContext, LoadedTables};
pub use error::{DataError, Result};
pub use table::{CellValue, RawTable};
pub use workbook::{load_costs, load_forecast, read_sheet};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
