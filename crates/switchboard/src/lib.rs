#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/switchboard-ops/switchboard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod etl;

// Re-export main types from sub-crates
pub use switchboard_dash as dash;
pub use switchboard_data as data;
pub use switchboard_pipeline as pipeline;

pub use etl::load_combined;

/// Any error from any pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workbook loading failed.
    #[error(transparent)]
    Data(#[from] switchboard_data::DataError),
    /// Reshaping or joining failed.
    #[error(transparent)]
    Pipeline(#[from] switchboard_pipeline::PipelineError),
    /// Aggregation or rendering failed.
    #[error(transparent)]
    Dash(#[from] switchboard_dash::DashError),
}

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use switchboard_dash::{ChartSet, FilterState, Kpis, chart_set, compute_kpis};
    pub use switchboard_data::{DataContext, SourceConfig};
    pub use switchboard_pipeline::combined_frame;

    pub use crate::Error;
    pub use crate::etl::load_combined;
}

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
