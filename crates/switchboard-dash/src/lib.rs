#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/switchboard-ops/switchboard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod charts;
pub mod error;
pub mod filter;
pub mod kpi;
pub mod tui;

#[cfg(test)]
mod testutil;

pub use charts::{ChartSet, ChannelSeries, MonthlySeries, chart_set, monthly_by_channel, totals_by};
pub use error::{DashError, Result};
pub use filter::{FilterDimension, FilterState};
pub use kpi::{Kpis, compute_kpis, format_currency, format_thousands};
pub use tui::{DashApp, DashConfig, Theme, launch};

/// Version of the crate, as set in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_not_empty() {
        assert!(!VERSION.is_empty());
    }
}
