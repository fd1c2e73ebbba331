#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/switchboard-ops/switchboard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod error;
pub mod joiner;
pub mod schema;
pub mod shaper;

pub use channel::Channel;
pub use error::{PipelineError, Result};
pub use joiner::{combined_frame, cost_frame, join_costs, volume_frame};
pub use shaper::{VolumeRow, shape_forecast};

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
