//! End-to-end loading convenience.
//!
//! Runs the full workbook → long frame → cost join pipeline for
//! callers that do not need to hold the intermediate tables.

use polars::prelude::DataFrame;
use switchboard_data::{DataContext, SourceConfig};
use switchboard_pipeline::combined_frame;

use crate::Error;

/// Load both workbooks and produce the joined long-format frame.
pub fn load_combined(config: SourceConfig) -> Result<DataFrame, Error> {
    let ctx = DataContext::new(config);
    let tables = ctx.tables()?;
    let combined = combined_frame(&tables.forecast, &tables.costs)?;
    Ok(combined)
}
