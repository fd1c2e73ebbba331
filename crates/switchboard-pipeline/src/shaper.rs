//! Wide-to-long reshape of the forecast table.
//!
//! The forecast sheet carries one row per month and one column per
//! channel/line-of-business combination. The shaper melts that into
//! one observation per (month, column) pair and splits each column
//! label into its channel and line of business.

use switchboard_data::{CellValue, RawTable};

use crate::channel::Channel;
use crate::error::{PipelineError, Result};

/// One long-form volume observation.
///
/// The volume cell stays raw here; numeric coercion happens in the
/// join stage so that a non-numeric cell becomes a null volume instead
/// of dropping the row.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRow {
    /// Month label the observation belongs to.
    pub month: String,
    /// Channel extracted from the column label.
    pub channel: Channel,
    /// Line of business extracted from the column label.
    pub lob: String,
    /// Raw volume cell.
    pub volume: CellValue,
}

/// Month labels live in the second column of the forecast sheet.
const MONTH_COLUMN: usize = 1;

/// Reshape the raw forecast table into long-form volume rows.
///
/// Rows whose month cell is blank or not a text label are dropped
/// (this filters out banner and summary rows); observations with a
/// blank volume cell are dropped. Every other column of the sheet,
/// including the leading metadata column, becomes one observation per
/// retained month.
pub fn shape_forecast(table: &RawTable) -> Result<Vec<VolumeRow>> {
    if table.width() <= MONTH_COLUMN {
        return Err(PipelineError::NoMonthColumn(table.width()));
    }

    // Split each value-column label once, not once per row.
    let labels: Vec<(usize, Channel, String)> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != MONTH_COLUMN)
        .map(|(idx, header)| {
            let (channel, lob) = Channel::split_label(header);
            (idx, channel, lob)
        })
        .collect();

    let mut rows = Vec::new();
    for row in table.rows() {
        let Some(month) = row[MONTH_COLUMN].as_text() else {
            continue;
        };

        for (idx, channel, lob) in &labels {
            let volume = &row[*idx];
            if volume.is_empty() {
                continue;
            }
            rows.push(VolumeRow {
                month: month.to_string(),
                channel: *channel,
                lob: lob.clone(),
                volume: volume.clone(),
            });
        }
    }

    tracing::debug!(observations = rows.len(), "reshaped forecast");
    Ok(rows)
}
