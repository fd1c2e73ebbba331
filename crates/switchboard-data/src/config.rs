//! Source workbook configuration.

use std::path::PathBuf;

/// Where the source workbooks live and how their sheets are laid out.
///
/// The defaults match the planning workbooks this dashboard was built
/// around; every field can be overridden from the command line.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Path of the forecast workbook.
    pub forecast_path: PathBuf,
    /// Sheet holding the volume forecast.
    pub forecast_sheet: String,
    /// Zero-based row on which the forecast headers start. The rows
    /// above it are banner/metadata rows and are skipped.
    pub forecast_header_row: usize,
    /// Path of the cost-per-contact workbook.
    pub cost_path: PathBuf,
    /// Cost sheets to concatenate, one per language/region grouping.
    pub cost_sheets: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            forecast_path: PathBuf::from("Outsourced Forecast .xlsx"),
            forecast_sheet: "FY26 PLAN".to_string(),
            forecast_header_row: 4,
            cost_path: PathBuf::from(
                "Copy of OUTSIDE SERVICES_ cost per contact_FY26_April 2025.xlsx",
            ),
            // The first sheet name really does carry two spaces.
            cost_sheets: vec![
                "Global English  & MT".to_string(),
                "EMEA_LAM TPG".to_string(),
                "Japanese".to_string(),
            ],
        }
    }
}
