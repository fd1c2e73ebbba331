//! Worksheet reading via calamine.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::config::SourceConfig;
use crate::error::{DataError, Result};
use crate::table::{CellValue, RawTable};

/// Read one sheet of an xlsx workbook into a [`RawTable`].
///
/// `header_row` is the zero-based row holding the column headers; rows
/// above it are skipped, rows below it become data rows. Blank header
/// cells are named `Unnamed: {index}` so every column stays
/// addressable through the reshape stage.
pub fn read_sheet(path: &Path, sheet: &str, header_row: usize) -> Result<RawTable> {
    if !path.exists() {
        return Err(DataError::WorkbookNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| DataError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(DataError::SheetNotFound {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| DataError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let total_rows = range.height();
    let header_cells = rows.nth(header_row).ok_or(DataError::HeaderOffset {
        sheet: sheet.to_string(),
        header_row,
        rows: total_rows,
    })?;

    let headers: Vec<String> = header_cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::Empty => format!("Unnamed: {i}"),
            Data::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    let data_rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    let table = RawTable::new(headers, data_rows);
    tracing::debug!(
        sheet,
        rows = table.height(),
        columns = table.width(),
        "loaded worksheet"
    );
    Ok(table)
}

/// Load the forecast sheet.
pub fn load_forecast(config: &SourceConfig) -> Result<RawTable> {
    read_sheet(
        &config.forecast_path,
        &config.forecast_sheet,
        config.forecast_header_row,
    )
}

/// Load and concatenate the cost sheets.
///
/// Columns are aligned by header name across the sheets; the combined
/// table keeps every row of every sheet.
pub fn load_costs(config: &SourceConfig) -> Result<RawTable> {
    let tables = config
        .cost_sheets
        .iter()
        .map(|sheet| read_sheet(&config.cost_path, sheet, 0))
        .collect::<Result<Vec<_>>>()?;

    let combined = RawTable::concat(tables);
    tracing::info!(rows = combined.height(), "concatenated cost sheets");
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_workbook_is_fatal() {
        let result = read_sheet(Path::new("no-such-workbook.xlsx"), "FY26 PLAN", 4);
        assert!(matches!(result, Err(DataError::WorkbookNotFound { .. })));
    }

    #[test]
    fn test_load_costs_missing_workbook() {
        let config = SourceConfig {
            cost_path: PathBuf::from("also-missing.xlsx"),
            ..SourceConfig::default()
        };
        let result = load_costs(&config);
        assert!(matches!(result, Err(DataError::WorkbookNotFound { .. })));
    }
}
