//! Raw tabular data as read from a worksheet.
//!
//! Worksheet cells are converted into an owned [`CellValue`] grid so
//! the downstream reshape and join stages can be exercised without
//! binary workbook fixtures. Numeric coercion lives here as well:
//! a cell that cannot be read as a number coerces to `None` rather
//! than failing, so one bad cell never aborts the pipeline.

use calamine::Data;

/// A single worksheet cell after loading.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Textual cell content.
    Text(String),
    /// Numeric cell content (floats, integers, booleans, date serials).
    Number(f64),
    /// Blank or unreadable cell.
    Empty,
}

impl CellValue {
    /// Whether the cell is blank.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The cell's text, only for textual cells.
    ///
    /// Numeric cells return `None`: the forecast month column keeps
    /// only rows whose month is an actual label, which is what filters
    /// out summary and total rows.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// A display string for the cell, if it has content.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Empty => None,
        }
    }

    /// Coerce the cell to a number, `None` when it cannot be read as
    /// one (e.g. `"N/A"`).
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Empty => None,
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::String(s) => Self::Text(s.clone()),
            Data::Float(f) => Self::Number(*f),
            Data::Int(i) => Self::Number(*i as f64),
            Data::Bool(b) => Self::Number(f64::from(*b)),
            Data::DateTime(dt) => Self::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Self::Text(s.clone()),
            Data::Empty | Data::Error(_) => Self::Empty,
        }
    }
}

/// Render a numeric cell without a trailing `.0` for whole numbers.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// A worksheet as headers plus rows of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Create a table from headers and rows. Rows narrower than the
    /// header are padded with empty cells.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        Self { headers, rows }
    }

    /// Column headers, in sheet order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Concatenate tables, aligning columns by header name.
    ///
    /// Headers form the union in first-seen order; cells missing from
    /// a table are empty. No dedup, no row loss: the output height is
    /// the sum of the input heights.
    pub fn concat(tables: Vec<Self>) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for table in &tables {
            for h in &table.headers {
                if !headers.contains(h) {
                    headers.push(h.clone());
                }
            }
        }

        let mut rows = Vec::new();
        for table in tables {
            // Map source column positions onto the unioned header set.
            let mapping: Vec<usize> = headers
                .iter()
                .map(|h| table.column_index(h).unwrap_or(usize::MAX))
                .collect();
            for row in table.rows {
                let merged: Vec<CellValue> = mapping
                    .iter()
                    .map(|&idx| row.get(idx).cloned().unwrap_or(CellValue::Empty))
                    .collect();
                rows.push(merged);
            }
        }

        Self { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_cell_coercion() {
        assert_eq!(CellValue::Number(3.5).to_number(), Some(3.5));
        assert_eq!(text("12.25").to_number(), Some(12.25));
        assert_eq!(text(" 7 ").to_number(), Some(7.0));
        assert_eq!(text("N/A").to_number(), None);
        assert_eq!(CellValue::Empty.to_number(), None);
    }

    #[test]
    fn test_as_text_is_text_only() {
        assert_eq!(text("Jan").as_text(), Some("Jan"));
        assert_eq!(CellValue::Number(1.0).as_text(), None);
        assert_eq!(CellValue::Empty.as_text(), None);
    }

    #[test]
    fn test_from_calamine_data() {
        assert_eq!(CellValue::from(&Data::Int(4)), CellValue::Number(4.0));
        assert_eq!(CellValue::from(&Data::Bool(true)), CellValue::Number(1.0));
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
        assert_eq!(
            CellValue::from(&Data::String("Chat".into())),
            text("Chat")
        );
    }

    #[test]
    fn test_short_rows_padded() {
        let t = RawTable::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Number(1.0)]],
        );
        assert_eq!(t.rows()[0].len(), 2);
        assert_eq!(t.rows()[0][1], CellValue::Empty);
    }

    #[test]
    fn test_concat_aligns_by_header_and_keeps_all_rows() {
        let a = RawTable::new(
            vec!["Channel".into(), "Cost per Contact".into()],
            vec![vec![text("Chat"), CellValue::Number(1.0)]],
        );
        let b = RawTable::new(
            vec!["Channel".into(), "Language".into()],
            vec![
                vec![text("Phone"), text("Japanese")],
                vec![text("Email"), text("Japanese")],
            ],
        );

        let merged = RawTable::concat(vec![a, b]);
        assert_eq!(
            merged.headers(),
            &["Channel", "Cost per Contact", "Language"]
        );
        assert_eq!(merged.height(), 3);
        // Column absent from the second sheet is empty there.
        assert_eq!(merged.rows()[1][1], CellValue::Empty);
        assert_eq!(merged.rows()[1][2], text("Japanese"));
    }
}
