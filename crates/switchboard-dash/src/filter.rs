//! Multi-select filter dimensions over the combined frame.

use polars::prelude::*;
use switchboard_pipeline::schema;

use crate::error::Result;

/// One multi-select filter dimension.
///
/// The option set is the sorted distinct non-null values observed in
/// the underlying column; every option starts selected.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDimension {
    column: &'static str,
    options: Vec<String>,
    selected: Vec<bool>,
}

impl FilterDimension {
    /// Build a dimension from the distinct non-null values of a column.
    pub fn from_column(df: &DataFrame, column: &'static str) -> Result<Self> {
        let mut options: Vec<String> = df
            .column(column)?
            .as_materialized_series()
            .str()?
            .into_iter()
            .flatten()
            .map(String::from)
            .collect();
        options.sort_unstable();
        options.dedup();

        let selected = vec![true; options.len()];
        Ok(Self {
            column,
            options,
            selected,
        })
    }

    /// Column this dimension filters.
    pub const fn column(&self) -> &'static str {
        self.column
    }

    /// Selectable options, sorted.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the dimension has no options at all.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether the option at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Whether every option is selected.
    pub fn all_selected(&self) -> bool {
        self.selected.iter().all(|&s| s)
    }

    /// Flip the selection of the option at `index`.
    pub fn toggle(&mut self, index: usize) {
        if let Some(slot) = self.selected.get_mut(index) {
            *slot = !*slot;
        }
    }

    /// Select every option.
    pub fn select_all(&mut self) {
        self.selected.fill(true);
    }

    /// Deselect every option.
    pub fn select_none(&mut self) {
        self.selected.fill(false);
    }

    /// Restrict the selection to the given values. Values not in the
    /// option set are ignored.
    pub fn select_only(&mut self, values: &[String]) {
        for (option, slot) in self.options.iter().zip(self.selected.iter_mut()) {
            *slot = values.contains(option);
        }
    }

    /// Currently selected values.
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .zip(&self.selected)
            .filter(|&(_, &s)| s)
            .map(|(o, _)| o.as_str())
            .collect()
    }

    /// Membership test for the current selection, as an expression.
    ///
    /// A null value never passes: the fold starts at `false` and
    /// `null == value` stays null, which the filter treats as false.
    fn expr(&self) -> Expr {
        self.selected_values()
            .into_iter()
            .fold(lit(false), |acc, value| {
                acc.or(col(self.column).eq(lit(value)))
            })
    }
}

/// The three filter dimensions of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Channel dimension.
    pub channels: FilterDimension,
    /// Line-of-business dimension.
    pub lobs: FilterDimension,
    /// Language dimension.
    pub languages: FilterDimension,
}

impl FilterState {
    /// Build the filter dimensions from the combined frame, every
    /// option selected.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        Ok(Self {
            channels: FilterDimension::from_column(df, schema::CHANNEL)?,
            lobs: FilterDimension::from_column(df, schema::LOB)?,
            languages: FilterDimension::from_column(df, schema::LANGUAGE)?,
        })
    }

    /// Restrict the combined frame to rows passing all three
    /// dimensions.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        let filtered = df
            .clone()
            .lazy()
            .filter(
                self.channels
                    .expr()
                    .and(self.lobs.expr())
                    .and(self.languages.expr()),
            )
            .collect()?;
        Ok(filtered)
    }
}
