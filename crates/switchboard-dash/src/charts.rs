//! Chart series aggregation over the filtered frame.
//!
//! Four charts, all sum-aggregated: monthly volume and monthly total
//! cost by channel (line), total volume by line of business and by
//! language (bar, descending). Null grouping keys are excluded, which
//! is what keeps unmatched rows out of the language chart.

use std::collections::BTreeMap;

use polars::prelude::*;
use switchboard_pipeline::schema;

use crate::error::Result;

/// One line-chart series: the channel name and its points as
/// (month-axis index, summed value).
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSeries {
    /// Channel the series belongs to.
    pub name: String,
    /// Points indexed into [`MonthlySeries::months`]. Months with no
    /// observation for the channel are simply absent.
    pub points: Vec<(usize, f64)>,
}

/// A monthly line chart: the shared month axis plus one series per
/// channel.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    /// Month axis labels, lexicographically ascending.
    pub months: Vec<String>,
    /// Per-channel series, sorted by channel name.
    pub channels: Vec<ChannelSeries>,
}

impl MonthlySeries {
    /// Largest point value across all series, for axis scaling.
    pub fn max_value(&self) -> f64 {
        self.channels
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, v)| *v))
            .fold(0.0, f64::max)
    }
}

/// Sum `value_col` per (month, channel) over the filtered frame.
///
/// An empty frame yields an empty axis and no series.
pub fn monthly_by_channel(df: &DataFrame, value_col: &str) -> Result<MonthlySeries> {
    let grouped = df
        .clone()
        .lazy()
        .filter(
            col(schema::MONTH)
                .is_not_null()
                .and(col(schema::CHANNEL).is_not_null()),
        )
        .group_by([col(schema::MONTH), col(schema::CHANNEL)])
        .agg([col(value_col).sum()])
        .sort([schema::MONTH, schema::CHANNEL], SortMultipleOptions::default())
        .collect()?;

    let months_col = grouped.column(schema::MONTH)?.as_materialized_series().str()?.clone();
    let channels_col = grouped.column(schema::CHANNEL)?.as_materialized_series().str()?.clone();
    let values_col = grouped.column(value_col)?.as_materialized_series().f64()?.clone();

    let mut months: Vec<String> = months_col
        .into_iter()
        .flatten()
        .map(String::from)
        .collect();
    months.sort_unstable();
    months.dedup();

    let month_index: BTreeMap<&str, usize> = months
        .iter()
        .enumerate()
        .map(|(i, m)| (m.as_str(), i))
        .collect();

    let mut series: BTreeMap<String, Vec<(usize, f64)>> = BTreeMap::new();
    for ((month, channel), value) in months_col
        .into_iter()
        .zip(channels_col.into_iter())
        .zip(values_col.into_iter())
    {
        let (Some(month), Some(channel)) = (month, channel) else {
            continue;
        };
        let idx = month_index[month];
        series
            .entry(channel.to_string())
            .or_default()
            .push((idx, value.unwrap_or(0.0)));
    }

    let channels = series
        .into_iter()
        .map(|(name, points)| ChannelSeries { name, points })
        .collect();

    Ok(MonthlySeries { months, channels })
}

/// Sum `value_col` per distinct value of `key_col`, descending by the
/// summed value. Rows with a null key are excluded.
pub fn totals_by(df: &DataFrame, key_col: &str, value_col: &str) -> Result<Vec<(String, f64)>> {
    let grouped = df
        .clone()
        .lazy()
        .filter(col(key_col).is_not_null())
        .group_by([col(key_col)])
        .agg([col(value_col).sum()])
        .sort(
            [value_col],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;

    let keys = grouped.column(key_col)?.as_materialized_series().str()?.clone();
    let values = grouped.column(value_col)?.as_materialized_series().f64()?.clone();

    let totals = keys
        .into_iter()
        .zip(values.into_iter())
        .filter_map(|(key, value)| Some((key?.to_string(), value.unwrap_or(0.0))))
        .collect();
    Ok(totals)
}

/// All four chart series for one filtered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    /// Monthly volume by channel.
    pub monthly_volume: MonthlySeries,
    /// Monthly total cost by channel.
    pub monthly_cost: MonthlySeries,
    /// Total volume per line of business, descending.
    pub volume_by_lob: Vec<(String, f64)>,
    /// Total volume per language, descending.
    pub volume_by_language: Vec<(String, f64)>,
}

/// Aggregate every chart over the filtered frame.
pub fn chart_set(df: &DataFrame) -> Result<ChartSet> {
    Ok(ChartSet {
        monthly_volume: monthly_by_channel(df, schema::VOLUME)?,
        monthly_cost: monthly_by_channel(df, schema::TOTAL_COST)?,
        volume_by_lob: totals_by(df, schema::LOB, schema::VOLUME)?,
        volume_by_language: totals_by(df, schema::LANGUAGE, schema::VOLUME)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::combined_fixture;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_volume_series() {
        let series = monthly_by_channel(&combined_fixture(), schema::VOLUME).unwrap();

        // Months lexicographic: Aug before Jul, matching the sorted
        // group keys of the original dashboard.
        assert_eq!(series.months, vec!["Aug", "Jul"]);
        assert_eq!(series.channels.len(), 3);

        let chat = series.channels.iter().find(|s| s.name == "Chat").unwrap();
        // Chat Jul = 40 + 20, Chat Aug = 35.
        assert_eq!(chat.points, vec![(0, 35.0), (1, 60.0)]);
    }

    #[test]
    fn test_monthly_cost_sums_nulls_as_zero() {
        let series = monthly_by_channel(&combined_fixture(), schema::TOTAL_COST).unwrap();
        let unknown = series
            .channels
            .iter()
            .find(|s| s.name == "Unknown")
            .unwrap();
        // The unmatched row has a null total cost; its group sums to 0.
        assert_eq!(unknown.points, vec![(1, 0.0)]);
    }

    #[test]
    fn test_totals_by_lob_descending() {
        let totals = totals_by(&combined_fixture(), schema::LOB, schema::VOLUME).unwrap();
        let volumes: Vec<f64> = totals.iter().map(|(_, v)| *v).collect();
        assert!(volumes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(totals[0].0, "Billing Support");
        assert_relative_eq!(totals[0].1, 220.0);
    }

    #[test]
    fn test_totals_by_language_excludes_null_keys() {
        let totals = totals_by(&combined_fixture(), schema::LANGUAGE, schema::VOLUME).unwrap();
        let labels: Vec<&str> = totals.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, vec!["English", "Japanese"]);
    }

    #[test]
    fn test_empty_frame_renders_empty() {
        let df = combined_fixture().head(Some(0));
        let charts = chart_set(&df).unwrap();
        assert!(charts.monthly_volume.months.is_empty());
        assert!(charts.monthly_volume.channels.is_empty());
        assert!(charts.volume_by_lob.is_empty());
        assert!(charts.volume_by_language.is_empty());
    }

    #[test]
    fn test_max_value() {
        let charts = chart_set(&combined_fixture()).unwrap();
        assert_relative_eq!(charts.monthly_volume.max_value(), 120.0);
    }
}
