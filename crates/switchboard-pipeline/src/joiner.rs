//! Joining shaped volume rows against cost-per-contact rows.

use std::collections::HashMap;

use polars::prelude::*;
use switchboard_data::RawTable;

use crate::error::{PipelineError, Result};
use crate::schema;
use crate::shaper::{VolumeRow, shape_forecast};

/// Build the volume-side frame from shaped rows.
///
/// Volume is coerced to numeric here: a volume cell that cannot be
/// read as a number becomes null and the row is kept, so it still
/// shows up in volume-independent aggregates.
pub fn volume_frame(rows: &[VolumeRow]) -> Result<DataFrame> {
    let months: Vec<String> = rows.iter().map(|r| r.month.clone()).collect();
    let channels: Vec<&str> = rows.iter().map(|r| r.channel.as_str()).collect();
    let lobs: Vec<String> = rows.iter().map(|r| r.lob.clone()).collect();
    let volumes: Vec<Option<f64>> = rows.iter().map(|r| r.volume.to_number()).collect();

    let df = DataFrame::new(vec![
        Series::new(schema::MONTH.into(), months).into(),
        Series::new(schema::CHANNEL.into(), channels).into(),
        Series::new(schema::LOB.into(), lobs).into(),
        Series::new(schema::VOLUME.into(), volumes).into(),
    ])?;
    Ok(df)
}

/// Build the cost-side frame from the concatenated cost table.
///
/// Rows with a blank Channel or a blank Cost per Contact cell are
/// unusable cost records and are dropped before the join. Non-blank
/// but non-numeric rates (e.g. `"N/A"`) survive the drop and coerce
/// to null instead.
pub fn cost_frame(costs: &RawTable) -> Result<DataFrame> {
    let channel_idx = costs
        .column_index(schema::CHANNEL)
        .ok_or(PipelineError::MissingColumn(schema::CHANNEL))?;
    let lob_idx = costs
        .column_index(schema::LINE_OF_BUSINESS)
        .ok_or(PipelineError::MissingColumn(schema::LINE_OF_BUSINESS))?;
    let rate_idx = costs
        .column_index(schema::COST_PER_CONTACT)
        .ok_or(PipelineError::MissingColumn(schema::COST_PER_CONTACT))?;
    let language_idx = costs
        .column_index(schema::LANGUAGE)
        .ok_or(PipelineError::MissingColumn(schema::LANGUAGE))?;

    let mut channels: Vec<String> = Vec::new();
    let mut lobs: Vec<Option<String>> = Vec::new();
    let mut languages: Vec<Option<String>> = Vec::new();
    let mut rates: Vec<Option<f64>> = Vec::new();

    for row in costs.rows() {
        let Some(channel) = row[channel_idx].display_text() else {
            continue;
        };
        if row[rate_idx].is_empty() {
            continue;
        }
        channels.push(channel);
        lobs.push(row[lob_idx].display_text());
        languages.push(row[language_idx].display_text());
        rates.push(row[rate_idx].to_number());
    }

    // The join treats (Channel, Line Of Business) as unique. That is
    // assumed, not enforced: duplicates across the source sheets fan
    // out volume rows, so make them visible at least.
    let mut key_counts: HashMap<(&str, Option<&str>), usize> = HashMap::new();
    for (channel, lob) in channels.iter().zip(&lobs) {
        *key_counts
            .entry((channel.as_str(), lob.as_deref()))
            .or_default() += 1;
    }
    let duplicates = key_counts.values().filter(|&&n| n > 1).count();
    if duplicates > 0 {
        tracing::warn!(
            duplicates,
            "duplicate (Channel, Line Of Business) keys in cost table; joined rows will fan out"
        );
    }

    let df = DataFrame::new(vec![
        Series::new(schema::CHANNEL.into(), channels).into(),
        Series::new(schema::LINE_OF_BUSINESS.into(), lobs).into(),
        Series::new(schema::LANGUAGE.into(), languages).into(),
        Series::new(schema::COST_PER_CONTACT.into(), rates).into(),
    ])?;
    Ok(df)
}

/// Left-join volume rows to cost rows and derive the total cost.
///
/// Unmatched volume rows are retained with null Language, Cost per
/// Contact and Total Cost; `Total Cost = Volume × Cost per Contact`
/// propagates null from either factor.
pub fn join_costs(rows: &[VolumeRow], costs: &RawTable) -> Result<DataFrame> {
    let volume = volume_frame(rows)?;
    let cost = cost_frame(costs)?;

    let combined = volume
        .lazy()
        .join(
            cost.lazy(),
            [col(schema::CHANNEL), col(schema::LOB)],
            [col(schema::CHANNEL), col(schema::LINE_OF_BUSINESS)],
            JoinArgs::new(JoinType::Left),
        )
        .with_column(
            (col(schema::VOLUME) * col(schema::COST_PER_CONTACT)).alias(schema::TOTAL_COST),
        )
        .select([
            col(schema::MONTH),
            col(schema::CHANNEL),
            col(schema::LOB),
            col(schema::VOLUME),
            col(schema::LANGUAGE),
            col(schema::COST_PER_CONTACT),
            col(schema::TOTAL_COST),
        ])
        .collect()?;

    tracing::debug!(rows = combined.height(), "joined volume and cost");
    Ok(combined)
}

/// Run the full transform: reshape the raw forecast table and join it
/// against the cost table.
pub fn combined_frame(forecast: &RawTable, costs: &RawTable) -> Result<DataFrame> {
    let rows = shape_forecast(forecast)?;
    join_costs(&rows, costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use switchboard_data::CellValue;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn volume_row(month: &str, channel: Channel, lob: &str, volume: CellValue) -> VolumeRow {
        VolumeRow {
            month: month.to_string(),
            channel,
            lob: lob.to_string(),
            volume,
        }
    }

    fn cost_fixture() -> RawTable {
        RawTable::new(
            vec![
                "Channel".into(),
                "Line Of Business".into(),
                "Cost per Contact".into(),
                "Language".into(),
            ],
            vec![
                vec![text("Phone"), text("Billing Support"), num(2.5), text("English")],
                vec![text("Chat"), text("Sales"), text("N/A"), text("English")],
                // Blank rate: unusable, dropped pre-join.
                vec![text("Email"), text("Tech"), CellValue::Empty, text("English")],
                // Blank channel: also dropped.
                vec![CellValue::Empty, text("Tech"), num(1.0), text("English")],
            ],
        )
    }

    #[test]
    fn test_unusable_cost_rows_dropped() {
        let df = cost_frame(&cost_fixture()).unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_missing_cost_column() {
        let table = RawTable::new(vec!["Channel".into()], vec![]);
        assert!(matches!(
            cost_frame(&table),
            Err(PipelineError::MissingColumn("Line Of Business"))
        ));
    }

    #[test]
    fn test_matched_row_gets_total_cost() {
        let rows = vec![volume_row("Jul", Channel::Phone, "Billing Support", num(100.0))];
        let df = join_costs(&rows, &cost_fixture()).unwrap();

        assert_eq!(df.height(), 1);
        let total = df
            .column(schema::TOTAL_COST)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(0);
        assert_eq!(total, Some(250.0));
    }

    #[test]
    fn test_non_numeric_rate_yields_null_total() {
        let rows = vec![volume_row("Jul", Channel::Chat, "Sales", num(50.0))];
        let df = join_costs(&rows, &cost_fixture()).unwrap();

        let rate = df
            .column(schema::COST_PER_CONTACT)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(0);
        let total = df
            .column(schema::TOTAL_COST)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(0);
        // Row is matched (Language present) but the rate is null.
        assert_eq!(rate, None);
        assert_eq!(total, None);
        let volume = df
            .column(schema::VOLUME)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(0);
        assert_eq!(volume, Some(50.0));
    }

    #[test]
    fn test_unmatched_row_retained_with_nulls() {
        let rows = vec![volume_row("Jul", Channel::Unknown, "Loyalty Program", num(7.0))];
        let df = join_costs(&rows, &cost_fixture()).unwrap();

        assert_eq!(df.height(), 1);
        let language = df
            .column(schema::LANGUAGE)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .get(0);
        assert_eq!(language, None);
    }

    #[test]
    fn test_duplicate_cost_keys_fan_out() {
        let costs = RawTable::new(
            vec![
                "Channel".into(),
                "Line Of Business".into(),
                "Cost per Contact".into(),
                "Language".into(),
            ],
            vec![
                vec![text("Chat"), text("Sales"), num(1.0), text("English")],
                vec![text("Chat"), text("Sales"), num(2.0), text("Japanese")],
            ],
        );
        let rows = vec![volume_row("Jul", Channel::Chat, "Sales", num(10.0))];
        let df = join_costs(&rows, &costs).unwrap();
        // Key uniqueness is not enforced: one volume row, two cost keys.
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_non_numeric_volume_becomes_null() {
        let rows = vec![volume_row("Jul", Channel::Phone, "Billing Support", text("tbd"))];
        let df = join_costs(&rows, &cost_fixture()).unwrap();
        let volume = df
            .column(schema::VOLUME)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(0);
        assert_eq!(volume, None);
    }
}
