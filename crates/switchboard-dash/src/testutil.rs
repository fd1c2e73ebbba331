//! Shared combined-frame fixtures for unit tests.

use polars::prelude::*;

/// A combined frame with an unparseable rate (null cost fields on a
/// matched row) and an unmatched row (null language).
pub(crate) fn combined_fixture() -> DataFrame {
    let months = ["Jul", "Aug", "Jul", "Aug", "Jul", "Jul"];
    let channels = ["Phone", "Phone", "Chat", "Chat", "Chat", "Unknown"];
    let lobs = [
        "Billing Support",
        "Billing Support",
        "Sales",
        "Sales",
        "Support JP",
        "Loyalty Program",
    ];
    let volumes = [
        Some(100.0),
        Some(120.0),
        Some(40.0),
        Some(35.0),
        Some(20.0),
        Some(7.0),
    ];
    let languages = [
        Some("English"),
        Some("English"),
        Some("English"),
        Some("English"),
        Some("Japanese"),
        None,
    ];
    let rates = [Some(2.5), Some(2.5), Some(1.2), Some(1.2), None, None];
    let totals = [Some(250.0), Some(300.0), Some(48.0), Some(42.0), None, None];

    DataFrame::new(vec![
        Series::new("Month".into(), months.as_slice()).into(),
        Series::new("Channel".into(), channels.as_slice()).into(),
        Series::new("LOB".into(), lobs.as_slice()).into(),
        Series::new("Volume".into(), volumes.as_slice()).into(),
        Series::new("Language".into(), languages.as_slice()).into(),
        Series::new("Cost per Contact".into(), rates.as_slice()).into(),
        Series::new("Total Cost".into(), totals.as_slice()).into(),
    ])
    .unwrap()
}

/// A combined frame where every row matched a cost record: no null
/// dimension values, no null rates.
pub(crate) fn fully_matched_fixture() -> DataFrame {
    let months = ["Jul", "Aug", "Jul", "Aug"];
    let channels = ["Phone", "Phone", "Chat", "Chat"];
    let lobs = ["Billing Support", "Billing Support", "Sales", "Sales"];
    let volumes = [100.0, 120.0, 40.0, 35.0];
    let languages = ["English", "English", "English", "English"];
    let rates = [2.5, 2.5, 1.2, 1.2];
    let totals = [250.0, 300.0, 48.0, 42.0];

    DataFrame::new(vec![
        Series::new("Month".into(), months.as_slice()).into(),
        Series::new("Channel".into(), channels.as_slice()).into(),
        Series::new("LOB".into(), lobs.as_slice()).into(),
        Series::new("Volume".into(), volumes.as_slice()).into(),
        Series::new("Language".into(), languages.as_slice()).into(),
        Series::new("Cost per Contact".into(), rates.as_slice()).into(),
        Series::new("Total Cost".into(), totals.as_slice()).into(),
    ])
    .unwrap()
}
