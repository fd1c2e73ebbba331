//! KPI computation and display formatting.

use polars::prelude::*;
use serde::Serialize;
use switchboard_pipeline::schema;

use crate::error::Result;

/// The three headline metrics over the filtered frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    /// Sum of Volume.
    pub total_volume: f64,
    /// Null-excluding mean of Cost per Contact; NaN when the filtered
    /// set has no non-null cost.
    pub avg_cost_per_contact: f64,
    /// Sum of Total Cost.
    pub total_cost: f64,
}

impl Kpis {
    /// Total volume as an integer with thousands separators.
    pub fn total_volume_display(&self) -> String {
        format_thousands(self.total_volume as i64)
    }

    /// Average cost per contact, currency-formatted to 2 decimals.
    pub fn avg_cost_display(&self) -> String {
        format!("${:.2}", self.avg_cost_per_contact)
    }

    /// Total cost, currency-formatted with thousands separators.
    pub fn total_cost_display(&self) -> String {
        format_currency(self.total_cost)
    }
}

/// Compute the KPIs over a (typically filtered) combined frame.
///
/// Sums treat nulls as zero contribution; the mean excludes them. An
/// empty frame yields zero sums and a NaN mean.
pub fn compute_kpis(df: &DataFrame) -> Result<Kpis> {
    let total_volume: f64 = df
        .column(schema::VOLUME)?
        .as_materialized_series()
        .sum()?;
    let avg_cost_per_contact = df
        .column(schema::COST_PER_CONTACT)?
        .as_materialized_series()
        .mean()
        .unwrap_or(f64::NAN);
    let total_cost: f64 = df
        .column(schema::TOTAL_COST)?
        .as_materialized_series()
        .sum()?;

    Ok(Kpis {
        total_volume,
        avg_cost_per_contact,
        total_cost,
    })
}

/// Format an integer with thousands separators: `1234567` → `1,234,567`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a currency amount: `1234.5` → `$1,234.50`. NaN stays
/// visible as `$NaN` rather than being masked.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let negative = value < 0.0;
    let abs = value.abs();
    let whole = abs.trunc() as i64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as i64;
    // Rounding the fraction can carry into the integer part.
    let (whole, cents) = if cents >= 100 {
        (whole + 1, 0)
    } else {
        (whole, cents)
    };
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{cents:02}", format_thousands(whole))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::combined_fixture;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_kpis_over_fixture() {
        let kpis = compute_kpis(&combined_fixture()).unwrap();
        assert_relative_eq!(kpis.total_volume, 322.0);
        // Mean over the four non-null rates only.
        assert_relative_eq!(kpis.avg_cost_per_contact, 1.85);
        assert_relative_eq!(kpis.total_cost, 640.0);
    }

    #[test]
    fn test_empty_frame_kpis() {
        let df = combined_fixture().head(Some(0));
        let kpis = compute_kpis(&df).unwrap();
        assert_eq!(kpis.total_volume, 0.0);
        assert!(kpis.avg_cost_per_contact.is_nan());
        assert_eq!(kpis.avg_cost_display(), "$NaN");
    }

    #[rstest]
    #[case(0, "0")]
    #[case(7, "7")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(1_234_567, "1,234,567")]
    #[case(-12_345, "-12,345")]
    fn test_format_thousands(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(format_thousands(value), expected);
    }

    #[rstest]
    #[case(0.0, "$0.00")]
    #[case(1234.5, "$1,234.50")]
    #[case(999.999, "$1,000.00")]
    #[case(-2500.25, "-$2,500.25")]
    fn test_format_currency(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[test]
    fn test_displays() {
        let kpis = compute_kpis(&combined_fixture()).unwrap();
        assert_eq!(kpis.total_volume_display(), "322");
        assert_eq!(kpis.avg_cost_display(), "$1.85");
        assert_eq!(kpis.total_cost_display(), "$640.00");
    }
}
