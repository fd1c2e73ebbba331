//! Switchboard command line.
//!
//! Usage:
//!   switchboard [flags]            # launch the TUI dashboard
//!   switchboard summary [flags]    # print KPIs without the TUI
//!
//! Source workbook paths and sheet names default to the planning
//! exports the dashboard was built around and can be overridden with
//! the global `--forecast`/`--costs`/`--cost-sheet` flags.

mod cli;

use anyhow::Result;
use clap::Parser;
use polars::prelude::DataFrame;
use switchboard::prelude::*;
use switchboard_dash::tui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands, OutputFormat, SummaryArgs};

fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.source_config();
    tracing::info!(
        forecast = %config.forecast_path.display(),
        costs = %config.cost_path.display(),
        "loading source workbooks"
    );
    let combined = load_combined(config)?;
    tracing::info!(rows = combined.height(), "combined frame ready");

    match args.command {
        None | Some(Commands::Dash) => tui::launch(combined),
        Some(Commands::Summary(summary)) => run_summary(&combined, &summary),
    }
}

/// Apply the flag filters and print KPIs plus chart aggregates.
fn run_summary(combined: &DataFrame, args: &SummaryArgs) -> Result<()> {
    let mut filters = FilterState::from_frame(combined)?;
    if !args.channels.is_empty() {
        filters.channels.select_only(&args.channels);
    }
    if !args.lobs.is_empty() {
        filters.lobs.select_only(&args.lobs);
    }
    if !args.languages.is_empty() {
        filters.languages.select_only(&args.languages);
    }

    let filtered = filters.apply(combined)?;
    let kpis = compute_kpis(&filtered)?;
    let charts = chart_set(&filtered)?;

    match args.format {
        OutputFormat::Json => print_json(&filtered, &kpis, &charts)?,
        OutputFormat::Text => print_text(&filtered, &kpis, &charts),
    }
    Ok(())
}

fn print_json(filtered: &DataFrame, kpis: &Kpis, charts: &ChartSet) -> Result<()> {
    let payload = serde_json::json!({
        "rows": filtered.height(),
        "kpis": kpis,
        "volume_by_lob": charts.volume_by_lob,
        "volume_by_language": charts.volume_by_language,
        "months": charts.monthly_volume.months,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_text(filtered: &DataFrame, kpis: &Kpis, charts: &ChartSet) {
    println!("Volume & Cost Summary ({} rows)", filtered.height());
    println!();
    println!("  Total Volume:          {}", kpis.total_volume_display());
    println!("  Avg Cost per Contact:  {}", kpis.avg_cost_display());
    println!("  Total Cost:            {}", kpis.total_cost_display());

    if !charts.volume_by_lob.is_empty() {
        println!();
        println!("Volume by LOB:");
        for (lob, volume) in &charts.volume_by_lob {
            println!("  {lob:<32} {volume:>12.0}");
        }
    }

    if !charts.volume_by_language.is_empty() {
        println!();
        println!("Volume by Language:");
        for (language, volume) in &charts.volume_by_language {
            println!("  {language:<32} {volume:>12.0}");
        }
    }
}
