//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use switchboard_data::SourceConfig;

/// Contact-center volume and cost analytics over spreadsheet exports.
#[derive(Debug, Parser)]
#[command(name = "switchboard", version, about)]
pub struct Cli {
    /// Forecast workbook path.
    #[arg(long, global = true)]
    pub forecast: Option<PathBuf>,

    /// Forecast sheet name.
    #[arg(long, global = true)]
    pub forecast_sheet: Option<String>,

    /// Zero-based header row of the forecast sheet.
    #[arg(long, global = true)]
    pub header_row: Option<usize>,

    /// Cost-per-contact workbook path.
    #[arg(long, global = true)]
    pub costs: Option<PathBuf>,

    /// Cost sheet names to concatenate (repeatable).
    #[arg(long = "cost-sheet", global = true)]
    pub cost_sheets: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Build the source configuration, starting from the defaults and
    /// applying any overrides given on the command line.
    pub fn source_config(&self) -> SourceConfig {
        let mut config = SourceConfig::default();
        if let Some(path) = &self.forecast {
            config.forecast_path = path.clone();
        }
        if let Some(sheet) = &self.forecast_sheet {
            config.forecast_sheet = sheet.clone();
        }
        if let Some(row) = self.header_row {
            config.forecast_header_row = row;
        }
        if let Some(path) = &self.costs {
            config.cost_path = path.clone();
        }
        if !self.cost_sheets.is_empty() {
            config.cost_sheets = self.cost_sheets.clone();
        }
        config
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive terminal dashboard (default).
    Dash,
    /// Print KPIs and chart aggregates without entering the TUI.
    Summary(SummaryArgs),
}

/// Arguments for the `summary` subcommand.
#[derive(Debug, clap::Args)]
pub struct SummaryArgs {
    /// Restrict to these channels (repeatable).
    #[arg(long = "channel")]
    pub channels: Vec<String>,

    /// Restrict to these lines of business (repeatable).
    #[arg(long = "lob")]
    pub lobs: Vec<String>,

    /// Restrict to these languages (repeatable).
    #[arg(long = "language")]
    pub languages: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Summary output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}
