//! clap definitions. Flags left unset fall back to `AppConfig`.

use crate::domain::Dimension;
use crate::shared::config::SourceKind;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "client-dash")]
#[command(about = "Client management dashboard metrics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Record source: sample, csv or json
    #[arg(long, global = true)]
    pub source: Option<SourceKind>,

    /// CSV directory (csv source) or dataset file (json source)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output directory for dashboard JSON and CSV reports
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Reference date for upcoming/overdue (YYYY-MM-DD). Defaults to today
    #[arg(long, global = true)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the summary of one dimension
    Summary {
        /// task-status, task-priority, meeting-type, meeting-status,
        /// communication-type or communication-direction
        dimension: Dimension,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Build the dashboard and write dashboard_data.json
    Dashboard,
    /// Write dashboard_data.json plus the CSV reports
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
