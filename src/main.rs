//! Wiring & DI. Entry point: load config, pick adapters, inject into services, run the command.
//! No business logic here.

use anyhow::Context;
use clap::Parser;
use client_dash::adapters::cli::{render, Cli, Command, OutputFormat};
use client_dash::adapters::export::FsReportSink;
use client_dash::adapters::source::{CsvDirSource, JsonFileSource, SampleSource};
use client_dash::ports::{RecordSource, ReportSink};
use client_dash::shared::config::{AppConfig, SourceKind};
use client_dash::usecases::{DashboardService, ReportService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Logs go to stderr so `summary --format json` stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cli = Cli::parse();

    let cfg = AppConfig::load().context("invalid configuration")?;

    let dimensions = cfg.dimension_set().context("invalid dimension labels")?;
    let source_kind = match cli.source {
        Some(kind) => kind,
        None => cfg.source_kind_or_default()?,
    };
    let as_of = match cli.as_of {
        Some(date) => date,
        None => cfg
            .as_of()?
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    // --- Record source ---
    let source: Arc<dyn RecordSource> = match source_kind {
        SourceKind::Sample => Arc::new(SampleSource::new()),
        SourceKind::Csv => Arc::new(CsvDirSource::new(
            cli.input.clone().unwrap_or_else(|| cfg.data_dir_or_default()),
        )),
        SourceKind::Json => Arc::new(JsonFileSource::new(
            cli.input.clone().unwrap_or_else(|| cfg.input_or_default()),
        )),
    };

    // --- Report sink ---
    let output_dir = cli.output.clone().unwrap_or_else(|| cfg.output_dir_or_default());
    let sink: Arc<dyn ReportSink> = Arc::new(FsReportSink::new(&output_dir));

    info!(
        source = %source.describe(),
        output = %output_dir.display(),
        %as_of,
        "client-dash starting"
    );

    // --- Services ---
    let dashboard = DashboardService::new(dimensions, cfg.dashboard_options());
    let service = ReportService::new(Arc::clone(&source), sink, dashboard);

    match cli.command {
        Command::Summary { dimension, format } => {
            let summary = service.summary(dimension).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Table => {
                    print!("{}", render::summary_table(dimension.title(), &summary))
                }
            }
        }
        Command::Dashboard => {
            let (data, path) = service.dashboard(as_of).await?;
            print!("{}", render::key_metrics(&data.key_metrics));
            println!("dashboard written to {}", path.display());
        }
        Command::Export => {
            let outcome = service.export(as_of).await?;
            println!("dashboard written to {}", outcome.dashboard.display());
            for path in &outcome.reports {
                println!("report written to {}", path.display());
            }
        }
    }

    Ok(())
}
