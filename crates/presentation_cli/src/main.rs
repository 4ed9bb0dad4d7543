//! RiskAtlas CLI
//!
//! Runs the enrichment pipeline and renders the risk map.

#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use application::{
    ports::{GeocodingPort, ResolutionPort},
    services::EnrichmentService,
};
use clap::{Parser, Subcommand};
use domain::SummaryRow;
use infrastructure::{
    AppConfig, GeocodingAdapter, InputStore, MapRenderer, ResolutionAdapter, ResultsStore,
    SummaryStore,
};
use integration_geocoding::GeocodingClient;
use integration_resolution::ResolutionClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// RiskAtlas CLI
#[derive(Parser)]
#[command(name = "riskatlas-cli")]
#[command(author, version, about = "RiskAtlas entity enrichment CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the enrichment pipeline over an input CSV
    ///
    /// Resolves each entity, scores its risk, geocodes its first
    /// address, and writes the JSON results and CSV summary artifacts.
    ///
    /// Example: riskatlas-cli enrich --input data/entities.csv
    Enrich {
        /// Input CSV path (overrides configuration)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON results output path (overrides configuration)
        #[arg(long)]
        results: Option<PathBuf>,

        /// CSV summary output path (overrides configuration)
        #[arg(long)]
        summary: Option<PathBuf>,

        /// Delay between rows in milliseconds (overrides configuration)
        #[arg(long)]
        pacing_ms: Option<u64>,
    },

    /// Render the interactive risk map from the summary artifact
    ///
    /// Example: riskatlas-cli map --output static/risk_map.html
    Map {
        /// CSV summary input path (overrides configuration)
        #[arg(short, long)]
        summary: Option<PathBuf>,

        /// Map HTML output path (overrides configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not open the rendered map in a browser
        #[arg(long)]
        no_open: bool,
    },
}

/// Determine log filter level from verbosity count
///
/// Defaults to `info` so the per-row resolution and unmatched lines are
/// visible on a plain run.
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    match cli.command {
        Commands::Enrich {
            input,
            results,
            summary,
            pacing_ms,
        } => {
            let input_path = input.unwrap_or_else(|| PathBuf::from(&config.pipeline.input_path));
            let results_path =
                results.unwrap_or_else(|| PathBuf::from(&config.pipeline.results_path));
            let summary_path =
                summary.unwrap_or_else(|| PathBuf::from(&config.pipeline.summary_path));
            let pacing = Duration::from_millis(pacing_ms.unwrap_or(config.pipeline.pacing_ms));

            run_enrich(&config, &input_path, &results_path, &summary_path, pacing).await?;
        },

        Commands::Map {
            summary,
            output,
            no_open,
        } => {
            let summary_path =
                summary.unwrap_or_else(|| PathBuf::from(&config.pipeline.summary_path));
            let output_path = output.unwrap_or_else(|| PathBuf::from(&config.pipeline.map_path));

            run_map(&summary_path, &output_path, no_open)?;
        },
    }

    Ok(())
}

async fn run_enrich(
    config: &AppConfig,
    input_path: &Path,
    results_path: &Path,
    summary_path: &Path,
    pacing: Duration,
) -> anyhow::Result<()> {
    let resolution_client = ResolutionClient::new(&config.resolution.to_client_config())?;
    let geocoding_client = GeocodingClient::new(&config.geocoding.to_client_config())?;

    let resolver: Arc<dyn ResolutionPort> = Arc::new(ResolutionAdapter::new(resolution_client));
    let geocoder: Arc<dyn GeocodingPort> = Arc::new(GeocodingAdapter::new(geocoding_client));
    let service = EnrichmentService::new(resolver, geocoder, pacing);

    let records = InputStore::new(input_path).load()?;
    println!("Enriching {} entities from {}", records.len(), input_path.display());

    let report = service.enrich_all(records).await;

    if !report.unmatched.is_empty() {
        println!("\nNo match found for {} entities:", report.unmatched.len());
        for name in &report.unmatched {
            println!("  - {name}");
        }
    }

    ResultsStore::new(results_path).save(&report.enriched)?;

    let rows: Vec<SummaryRow> = report.enriched.iter().map(SummaryRow::from).collect();
    SummaryStore::new(summary_path).save(&rows)?;

    println!(
        "\nEnriched {} of {} entities",
        report.enriched.len(),
        report.total()
    );
    println!(
        "Results written to {} and {}",
        results_path.display(),
        summary_path.display()
    );

    Ok(())
}

fn run_map(summary_path: &Path, output_path: &Path, no_open: bool) -> anyhow::Result<()> {
    let rows = SummaryStore::new(summary_path).load()?;
    let plotted = rows.iter().filter(|row| row.has_coordinates()).count();

    let html = MapRenderer::new()?.render(&rows)?;
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, html)?;

    println!(
        "Plotted {plotted} of {} entities to {}",
        rows.len(),
        output_path.display()
    );

    if !no_open {
        if let Err(e) = open::that(output_path) {
            tracing::warn!("Failed to open map in browser: {}", e);
        }
    }

    Ok(())
}
