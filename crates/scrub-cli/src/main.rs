//! CSV PII scanner.
//!
//! Reads a CSV table, detects Indian personal identifiers, and writes
//! a de-identified copy plus JSON reports.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use scrub_engine::{ScrubConfig, Scrubber};

mod csv_io;

/// Scan a CSV file for PII and write a de-identified copy.
#[derive(Parser)]
#[command(name = "scrub", version, about)]
struct Cli {
    /// CSV file to scan.
    input: PathBuf,

    /// Where to write the de-identified CSV.
    ///
    /// Defaults to the input path with a `.clean.csv` suffix.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Directory for the JSON reports.
    #[arg(long, default_value = "reports")]
    report_dir: PathBuf,

    /// Minimum confidence a detection must reach (0.0-1.0).
    #[arg(long, short = 't', default_value = "0.7")]
    confidence_threshold: f64,

    /// Mask Aadhaar as first4/XXXX/last4 instead of a hash token.
    #[arg(long)]
    aadhaar_partial: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ScrubConfig::new(cli.confidence_threshold)?
        .with_aadhaar_partial(cli.aadhaar_partial);

    let table = csv_io::read_table(&cli.input)?;
    tracing::info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded {}",
        cli.input.display()
    );

    let output = Scrubber::new(config).scrub(&table);

    let clean_path = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("clean.csv"));
    csv_io::write_table(&clean_path, &output.deidentified)?;

    fs::create_dir_all(&cli.report_dir)
        .with_context(|| format!("failed to create {}", cli.report_dir.display()))?;
    let detections_path = cli.report_dir.join("detections.json");
    let summary_path = cli.report_dir.join("summary.json");
    fs::write(
        &detections_path,
        serde_json::to_string_pretty(&output.detections)?,
    )
    .with_context(|| format!("failed to write {}", detections_path.display()))?;
    fs::write(
        &summary_path,
        serde_json::to_string_pretty(&output.summary)?,
    )
    .with_context(|| format!("failed to write {}", summary_path.display()))?;

    println!(
        "{} detections across {} rows",
        output.summary.total_detections,
        table.row_count()
    );
    for (pii_type, count) in &output.summary.counts_by_type {
        println!("  {pii_type}: {count}");
    }
    println!("de-identified table: {}", clean_path.display());
    println!("reports: {}", cli.report_dir.display());

    Ok(())
}
