//! Command implementations for GDELT fetcher CLI
//!
//! This module contains the command execution logic, progress reporting and
//! output writing for the CLI interface.

use crate::app::models::Event;
use crate::app::services::event_csv_parser::EventCsvReader;
use crate::app::services::snapshot_fetcher::SnapshotFetcher;
use crate::cli::args::{Args, Commands, DecodeArgs, FetchArgs};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Run statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of events decoded
    pub events_decoded: usize,

    /// URL or path of the decoded snapshot
    pub source: String,

    /// Path the events were written to, if any
    pub output_path: Option<PathBuf>,

    /// Total processing time
    pub processing_time: Duration,
}

/// Main command runner for the GDELT fetcher
pub async fn run(args: Args) -> Result<RunStats> {
    setup_logging(&args)?;

    info!("Starting GDELT fetcher");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    match args.command.clone() {
        Some(Commands::Fetch(fetch_args)) => run_fetch(&args, &fetch_args).await,
        Some(Commands::Decode(decode_args)) => run_decode(&args, &decode_args),
        None => Err(Error::configuration("No command specified")),
    }
}

/// Fetch, verify and decode the latest export snapshot
async fn run_fetch(args: &Args, fetch_args: &FetchArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    let fetcher = match &fetch_args.manifest_url {
        Some(url) => SnapshotFetcher::with_last_update_url(url),
        None => SnapshotFetcher::new(),
    };

    let spinner = if args.show_progress() {
        Some(create_spinner("Resolving latest snapshot reference..."))
    } else {
        None
    };

    let reference = fetcher.fetch_reference().await?;
    if let Some(pb) = &spinner {
        pb.set_message(format!("Downloading {}", reference.url));
    }

    let events = fetcher.fetch_events(&reference).await?;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let output_path = write_events(&events, fetch_args.output.as_deref())?;

    let stats = RunStats {
        events_decoded: events.len(),
        source: reference.url.clone(),
        output_path,
        processing_time: start_time.elapsed(),
    };
    report_summary(args, &stats);
    Ok(stats)
}

/// Decode a local decompressed export CSV file
fn run_decode(args: &Args, decode_args: &DecodeArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    info!("Decoding local export file: {}", decode_args.input.display());
    let file = File::open(&decode_args.input)
        .map_err(|e| Error::io(format!("failed to open {}", decode_args.input.display()), e))?;

    let events = EventCsvReader::new(file).read_all()?;

    let output_path = write_events(&events, decode_args.output.as_deref())?;

    let stats = RunStats {
        events_decoded: events.len(),
        source: decode_args.input.display().to_string(),
        output_path,
        processing_time: start_time.elapsed(),
    };
    report_summary(args, &stats);
    Ok(stats)
}

/// Write decoded events as JSON Lines when an output path was given
fn write_events(events: &[Event], output: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(path) = output else {
        return Ok(None);
    };

    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    for event in events {
        let line = serde_json::to_string(event)
            .map_err(|e| Error::json_serialization("failed to serialize event", e))?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    info!("Wrote {} events to {}", events.len(), path.display());
    Ok(Some(path.to_path_buf()))
}

/// Print the final run summary
fn report_summary(args: &Args, stats: &RunStats) {
    if args.quiet {
        return;
    }

    println!();
    println!("{}", "Processing complete".green().bold());
    println!("  Events decoded: {}", stats.events_decoded);
    println!("  Snapshot:       {}", stats.source);
    if let Some(path) = &stats.output_path {
        println!("  Output:         {}", path.display());
    }
    println!("  Elapsed:        {}", HumanDuration(stats.processing_time));
}

/// Create the download progress spinner
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gdelt_fetcher={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
