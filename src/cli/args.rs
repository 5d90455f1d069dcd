//! Command-line argument definitions for GDELT fetcher
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Valid log level names for the --log-level option
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// CLI arguments for the GDELT event fetcher
///
/// Fetches the latest GDELT v2 export snapshot, verifies its integrity and
/// decodes it into typed event records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gdelt-fetcher",
    version,
    about = "Fetch the latest GDELT v2 event snapshot and decode it into typed records",
    long_about = "A tool that resolves the latest GDELT v2 export snapshot from the update \
                  manifest, downloads the Zip-compressed file, verifies its MD5 checksum and \
                  decodes the fixed 61-column export table into typed event records, optionally \
                  writing them out as JSON Lines for downstream analytics."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress progress output and the final summary
    #[arg(long, global = true, help = "Suppress progress output and summary")]
    pub quiet: bool,

    /// Logging verbosity
    #[arg(
        long = "log-level",
        global = true,
        value_name = "LEVEL",
        help = "Log level: error, warn, info, debug, trace (default: info)"
    )]
    pub log_level: Option<String>,
}

/// Available subcommands for the GDELT fetcher
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch and decode the latest export snapshot (main command)
    Fetch(FetchArgs),
    /// Decode a local decompressed export CSV file
    Decode(DecodeArgs),
}

/// Arguments for the fetch command (snapshot retrieval)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// URL of the update manifest naming the latest snapshot
    ///
    /// Defaults to the public GDELT v2 lastupdate.txt manifest. Overriding
    /// it is mainly useful for mirrors.
    #[arg(
        long = "manifest-url",
        value_name = "URL",
        help = "URL of the update manifest naming the latest snapshot"
    )]
    pub manifest_url: Option<String>,

    /// Output path for decoded events as JSON Lines
    ///
    /// One JSON object per event, in snapshot order. If not specified, only
    /// a summary is printed.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for decoded events as JSON Lines"
    )]
    pub output: Option<PathBuf>,
}

/// Arguments for the decode command (local file decoding)
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Input path of a decompressed .export.CSV file
    #[arg(value_name = "FILE", help = "Path of a decompressed .export.CSV file")]
    pub input: PathBuf,

    /// Output path for decoded events as JSON Lines
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for decoded events as JSON Lines"
    )]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Validate argument combinations before running a command
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(Error::configuration(format!(
                    "Invalid log level '{}': must be one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        if let Some(Commands::Decode(decode)) = &self.command {
            if !decode.input.exists() {
                return Err(Error::configuration(format!(
                    "Input file not found: {}",
                    decode.input.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the effective log level
    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Whether progress output should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
