//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Per-user session statistics from a plaintext event log.
///
/// Reads a log of `HH:MM:SS <username> <Start|End>` lines, reconstructs
/// session intervals per user, and prints each user's session count and
/// total time in seconds.
#[derive(Debug, Parser)]
#[command(name = "st", version, about, long_about = None)]
pub struct Cli {
    /// Path to the log file to analyze.
    pub log_file: PathBuf,

    /// Output the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
