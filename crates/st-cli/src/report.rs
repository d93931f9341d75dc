//! Log tallying and report rendering.
//!
//! Reads a log file line by line through the reconstructor and renders the
//! resulting report to stdout, either as plain space-separated lines (the
//! canonical output) or as JSON.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use st_core::{Reconstruction, Reconstructor, Report};

use crate::config::OutputFormat;

/// Streams `path` through the reconstructor.
///
/// A missing or unreadable file is the one fatal error in the system;
/// everything wrong *inside* the file is dropped line by line instead.
pub fn tally_file(path: &Path) -> Result<Reconstruction> {
    let file = File::open(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut reconstructor = Reconstructor::new();
    for line in reader.lines() {
        let line =
            line.with_context(|| format!("failed to read log file: {}", path.display()))?;
        reconstructor.ingest_line(&line);
    }

    Ok(reconstructor.finish())
}

/// Formats the canonical plain output: one line per user, first-seen order.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();
    for user in &report.users {
        writeln!(
            output,
            "{} {} {}",
            user.username, user.session_count, user.total_session_time_seconds
        )
        .unwrap();
    }
    output
}

/// Formats the report as a pretty-printed JSON array.
pub fn format_report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Runs the tally: parse the file, log ingest stats, print the report.
pub fn run(path: &Path, format: OutputFormat) -> Result<()> {
    let reconstruction = tally_file(path)?;

    let stats = reconstruction.stats;
    tracing::debug!(
        lines = stats.lines,
        events = stats.events,
        skipped = stats.skipped(),
        "log parsed"
    );

    let report = reconstruction.report();
    match format {
        OutputFormat::Plain => print!("{}", format_report(&report)),
        OutputFormat::Json => println!("{}", format_report_json(&report)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use st_core::UserReport;

    fn sample_report() -> Report {
        Report {
            users: vec![
                UserReport {
                    username: "alice".to_string(),
                    session_count: 1,
                    total_session_time_seconds: 1800,
                },
                UserReport {
                    username: "bob".to_string(),
                    session_count: 2,
                    total_session_time_seconds: 0,
                },
            ],
        }
    }

    #[test]
    fn plain_output_one_line_per_user() {
        let output = format_report(&sample_report());
        assert_snapshot!(output, @r"
        alice 1 1800
        bob 2 0
        ");
    }

    #[test]
    fn plain_output_empty_report() {
        assert_eq!(format_report(&Report::default()), "");
    }

    #[test]
    fn json_output_preserves_order_and_names() {
        let report = Report {
            users: vec![UserReport {
                username: "alice".to_string(),
                session_count: 1,
                total_session_time_seconds: 1800,
            }],
        };
        let json = format_report_json(&report).unwrap();
        let expected = r#"[
  {
    "username": "alice",
    "session_count": 1,
    "total_session_time_seconds": 1800
  }
]"#;
        assert_eq!(json, expected);
    }
}
