//! Session tally CLI library.
//!
//! This crate provides the CLI interface for session-tally.

mod cli;
mod config;
pub mod report;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
