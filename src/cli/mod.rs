//! CLI command handlers
//!
//! Each subcommand is implemented in its own module.

pub mod analyze;
pub mod config;
pub mod dashboard;
pub mod helpers;

use clap::ValueEnum;

/// Output format shared by commands that print alerts or analyses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
