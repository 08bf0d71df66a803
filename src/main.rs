//! Pulse - feedback sentiment triage
//!
//! Command-line front end for the classifier and the alert dashboard.

mod cli;

use clap::{Parser, Subcommand};
use cli::OutputFormat;
use pulse_core::{error::Result, PulseConfig, StatusFilter};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Sentiment triage for customer feedback", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Configuration file (defaults to <config_dir>/pulse/config.toml)
    #[arg(long, env = "PULSE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify feedback text (reads stdin when no text is given)
    Analyze {
        /// Feedback text
        text: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show which lexicon words matched
        #[arg(long)]
        explain: bool,
    },

    /// Show the alert dashboard populated with demo feedback
    Dashboard {
        /// Status tab: all, new, reviewed or resolved
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Search content and author
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Number of random alerts to simulate before listing
        #[arg(long, default_value = "0")]
        simulate: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: cli::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "pulse={level},pulse_core={level}",
        level = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("Pulse v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = PulseConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            text,
            format,
            explain,
        } => cli::analyze::handle(text, format, explain).await,
        Commands::Dashboard {
            status,
            search,
            simulate,
            format,
        } => cli::dashboard::handle(&config, status, search, simulate, format).await,
        Commands::Config { action } => cli::config::handle(action, &config).await,
    }
}
