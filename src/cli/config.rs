//! Configuration inspection command

use clap::Subcommand;
use pulse_core::{config::default_config_path, error::Result, PulseConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the default configuration file path
    Path,
}

/// Handle configuration command
pub async fn handle(action: ConfigAction, config: &PulseConfig) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", default_config_path().display());
        }
    }
    Ok(())
}
