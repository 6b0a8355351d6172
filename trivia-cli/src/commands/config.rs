use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_core::TriviaConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config (file + environment) as TOML
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long, env = "TRIVIA_CONFIG")]
    pub config: Option<PathBuf>,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", TriviaConfig::config_path().display());
            Ok(())
        }
        ConfigCommands::Show(args) => {
            let config = super::load_config(args.config)?;
            let rendered =
                toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
