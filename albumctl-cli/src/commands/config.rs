//! Configuration inspection

use anyhow::Result;
use clap::{Parser, Subcommand};

use albumctl_core::AlbumConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration as TOML (password masked)
    Show,
    /// Show config file path
    Path,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => {
            println!("{}", AlbumConfig::config_path().display());
            Ok(())
        }
    }
}

fn run_show() -> Result<()> {
    let mut config = AlbumConfig::load()?;
    config.database.url = config.database.redacted_url();
    print!("{}", config.to_toml()?);
    Ok(())
}
