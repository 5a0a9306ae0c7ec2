//! docsite - configuration loader and checker for documentation sites.

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&cli, name.as_deref(), *dry),
        Commands::Check => {
            let config = SiteConfig::load(&cli)?;
            cli::check::check_site(&config)
        }
        Commands::Export { args } => {
            let config = SiteConfig::load(&cli)?;
            cli::export::export_config(&config, args)
        }
    }
}
