//! linkdeck - asset naming and build tool for a link-directory site.

mod asset;
mod cli;
mod config;
mod directory;
mod logger;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Init => {
            let cwd = std::env::current_dir().context("Failed to get current working directory")?;
            cli::init::new_project(&cwd.join(&cli.config))
        }
        Commands::Build { .. } => {
            let config = ProjectConfig::load(&cli)?;
            cli::build::build_assets(&config, false).map(|_| ())
        }
        Commands::Name { args } => {
            let config = ProjectConfig::load(&cli)?;
            cli::name::print_names(args, &config)
        }
    }
}
