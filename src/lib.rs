//! TimeToWIN library root.
//! Exposes the pure `calculate` entry point, the CLI parser and the
//! high-level `run()` used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::calculation::CalculationResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Net working time for whitespace/punctuation separated in/out times,
/// using the local clock for `now` and the statutory breaks.
pub fn calculate(input: &str) -> AppResult<CalculationResult> {
    crate::core::logic::Core::calculate(input)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, config_path)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::logging::init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
