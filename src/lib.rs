//! timepunch library root.
//! Exposes the CLI parser, the high-level run() entry point, and the
//! derivation/dispatch core shared by the binary and the test suite.

pub mod api;
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
use models::action::ClockAction;
use std::path::Path;

/// Central command dispatcher
pub async fn dispatch_command(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg).await,
        Commands::In => cli::commands::punch::handle(ClockAction::ClockIn, cfg).await,
        Commands::Out => cli::commands::punch::handle(ClockAction::ClockOut, cfg).await,
        Commands::Break => cli::commands::punch::handle(ClockAction::StartBreak, cfg).await,
        Commands::Resume => cli::commands::punch::handle(ClockAction::EndBreak, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load(cli.config.as_deref().map(Path::new))?;

    // command-line overrides win over the config file
    if let Some(server) = &cli.server {
        cfg.server = server.clone();
    }

    dispatch_command(&cli, &cfg).await
}
