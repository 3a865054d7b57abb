use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Create the config directory, config file skeleton and empty token file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.config.as_deref().map(Path::new), cli.test)
}
