//! Time-travel tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use timetravel_tui::{TuiConfig, cli::Cli, logging, run_tui};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(TuiConfig::load(cli.config())?);

    logging::init_file_logging(config.log_file())?;
    info!(config = ?config, "Configuration loaded");

    if let Err(e) = run_tui(&config) {
        error!(error = ?e, "Game loop error");
        return Err(e);
    }

    Ok(())
}
