//! Command-line interface for timetravel_tui.

use crate::config::TuiConfig;
use crate::labels::Language;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Time-travel tic-tac-toe - two players, one terminal, full move history
#[derive(Parser, Debug)]
#[command(name = "timetravel_tui")]
#[command(about = "Two-player tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "timetravel.toml")]
    config: PathBuf,

    /// Interface language (en or ru), overrides the config file
    #[arg(short, long)]
    lang: Option<Language>,

    /// Log file path, overrides the config file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Path of the configuration file.
    pub fn config(&self) -> &Path {
        &self.config
    }

    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: TuiConfig) -> TuiConfig {
        if let Some(lang) = self.lang {
            config = config.with_language(lang);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        config
    }
}
