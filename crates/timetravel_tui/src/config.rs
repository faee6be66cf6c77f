//! TUI configuration loaded from TOML.

use crate::labels::Language;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Configuration for the terminal UI. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct TuiConfig {
    /// Interface language.
    language: Language,

    /// File receiving tracing output.
    log_file: PathBuf,

    /// Hex colors for the interface.
    theme: Theme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            log_file: PathBuf::from("timetravel_tui.log"),
            theme: Theme::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(language = %config.language, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Interface colors as hex strings (`#rrggbb`) or color names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Screen background.
    background: String,
    /// Title text.
    title: String,
    /// Status line text.
    status: String,
    /// Board cell background.
    cell: String,
    /// Hovered cell and history button background.
    highlight: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#008c96".to_string(),
            title: "#fb8500".to_string(),
            status: "#ffb703".to_string(),
            cell: "#023047".to_string(),
            highlight: "#219ebc".to_string(),
        }
    }
}

impl Theme {
    /// Parses every color of the theme.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            background: parse_color("background", &self.background)?,
            title: parse_color("title", &self.title)?,
            status: parse_color("status", &self.status)?,
            cell: parse_color("cell", &self.cell)?,
            highlight: parse_color("highlight", &self.highlight)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|e| ConfigError::new(format!("Invalid color for theme.{}: {:?} ({})", key, value, e)))
}

/// Parsed interface colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Title text.
    pub title: Color,
    /// Status line text.
    pub status: Color,
    /// Board cell background.
    pub cell: Color,
    /// Hovered cell and history button background.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0x00, 0x8c, 0x96),
            title: Color::Rgb(0xfb, 0x85, 0x00),
            status: Color::Rgb(0xff, 0xb7, 0x03),
            cell: Color::Rgb(0x02, 0x30, 0x47),
            highlight: Color::Rgb(0x21, 0x9e, 0xbc),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
