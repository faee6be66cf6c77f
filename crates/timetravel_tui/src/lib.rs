//! Terminal UI for time-travel tic-tac-toe.
//!
//! Renders the active board, the status line and one button per history
//! snapshot. Cells and history buttons are clickable; the keyboard drives a
//! cursor over the same controls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod labels;
pub mod layout;
pub mod logging;
pub mod terminal;
pub mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, instrument};

pub use app::{App, Focus};
pub use config::{ConfigError, Palette, Theme, TuiConfig};
pub use labels::{Labels, Language};

/// Runs the interactive game until the player quits.
///
/// Takes over the terminal for the duration of the session and restores it
/// on return, including on error.
#[instrument(skip_all, fields(language = %config.language()))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    let palette = config.theme().palette()?;
    let labels = config.language().labels();

    let mut guard = terminal::TerminalGuard::new()?;
    let mut app = App::new();

    info!("Starting time-travel tic-tac-toe session");

    while !app.should_quit() {
        let mut regions = None;
        guard
            .terminal_mut()
            .draw(|frame| regions = Some(ui::draw(frame, &app, labels, &palette)))?;

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::command_for_key(app.focus(), key)
            }
            Event::Mouse(mouse) => regions
                .as_ref()
                .and_then(|regions| input::command_for_mouse(mouse, regions)),
            other => {
                debug!(event = ?other, "Ignoring terminal event");
                None
            }
        };

        if let Some(command) = command {
            app.apply(command);
        }
    }

    info!(
        history_len = app.game().history().len(),
        "Session finished"
    );
    Ok(())
}
