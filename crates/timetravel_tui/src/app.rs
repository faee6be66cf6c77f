//! Application state and logic.

use crate::input::{Command, Direction, move_cursor};
use timetravel_tictactoe::{GameState, Position};
use tracing::{debug, instrument};

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a history entry.
    History,
}

/// Main application state: one game session plus cursor and focus.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    hover: Option<Position>,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board and the cursor centered.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            hover: None,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Board cell under the mouse pointer, if any.
    pub fn hover(&self) -> Option<Position> {
        self.hover
    }

    /// Control receiving keyboard input.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History entry selected with the keyboard.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user command.
    ///
    /// Rejected moves and jumps leave the game untouched and show nothing.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
            Command::PlayAtCursor => self.play(self.cursor),
            Command::Cursor(direction) => self.move_cursor(direction),
            Command::Hover(position) => self.hover = position,
            Command::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.current_move();
            }
            Command::Jump(index) => self.jump(index),
            Command::JumpSelected => self.jump(self.selected),
            Command::Restart => self.jump(0),
            Command::Quit => self.should_quit = true,
        }
    }

    fn play(&mut self, position: Position) {
        match self.game.play(position) {
            Ok(action) => {
                debug!(%action, "Move played");
                self.selected = self.game.current_move();
            }
            Err(e) => debug!(error = %e, "Ignoring rejected move"),
        }
    }

    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => {
                debug!(index, "Jumped to history entry");
                self.selected = self.game.current_move();
            }
            Err(e) => debug!(error = %e, "Ignoring rejected jump"),
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.game.history().len() - 1;
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(last),
                };
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
