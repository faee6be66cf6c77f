//! Keyboard and mouse input mapped to application commands.

use crate::app::Focus;
use crate::layout::Regions;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use timetravel_tictactoe::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// A user intent, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at a cell (click or digit key).
    Play(Position),
    /// Play at the keyboard cursor.
    PlayAtCursor,
    /// Move the cursor of the focused control.
    Cursor(Direction),
    /// Mouse pointer moved over a cell, or off the board.
    Hover(Option<Position>),
    /// Switch keyboard focus between board and history.
    ToggleFocus,
    /// Jump to a history entry (click).
    Jump(usize),
    /// Jump to the history entry selected with the keyboard.
    JumpSelected,
    /// Jump back to the empty board.
    Restart,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command for the focused control.
pub fn command_for_key(focus: Focus, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::ToggleFocus),
        KeyCode::Up => Some(Command::Cursor(Direction::Up)),
        KeyCode::Down => Some(Command::Cursor(Direction::Down)),
        KeyCode::Left => Some(Command::Cursor(Direction::Left)),
        KeyCode::Right => Some(Command::Cursor(Direction::Right)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Some(match focus {
            Focus::Board => Command::PlayAtCursor,
            Focus::History => Command::JumpSelected,
        }),
        _ => None,
    }
}

/// Maps a mouse event to a command using the regions of the last frame.
pub fn command_for_mouse(mouse: MouseEvent, regions: &Regions) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(position) = regions.cell_at(mouse.column, mouse.row) {
                Some(Command::Play(position))
            } else {
                regions
                    .history_entry_at(mouse.column, mouse.row)
                    .map(Command::Jump)
            }
        }
        MouseEventKind::Moved => Some(Command::Hover(regions.cell_at(mouse.column, mouse.row))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_digit_keys_play() {
        assert_eq!(
            command_for_key(Focus::Board, press(KeyCode::Char('1'))),
            Some(Command::Play(Position::TopLeft))
        );
        assert_eq!(
            command_for_key(Focus::History, press(KeyCode::Char('9'))),
            Some(Command::Play(Position::BottomRight))
        );
        assert_eq!(command_for_key(Focus::Board, press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(
            command_for_key(Focus::Board, press(KeyCode::Enter)),
            Some(Command::PlayAtCursor)
        );
        assert_eq!(
            command_for_key(Focus::History, press(KeyCode::Enter)),
            Some(Command::JumpSelected)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for_key(Focus::Board, press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(Focus::Board, press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(
                Focus::Board,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Command::Quit)
        );
        assert_eq!(command_for_key(Focus::Board, press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_mouse_clicks_cells_and_history() {
        let regions = Regions::new(Rect::new(0, 0, 80, 30), 3, 0);
        let cell = regions.cells()[Position::Center.to_index()];
        let (_, entry) = regions.history_entries()[2];

        assert_eq!(
            command_for_mouse(
                mouse(MouseEventKind::Down(MouseButton::Left), cell.x + 1, cell.y + 1),
                &regions
            ),
            Some(Command::Play(Position::Center))
        );
        assert_eq!(
            command_for_mouse(
                mouse(MouseEventKind::Down(MouseButton::Left), entry.x, entry.y),
                &regions
            ),
            Some(Command::Jump(2))
        );
        assert_eq!(
            command_for_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &regions),
            None
        );
        assert_eq!(
            command_for_mouse(mouse(MouseEventKind::Down(MouseButton::Right), cell.x, cell.y), &regions),
            None
        );
    }

    #[test]
    fn test_mouse_hover() {
        let regions = Regions::new(Rect::new(0, 0, 80, 30), 1, 0);
        let cell = regions.cells()[Position::TopLeft.to_index()];
        assert_eq!(
            command_for_mouse(mouse(MouseEventKind::Moved, cell.x, cell.y), &regions),
            Some(Command::Hover(Some(Position::TopLeft)))
        );
        assert_eq!(
            command_for_mouse(mouse(MouseEventKind::Moved, 0, 0), &regions),
            Some(Command::Hover(None))
        );
    }
}
