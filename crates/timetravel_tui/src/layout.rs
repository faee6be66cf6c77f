//! Screen regions, shared by rendering and mouse hit-testing.

use derive_getters::Getters;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    widgets::Block,
};
use timetravel_tictactoe::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BOARD_PANEL_WIDTH: u16 = GRID_WIDTH + 6;

/// Where every control sits on screen for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Regions {
    /// Title line.
    title: Rect,
    /// Bordered status line.
    status: Rect,
    /// Bordered panel around the board.
    board_panel: Rect,
    /// The 3x3 grid inside the board panel, separators included.
    grid: Rect,
    /// Cells in row-major order.
    cells: [Rect; 9],
    /// Bordered panel around the history list.
    history_panel: Rect,
    /// Visible history entries as (snapshot index, row).
    history_entries: Vec<(usize, Rect)>,
    /// Key help line.
    help: Rect,
}

impl Regions {
    /// Lays out a frame of `area` showing `history_len` history entries.
    ///
    /// When the list is taller than its panel it scrolls so that entry
    /// `selected` stays visible.
    pub fn new(area: Rect, history_len: usize, selected: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                // Title
                Constraint::Length(3),                // Status
                Constraint::Min(GRID_HEIGHT + 2),     // Board and history
                Constraint::Length(1),                // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(20)])
            .split(rows[2]);

        let board_panel = body[0];
        let grid = center_rect(Block::bordered().inner(board_panel), GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        let history_panel = body[1];
        let list = Block::bordered().inner(history_panel);
        let visible = list.height as usize;
        let offset = (selected.min(history_len.saturating_sub(1)) + 1).saturating_sub(visible);
        let history_entries = (offset..history_len.min(offset + visible))
            .enumerate()
            .map(|(row, index)| (index, Rect::new(list.x, list.y + row as u16, list.width, 1)))
            .collect();

        Self {
            title: rows[0],
            status: rows[1],
            board_panel,
            grid,
            cells,
            history_panel,
            history_entries,
            help: rows[3],
        }
    }

    /// Board cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }

    /// History entry under a screen coordinate.
    pub fn history_entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.history_entries
            .iter()
            .find(|(_, entry)| entry.contains(point))
            .map(|(index, _)| *index)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_do_not_overlap_and_are_in_order() {
        let regions = Regions::new(Rect::new(0, 0, 80, 30), 1, 0);
        for (index, cell) in regions.cells().iter().enumerate() {
            assert_eq!(cell.width, CELL_WIDTH);
            assert_eq!(cell.height, CELL_HEIGHT);
            assert_eq!(regions.cell_at(cell.x, cell.y), Position::from_index(index));
            assert_eq!(
                regions.cell_at(cell.x + CELL_WIDTH - 1, cell.y + CELL_HEIGHT - 1),
                Position::from_index(index)
            );
        }
    }

    #[test]
    fn test_separators_are_not_cells() {
        let regions = Regions::new(Rect::new(0, 0, 80, 30), 1, 0);
        let top_left = regions.cells()[0];
        assert_eq!(regions.cell_at(top_left.x + CELL_WIDTH, top_left.y), None);
        assert_eq!(regions.cell_at(top_left.x, top_left.y + CELL_HEIGHT), None);
    }

    #[test]
    fn test_one_history_row_per_entry() {
        let regions = Regions::new(Rect::new(0, 0, 80, 30), 4, 0);
        assert_eq!(regions.history_entries().len(), 4);
        for (row, (index, entry)) in regions.history_entries().iter().enumerate() {
            assert_eq!(*index, row);
            assert_eq!(regions.history_entry_at(entry.x, entry.y), Some(*index));
            assert!(regions.history_panel().contains(ScreenPosition::new(entry.x, entry.y)));
        }
        assert_eq!(regions.history_entry_at(0, 0), None);
    }

    #[test]
    fn test_full_history_fits_default_size() {
        // A finished game has at most ten snapshots.
        let regions = Regions::new(Rect::new(0, 0, 80, 24), 10, 9);
        assert_eq!(regions.history_entries().len(), 10);
    }

    #[test]
    fn test_short_terminal_scrolls_to_selected_entry() {
        let area = Rect::new(0, 0, 80, 16);
        let rows = Regions::new(area, 20, 0).history_entries().len();
        assert!(rows > 0 && rows < 20);

        let regions = Regions::new(area, 20, 19);
        let indices: Vec<usize> = regions.history_entries().iter().map(|(i, _)| *i).collect();
        assert_eq!(indices.len(), rows);
        assert_eq!(indices.last(), Some(&19));

        let (_, last_row) = regions.history_entries()[rows - 1];
        assert_eq!(regions.history_entry_at(last_row.x, last_row.y), Some(19));

        let top = Regions::new(area, 20, 0);
        assert_eq!(top.history_entries()[0].0, 0);
    }
}
