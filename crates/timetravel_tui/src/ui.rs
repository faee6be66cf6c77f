//! Stateless UI rendering for time-travel tic-tac-toe.

use crate::app::{App, Focus};
use crate::config::Palette;
use crate::labels::Labels;
use crate::layout::{CELL_HEIGHT, Regions};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use timetravel_tictactoe::{Player, Position, Square, winning_line};

/// Renders one frame and returns where each control was drawn.
pub fn draw(frame: &mut Frame, app: &App, labels: &Labels, palette: &Palette) -> Regions {
    let game = app.game();
    let regions = Regions::new(frame.area(), game.history().len(), app.selected());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(Color::White)),
        frame.area(),
    );

    let title = Paragraph::new(labels.title)
        .style(Style::default().fg(palette.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, *regions.title());

    let status = Paragraph::new(labels.status(game.status()))
        .style(Style::default().fg(palette.status).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(status, *regions.status());

    draw_board(frame, app, &regions, palette);
    draw_history(frame, app, &regions, labels, palette);

    let help = match app.focus() {
        Focus::Board => labels.help_board,
        Focus::History => labels.help_history,
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        *regions.help(),
    );

    regions
}

fn draw_board(frame: &mut Frame, app: &App, regions: &Regions, palette: &Palette) {
    let board_style = match app.focus() {
        Focus::Board => Style::default().fg(palette.status),
        Focus::History => Style::default(),
    };
    frame.render_widget(Block::bordered().border_style(board_style), *regions.board_panel());

    draw_separators(frame, regions);

    let board = app.game().active_board();
    let winning = winning_line(board);
    for pos in Position::ALL {
        let highlighted = app.hover() == Some(pos) || (app.focus() == Focus::Board && app.cursor() == pos);
        let in_winning_line = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(
            frame,
            regions.cells()[pos.to_index()],
            board.get(pos),
            highlighted,
            in_winning_line,
            palette,
        );
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    highlighted: bool,
    in_winning_line: bool,
    palette: &Palette,
) {
    let symbol = match square {
        Square::Empty => " ",
        Square::Occupied(Player::X) => "X",
        Square::Occupied(Player::O) => "O",
    };

    let background = if highlighted { palette.highlight } else { palette.cell };
    let mut style = Style::default()
        .bg(background)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    if in_winning_line {
        style = style.fg(palette.status);
    }

    // Vertically center the mark within the cell.
    let mut lines = vec![Line::from(""); (CELL_HEIGHT / 2) as usize];
    lines.push(Line::from(Span::raw(symbol)));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separators(frame: &mut Frame, regions: &Regions) {
    let grid = *regions.grid();
    let cells = regions.cells();
    let style = Style::default().fg(Color::Gray);

    for row in 0..2 {
        let above = cells[row * 3];
        let y = above.y + above.height;
        if y < grid.y + grid.height {
            let sep = Paragraph::new("─".repeat(grid.width as usize)).style(style);
            frame.render_widget(sep, Rect::new(grid.x, y, grid.width, 1));
        }
    }

    for col in 0..2 {
        let left = cells[col];
        let x = left.x + left.width;
        if x < grid.x + grid.width {
            let sep = Paragraph::new(vec![Line::from("│"); grid.height as usize]).style(style);
            frame.render_widget(sep, Rect::new(x, grid.y, 1, grid.height));
        }
    }
}

fn draw_history(frame: &mut Frame, app: &App, regions: &Regions, labels: &Labels, palette: &Palette) {
    let game = app.game();
    let border_style = match app.focus() {
        Focus::History => Style::default().fg(palette.status),
        Focus::Board => Style::default(),
    };
    frame.render_widget(
        Block::bordered()
            .title(labels.history_title)
            .title_style(Style::default().fg(palette.status).add_modifier(Modifier::BOLD))
            .border_style(border_style),
        *regions.history_panel(),
    );

    for &(index, area) in regions.history_entries() {
        let marker = if index == game.current_move() { "▶ " } else { "  " };
        let text = format!("{}{}", marker, labels.history_entry(index, game.move_at(index)));

        let selected = app.focus() == Focus::History && app.selected() == index;
        let background = if selected { palette.cell } else { palette.highlight };
        let entry = Paragraph::new(text).style(Style::default().bg(background).fg(Color::White));
        frame.render_widget(entry, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Command;
    use crate::labels::Language;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App, language: Language) -> (String, Regions) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut regions = None;
        terminal
            .draw(|frame| {
                regions = Some(draw(frame, app, language.labels(), &Palette::default()));
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        (text, regions.unwrap())
    }

    fn cell_symbol(app: &App, pos: Position) -> String {
        let (text, regions) = render(app, Language::En);
        let cell = regions.cells()[pos.to_index()];
        let line = text.lines().nth((cell.y + CELL_HEIGHT / 2) as usize).unwrap();
        line.chars()
            .skip(cell.x as usize)
            .take(cell.width as usize)
            .collect::<String>()
            .trim()
            .to_string()
    }

    #[test]
    fn test_initial_screen() {
        let (text, _) = render(&App::new(), Language::En);
        assert!(text.contains("Tic-Tac-Toe"));
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Restart"));
        assert!(!text.contains("Go to move"));
    }

    #[test]
    fn test_moves_render_on_board_and_history() {
        let mut app = App::new();
        app.apply(Command::Play(Position::TopLeft));
        app.apply(Command::Play(Position::Center));

        assert_eq!(cell_symbol(&app, Position::TopLeft), "X");
        assert_eq!(cell_symbol(&app, Position::Center), "O");
        assert_eq!(cell_symbol(&app, Position::BottomRight), "");

        let (text, _) = render(&app, Language::En);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to move #1 (X: Top-left)"));
        assert!(text.contains("Go to move #2 (O: Center)"));
    }

    #[test]
    fn test_winner_status() {
        let mut app = App::new();
        for index in [0, 3, 1, 4, 2] {
            app.apply(Command::Play(Position::from_index(index).unwrap()));
        }
        let (text, _) = render(&app, Language::En);
        assert!(text.contains("Winner: X"));
    }

    #[test]
    fn test_russian_labels() {
        let mut app = App::new();
        app.apply(Command::Play(Position::Center));
        let (text, _) = render(&app, Language::Ru);
        assert!(text.contains("Крестики-нолики"));
        assert!(text.contains("Следующий ход: O"));
        assert!(text.contains("Начать заново"));
        assert!(text.contains("Перейти к ходу #1"));
    }

    #[test]
    fn test_rendered_regions_match_layout() {
        let mut app = App::new();
        app.apply(Command::Play(Position::Center));
        let (_, regions) = render(&app, Language::En);
        assert_eq!(regions, Regions::new(Rect::new(0, 0, 80, 24), 2, 1));
    }
}
