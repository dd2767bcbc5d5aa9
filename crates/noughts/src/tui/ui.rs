//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use noughts_core::{CELLS, GameState, Mark, Player, Position, glyph, is_playable};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.state(), app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.last_move_message().unwrap_or_else(|| "Status".to_string())),
        );
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/hjkl: move | Enter/1-9/click: play | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// Maps a terminal coordinate to the board cell under it.
///
/// `area` is the full frame area the screen was drawn into.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    board_cells(screen_chunks(area)[1])
        .iter()
        .position(|cell| {
            column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
        })
}

fn screen_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(CELL_HEIGHT * 3), // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Cell rectangles in index order, centered in `area`.
fn board_cells(area: Rect) -> [Rect; CELLS] {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); CELLS];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, cell) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell;
        }
    }
    cells
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState, cursor: Position) {
    for (index, cell) in board_cells(area).into_iter().enumerate() {
        draw_cell(frame, cell, state, index, cursor.to_index() == index);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, state: &GameState, index: usize, selected: bool) {
    let mark = state.board().get(index).unwrap_or_default();

    let text_style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::Occupied(Player::Cross) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Mark::Occupied(Player::Circle) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    };

    let border_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else if is_playable(state, index) {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(glyph(mark), text_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
