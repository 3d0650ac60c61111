//! Rendering for the terminal game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use velha_engine::{Cell, Player, Position, SIZE};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen and records cell areas for mouse input.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Top bar
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
        ])
        .split(frame.area());

    draw_top_bar(frame, chunks[0], app.title());

    let areas = draw_board(frame, chunks[1], app);
    app.set_cell_areas(areas);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_top_bar(frame: &mut Frame, area: Rect, title: &str) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[r] Reiniciar  [q] Sair", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(bar, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let winning = app.winning_positions();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..SIZE {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..SIZE {
            let pos = Position::new(row, col);
            let cell_area = cols[col * 2];
            draw_cell(frame, cell_area, app, pos, winning.contains(&pos));
            areas[pos.index()] = cell_area;
            if col < SIZE - 1 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < SIZE - 1 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let cell = app.controller().board().at(pos);

    let mut style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if winning {
        style = style.fg(Color::Green);
    }
    if pos == *app.cursor() {
        style = style.bg(Color::White);
    }

    let symbol = app.glyphs().cell(cell).to_string();
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol), Line::from("")])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
    use crate::settings::Settings;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_title_and_status() {
        let mut app = App::new(&Settings::default());
        let screen = render(&mut app);
        assert!(screen.contains("Jogo da Velha"));
        assert!(screen.contains("[r] Reiniciar"));
        assert!(screen.contains("está na vez!"));
    }

    #[test]
    fn test_records_cell_areas_for_clicks() {
        let mut app = App::new(&Settings::default());
        render(&mut app);

        for pos in Position::ALL {
            let area = app.cell_areas()[pos.index()];
            assert_eq!(area.width, CELL_WIDTH);
            assert_eq!(app.cell_at(area.x, area.y), Some(pos));
        }
    }

    #[test]
    fn test_win_shown_in_status() {
        let mut app = App::new(&Settings::default());
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            app.handle(Action::Select(Position::new(row, col)));
        }
        let screen = render(&mut app);
        assert!(screen.contains("é o vencedor! Parabéns!"));
    }
}
