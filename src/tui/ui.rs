//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{GameSession, Player, Position, Square, WinResult};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board + moves
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_info(frame, body[1], app);
    draw_help(frame, chunks[2], app.session());
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let winner = app.session().winner();
    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        draw_row(frame, rows[row], app, winner.as_ref(), start);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, winner: Option<&WinResult>, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (offset, col) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            draw_cell(frame, cols[col], app, winner, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, winner: Option<&WinResult>, pos: Position) {
    let square = app.session().current_board().get(pos);

    let (symbol, base_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = base_style;
    if winner.is_some_and(|w| w.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the mark in its 3-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Sort toggle
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let status_style = if session.is_game_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(session.status_text())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let sort = Paragraph::new(format!("[s] {}", session.sort_order().label()))
        .alignment(Alignment::Center)
        .block(Block::default().title("Order").borders(Borders::ALL));
    frame.render_widget(sort, chunks[1]);

    let moves_focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = session
        .move_labels()
        .iter()
        .enumerate()
        .map(|(row, label)| {
            let mut style = Style::default();
            if label.is_current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if moves_focused && row == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", row + 1, label),
                style,
            )))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Moves")
            .borders(Borders::ALL)
            .border_style(focus_style(moves_focused)),
    );
    frame.render_widget(list, chunks[2]);
}

fn draw_help(frame: &mut Frame, area: Rect, session: &GameSession) {
    let mut help = String::from("arrows/1-9 move  enter play  tab moves  s sort  q quit");
    if session.is_game_over() {
        help.push_str("  r reset game");
    }
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn play(app: &mut App, cells: &[usize]) {
        for &cell in cells {
            app.apply(Action::PlayAt(Position::from_index(cell).unwrap()));
        }
    }

    #[test]
    fn test_initial_screen() {
        let text = screen_text(&render(&App::new()));
        assert!(text.contains("Next player: X"));
        assert!(text.contains("1. Go to game start"));
        assert!(text.contains("[s] Ascending"));
        assert!(!text.contains("r reset game"));
    }

    #[test]
    fn test_win_screen_offers_reset() {
        let mut app = App::new();
        play(&mut app, &[0, 4, 1, 5, 2]);
        let text = screen_text(&render(&app));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("6. Go to move #5 (3, 1)"));
        assert!(text.contains("r reset game"));
    }

    #[test]
    fn test_descending_list_starts_with_newest() {
        let mut app = App::new();
        play(&mut app, &[4, 0]);
        app.apply(Action::ToggleOrder);
        let text = screen_text(&render(&app));
        let newest = text.find("Go to move #2").expect("newest listed");
        let start = text.find("Go to game start").expect("start listed");
        assert!(newest < start);
        assert!(text.contains("1. Go to move #2 (1, 1)"));
        assert!(text.contains("3. Go to game start"));
        assert!(text.contains("[s] Descending"));
    }
}
