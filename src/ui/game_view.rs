use crate::config::DisplayConfig;
use crate::game::{GameState, Mark};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::board_widget::{self, COLOR_BACKGROUND};
use super::grid::GridLayout;

/// Render the whole screen. Returns where the grid landed, or `None` when
/// the terminal is too small to hold it.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    display: &DisplayConfig,
    message: &Option<String>,
) -> Option<GridLayout> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    let layout = render_board(frame, game_state, display, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    layout
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let current = game_state.current_mark();
    let color = match current {
        Mark::Nought => Color::Cyan,
        Mark::Cross => Color::White,
    };

    let header = Paragraph::new(format!("{} to move", current.name()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    display: &DisplayConfig,
    area: Rect,
) -> Option<GridLayout> {
    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_BACKGROUND)),
        area,
    );

    let Some(layout) = GridLayout::fit(area) else {
        let notice = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, area);
        return None;
    };

    board_widget::render_board(frame, game_state, display, &layout);
    Some(layout)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "Left click: Place  |  R: Restart  |  Q/Esc: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_reports_layout() {
        let state = GameState::initial();
        let display = DisplayConfig::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();

        let mut layout = None;
        terminal
            .draw(|f| layout = render(f, &state, &display, &None))
            .unwrap();

        let layout = layout.expect("grid fits in 80x40");
        // Board area sits between the 3-row header and the bottom panels
        let grid = layout.area();
        assert!(grid.y >= 3);
        assert!(grid.bottom() <= 40 - 6);
        assert!(screen_text(&terminal).contains("Cross to move"));
    }

    #[test]
    fn test_render_shows_message() {
        let mut state = GameState::with_start(Mark::Nought);
        state.place(1, 1).unwrap();
        let display = DisplayConfig::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();

        let message = Some("Nought wins!".to_string());
        terminal
            .draw(|f| {
                render(f, &state, &display, &message);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Nought wins!"));
        assert!(text.contains("Cross to move"));
    }

    #[test]
    fn test_render_too_small() {
        let state = GameState::initial();
        let display = DisplayConfig::default();
        // Too narrow for even one-row cells
        let mut terminal = Terminal::new(TestBackend::new(13, 40)).unwrap();

        let mut layout = Some(GridLayout::fit(Rect::new(0, 0, 64, 32)).unwrap());
        terminal
            .draw(|f| layout = render(f, &state, &display, &None))
            .unwrap();

        assert_eq!(layout, None);
        assert!(screen_text(&terminal).contains("Terminal"));
    }
}
