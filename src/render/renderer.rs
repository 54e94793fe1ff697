use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::canvas::{CanvasScale, CanvasView, PixelCanvas};
use super::status::StatusBoard;

/// Lays out the score header, the canvas, the controls footer and, after a
/// game over, a popup with the final score
pub struct Renderer {
    scale: CanvasScale,
}

impl Renderer {
    pub fn new(scale: CanvasScale) -> Self {
        Self { scale }
    }

    pub fn render(&self, frame: &mut Frame, canvas: &PixelCanvas, board: &StatusBoard) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_score(board), chunks[0]);

        let (cols, rows) = self.scale.terminal_size(canvas);
        let board_area = centered(chunks[1], cols.saturating_add(2), rows.saturating_add(2));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(board_area);
        frame.render_widget(block, board_area);
        frame.render_widget(CanvasView::new(canvas, self.scale), inner);

        if let Some(message) = board.game_over_message() {
            let popup = centered(chunks[1], 40, 7);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(message), popup);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_score<'a>(&self, board: &'a StatusBoard) -> Paragraph<'a> {
        let text = vec![Line::from(vec![Span::styled(
            board.score_line(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over<'a>(&self, message: &'a str) -> Paragraph<'a> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                message,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" or click to restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("drag", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DisplaySink;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
    }

    #[test]
    fn test_renders_score_and_game_over() {
        let canvas = PixelCanvas::new(200, 200);
        let renderer = Renderer::new(CanvasScale::for_cell_size(20));
        let mut board = StatusBoard::new();
        board.set_score(3);
        board.show_game_over(3);

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &canvas, &board))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 3"));
        assert!(text.contains("Game Over! Your score was 3"));
    }

    #[test]
    fn test_no_popup_while_running() {
        let canvas = PixelCanvas::new(200, 200);
        let renderer = Renderer::new(CanvasScale::for_cell_size(20));
        let board = StatusBoard::new();

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &canvas, &board))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(!text.contains("Game Over"));
    }
}
