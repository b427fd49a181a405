//! Action button for the form button rows

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    /// Has keyboard focus; Enter activates it
    Selected,
    /// Its action is in flight; the label gets a trailing ellipsis
    Busy,
}

impl ButtonState {
    pub fn new(is_selected: bool, is_busy: bool) -> Self {
        match (is_busy, is_selected) {
            (true, _) => ButtonState::Busy,
            (false, true) => ButtonState::Selected,
            (false, false) => ButtonState::Normal,
        }
    }

    fn text(self, label: &str) -> String {
        match self {
            ButtonState::Busy => format!(" {label}… "),
            _ => format!(" {label} "),
        }
    }

    fn styles(self) -> (Style, Style) {
        match self {
            ButtonState::Normal => (Style::default().fg(Color::DarkGray), Style::default()),
            ButtonState::Selected => (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            ButtonState::Busy => (
                Style::default().fg(Color::Yellow),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
        }
    }
}

/// Render a bordered button
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let (border_style, text_style) = state.styles();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(state.text(label))
            .style(text_style)
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(label: &str, state: ButtonState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(16, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_button(frame, frame.area(), label, state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_busy_wins_over_selection() {
        assert_eq!(ButtonState::new(true, true), ButtonState::Busy);
        assert_eq!(ButtonState::new(true, false), ButtonState::Selected);
        assert_eq!(ButtonState::new(false, false), ButtonState::Normal);
    }

    #[test]
    fn test_busy_label_gets_ellipsis() {
        assert!(rendered("Submit", ButtonState::Busy).contains("Submit…"));
        let idle = rendered("Submit", ButtonState::Selected);
        assert!(idle.contains("Submit"));
        assert!(!idle.contains('…'));
    }
}
