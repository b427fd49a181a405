//! Email form rendering

use super::field_renderer::draw_field;
use crate::actions::ActionKind;
use crate::app::App;
use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the email form
pub fn draw_email_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.email;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Address
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Length(2),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Email Resume ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    draw_field(frame, chunks[0], &form.address, form.active_field_index == 0);

    let button_area = Rect {
        width: chunks[1].width.min(14),
        ..chunks[1]
    };
    render_button(
        frame,
        button_area,
        "Send",
        ButtonState::new(
            form.is_send_button_active(),
            app.is_busy(ActionKind::SendEmail),
        ),
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": send  "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}
