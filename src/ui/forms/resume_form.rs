//! Resume form rendering

use super::field_renderer::{draw_field, field_height};
use crate::actions::ActionKind;
use crate::app::App;
use crate::platform::{EMAIL_SHORTCUT, PDF_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Form, ResumeButton, SubmitState};
use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the resume form with its button row
pub fn draw_resume_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.resume;

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Min(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let title = match app.submit_state() {
        SubmitState::Submitted => " Resume (submitted) ",
        _ => " Resume ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field, form.active_field() == idx);
    }

    let buttons_idx = form.fields.len();
    draw_button_row(frame, chunks[buttons_idx], app);

    let help = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": submit  "),
            Span::styled(PDF_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": PDF  "),
            Span::styled(EMAIL_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": email  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": cancel requests"),
        ]),
        Line::from(format!("PDFs are saved to {}", app.download_dir().display())),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[buttons_idx + 1]);
}

fn draw_button_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.resume;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(area);

    for (idx, button) in ResumeButton::ALL.iter().enumerate() {
        let busy = match button {
            ResumeButton::Submit => app.is_busy(ActionKind::SubmitForm),
            ResumeButton::DownloadPdf => app.is_busy(ActionKind::DownloadPdf),
            ResumeButton::Email => false,
        };
        let is_selected = form.is_buttons_row_active() && form.selected_button == *button;
        render_button(
            frame,
            chunks[idx],
            button.label(),
            ButtonState::new(is_selected, busy),
        );
    }
}
