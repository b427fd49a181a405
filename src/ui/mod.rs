//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Resume => forms::draw_resume_form(frame, main_area, app),
        View::Email => forms::draw_email_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::server::MockResumeService;
    use crate::state::SubmitOutcome;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(&FormConfig::default(), Arc::new(MockResumeService::new()))
    }

    #[test]
    fn test_draw_resume_form_shows_labels() {
        let screen = render(&app());
        assert!(screen.contains("Full Name"));
        assert!(screen.contains("Work Experience"));
        assert!(screen.contains("Download PDF"));
    }

    #[test]
    fn test_draw_shows_tooltips_after_rejected_submit() {
        let mut app = app();
        let mut controller = crate::state::SubmitController::new();
        let outcome = controller.submit(&mut app.state.resume);
        assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));

        let screen = render(&app);
        assert!(screen.contains("Name is required."));
        assert!(screen.contains("Enter a valid email address."));
    }

    #[test]
    fn test_draw_status_bar_feedback() {
        let mut app = app();
        app.state.feedback.show("Email sent successfully!", false);
        let screen = render(&app);
        assert!(screen.contains("Email sent successfully!"));
    }

    #[test]
    fn test_draw_email_view() {
        let mut app = app();
        app.state.current_view = View::Email;
        let screen = render(&app);
        assert!(screen.contains("Recipient Email"));
        assert!(screen.contains("Send"));
    }
}
