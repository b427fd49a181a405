//! Application state and core logic

use crate::actions::{ActionError, ActionEvent, ActionHandlers, ActionKind, DownloadDir};
use crate::config::FormConfig;
use crate::platform::is_shortcut;
use crate::server::ResumeService;
use crate::state::{
    AppState, Field, Form, RealtimeBinder, ResumeButton, ResumeForm, SubmitController, SubmitOutcome,
    SubmitState, View,
};
use crossterm::event::{KeyCode, KeyEvent};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    binder: RealtimeBinder,
    submit: SubmitController,
    actions: ActionHandlers,
    /// Completions from spawned actions
    events: UnboundedReceiver<ActionEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to `service`
    pub fn new(config: &FormConfig, service: Arc<dyn ResumeService>) -> Self {
        let resume = ResumeForm::new();
        let binder = RealtimeBinder::bind(&resume, config.realtime_name_check());
        let (actions, events) = ActionHandlers::new(
            service,
            DownloadDir::new(config.download_dir()),
            config.request_timeout(),
        );

        Self {
            state: AppState::new(resume),
            binder,
            submit: SubmitController::new(),
            actions,
            events,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn is_busy(&self, kind: ActionKind) -> bool {
        self.actions.is_in_flight(kind)
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit.state()
    }

    pub fn download_dir(&self) -> &Path {
        self.actions.downloads().path()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => return self.submit(),
                KeyCode::Char('p') => return self.download_pdf(),
                KeyCode::Char('e') => return self.open_email_view(),
                _ => {}
            }
        }

        match self.state.current_view {
            View::Resume => self.handle_resume_key(key),
            View::Email => self.handle_email_key(key),
        }
    }

    fn handle_resume_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.resume;
        match key.code {
            KeyCode::Esc => self.cancel_actions(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter if form.is_buttons_row_active() => self.activate_button(),
            KeyCode::Enter => {
                let multiline = form
                    .get_field(form.active_field())
                    .is_some_and(|f| f.is_multiline);
                if multiline {
                    self.edit_active_field(|field| field.push_char('\n'));
                } else {
                    form.next_field();
                }
            }
            KeyCode::Char(c) if !is_shortcut(key.modifiers) => {
                self.edit_active_field(|field| field.push_char(c));
            }
            KeyCode::Backspace => self.edit_active_field(|field| field.pop_char()),
            _ => {}
        }
    }

    fn activate_button(&mut self) {
        match self.state.resume.selected_button {
            ResumeButton::Submit => self.submit(),
            ResumeButton::DownloadPdf => self.download_pdf(),
            ResumeButton::Email => self.open_email_view(),
        }
    }

    /// Apply an edit to the active resume field, then validate it
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut Field)) {
        if let Some(field) = self.state.resume.get_active_field_mut() {
            edit(field);
            self.binder.on_input(field);
        }
    }

    fn handle_email_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.email;
        match key.code {
            KeyCode::Esc => self.state.current_view = View::Resume,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => self.send_email(),
            KeyCode::Char(c) if !is_shortcut(key.modifiers) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    fn open_email_view(&mut self) {
        self.state.current_view = View::Email;
        self.state.email.set_active_field(0);
    }

    /// Validate the whole resume form and post it if every field passes
    pub fn submit(&mut self) {
        match self.submit.submit(&mut self.state.resume) {
            SubmitOutcome::Rejected { invalid_fields } => {
                if let Some(first) = invalid_fields.first() {
                    if let Some(index) = self
                        .state
                        .resume
                        .fields
                        .iter()
                        .position(|f| &f.name == first)
                    {
                        self.state.resume.set_active_field(index);
                    }
                }
            }
            SubmitOutcome::Accepted(snapshot) => {
                if self.actions.submit_form(snapshot).is_some() {
                    self.state.feedback.show("Submitting resume...", false);
                } else {
                    self.reject_busy(ActionKind::SubmitForm);
                }
            }
            SubmitOutcome::AlreadySubmitted => {
                self.state.feedback.show("Resume already submitted.", false);
            }
        }
    }

    /// Request a PDF of the current form
    pub fn download_pdf(&mut self) {
        let snapshot = self.state.resume.snapshot();
        if self.actions.download_pdf(snapshot).is_some() {
            self.state.feedback.show("Generating PDF...", false);
        } else {
            self.reject_busy(ActionKind::DownloadPdf);
        }
    }

    /// Email the current form to the address in the email view
    pub fn send_email(&mut self) {
        let snapshot = self.state.resume.snapshot();
        let address = self.state.email.address().to_string();
        if self.actions.send_email(snapshot, address).is_some() {
            self.state.feedback.show("Sending email...", false);
        } else {
            self.reject_busy(ActionKind::SendEmail);
        }
    }

    fn reject_busy(&mut self, kind: ActionKind) {
        self.state
            .feedback
            .show(format!("{} already in progress.", kind.label()), true);
    }

    /// Cancel every in-flight action
    pub fn cancel_actions(&mut self) {
        let cancelled = self.actions.cancel_all();
        for kind in &cancelled {
            if *kind == ActionKind::SubmitForm {
                self.submit.reopen();
            }
        }
        if let Some(kind) = cancelled.last() {
            let (text, is_error) = kind.feedback(&Err(ActionError::Cancelled));
            self.state.feedback.show(text, is_error);
        }
    }

    /// Drain finished actions without blocking
    pub fn poll_action_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.apply_action_event(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Surface one action outcome in the feedback slot
    pub fn apply_action_event(&mut self, event: ActionEvent) {
        if !self.actions.complete(&event) {
            return;
        }
        if event.kind == ActionKind::SubmitForm && event.result.is_err() {
            self.submit.reopen();
        }
        let (text, is_error) = event.kind.feedback(&event.result);
        self.state.feedback.show(text, is_error);
    }
}
