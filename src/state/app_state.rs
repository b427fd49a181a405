//! Application state definitions

use super::feedback::FeedbackSlot;
use super::forms::{EmailForm, ResumeForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Resume,
    /// Separate form collecting the destination address
    Email,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub resume: ResumeForm,
    pub email: EmailForm,
    pub feedback: FeedbackSlot,
}

impl AppState {
    pub fn new(resume: ResumeForm) -> Self {
        Self {
            resume,
            ..Default::default()
        }
    }
}
