//! Feedback surfaces: per-field tooltips and the global status slot

use chrono::{DateTime, Local};

/// Error indicator and tooltip attached to one field's container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFeedback {
    /// Container carries the error indicator
    pub error: bool,
    /// Last tooltip text; kept when hidden
    pub tooltip: String,
    pub tooltip_visible: bool,
}

impl FieldFeedback {
    /// Mark the field invalid and show `message` in its tooltip
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = true;
        self.tooltip = message.into();
        self.tooltip_visible = true;
    }

    /// Clear the error indicator and hide the tooltip
    pub fn show_success(&mut self) {
        self.error = false;
        self.tooltip_visible = false;
    }

    /// The tooltip text, if it is currently visible
    pub fn visible_tooltip(&self) -> Option<&str> {
        self.tooltip_visible.then_some(self.tooltip.as_str())
    }
}

/// One global outcome message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub is_error: bool,
    pub shown_at: DateTime<Local>,
}

/// The single global feedback slot. Each message replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSlot {
    current: Option<FeedbackMessage>,
}

impl FeedbackSlot {
    pub fn show(&mut self, text: impl Into<String>, is_error: bool) {
        let text = text.into();
        if is_error {
            tracing::debug!(%text, "feedback error");
        }
        self.current = Some(FeedbackMessage {
            text,
            is_error,
            shown_at: Local::now(),
        });
    }

    pub fn current(&self) -> Option<&FeedbackMessage> {
        self.current.as_ref()
    }

    /// Text of the current message, if any
    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn is_error(&self) -> bool {
        self.current.as_ref().is_some_and(|m| m.is_error)
    }
}
