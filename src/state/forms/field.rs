//! Form field value objects

use crate::state::FieldFeedback;

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    /// Any other required field
    Generic,
}

/// A single named input with its current value and validity annotation
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    /// Placeholder text, also used as the label in error messages
    pub placeholder: String,
    pub kind: FieldKind,
    pub value: String,
    pub is_multiline: bool,
    pub feedback: FieldFeedback,
}

impl Field {
    /// Create a new empty single-line field
    pub fn new(name: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value: String::new(),
            is_multiline: false,
            feedback: FieldFeedback::default(),
        }
    }

    /// Create a new empty multiline (textarea) field
    pub fn multiline(name: &str, placeholder: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::new(name, placeholder, FieldKind::Generic)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// True when the last validation run marked this field invalid
    pub fn is_invalid(&self) -> bool {
        self.feedback.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty_and_unmarked() {
        let field = Field::new("email", "Email Address", FieldKind::Email);
        assert_eq!(field.as_text(), "");
        assert!(!field.is_multiline);
        assert!(!field.is_invalid());
        assert!(!field.feedback.tooltip_visible);
    }

    #[test]
    fn test_multiline_is_generic() {
        let field = Field::multiline("skills", "Skills");
        assert!(field.is_multiline);
        assert_eq!(field.kind, FieldKind::Generic);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = Field::new("name", "Full Name", FieldKind::Name);
        field.push_char('A');
        field.push_char('é');
        assert_eq!(field.as_text(), "Aé");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = Field::new("name", "Full Name", FieldKind::Name);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }
}
