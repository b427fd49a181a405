//! Form state management and form structs

use super::field::{Field, FieldKind};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut Field>;
    fn get_field(&self, index: usize) -> Option<&Field>;
}

/// Buttons on the resume form's button row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeButton {
    #[default]
    Submit,
    DownloadPdf,
    Email,
}

impl ResumeButton {
    pub const ALL: [ResumeButton; 3] = [
        ResumeButton::Submit,
        ResumeButton::DownloadPdf,
        ResumeButton::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::DownloadPdf => "Download PDF",
            Self::Email => "Email...",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Submit => Self::DownloadPdf,
            Self::DownloadPdf => Self::Email,
            Self::Email => Self::Submit,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Submit => Self::Email,
            Self::DownloadPdf => Self::Submit,
            Self::Email => Self::DownloadPdf,
        }
    }
}

// Resume Form
#[derive(Debug, Clone)]
pub struct ResumeForm {
    pub fields: Vec<Field>,
    /// Index into `fields`; `fields.len()` means the button row
    pub active_field_index: usize,
    pub selected_button: ResumeButton,
}

impl ResumeForm {
    /// The standard resume layout
    pub fn new() -> Self {
        Self::with_fields(vec![
            Field::new("name", "Full Name", FieldKind::Name),
            Field::new("email", "Email Address", FieldKind::Email),
            Field::new("phone", "Phone Number", FieldKind::Phone),
            Field::new("address", "Address", FieldKind::Generic),
            Field::multiline("education", "Education"),
            Field::multiline("experience", "Work Experience"),
            Field::multiline("skills", "Skills"),
        ])
    }

    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            fields,
            active_field_index: 0,
            selected_button: ResumeButton::default(),
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.next();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.prev();
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Capture every field's name and raw value
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::from_fields(&self.fields)
    }
}

impl Default for ResumeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ResumeForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }
}

// Email Form
#[derive(Debug, Clone)]
pub struct EmailForm {
    pub address: Field,
    /// 0 = address, 1 = send button
    pub active_field_index: usize,
}

impl EmailForm {
    pub fn new() -> Self {
        Self {
            address: Field::new("emailAddress", "Recipient Email", FieldKind::Generic),
            active_field_index: 0,
        }
    }

    pub fn is_send_button_active(&self) -> bool {
        self.active_field_index == 1
    }

    /// Destination address exactly as entered
    pub fn address(&self) -> &str {
        self.address.as_text()
    }
}

impl Default for EmailForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for EmailForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut Field> {
        match self.active_field_index {
            0 => Some(&mut self.address),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&Field> {
        match index {
            0 => Some(&self.address),
            _ => None,
        }
    }
}

/// Field name/value pairs captured at one point in time, in form order.
///
/// Serializes as a JSON object of `name: value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    entries: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn from_fields(fields: &[Field]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormSnapshot {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
