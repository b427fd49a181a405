//! Field validators
//!
//! Each validator is a pure check over a field's value. [`Validator::apply`]
//! pairs the check with its side effect on the field's feedback. Values are
//! only trimmed for the check, never modified.

use super::field::Field;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex"));

pub const NAME_REQUIRED: &str = "Name is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_PHONE: &str = "Enter a valid 10-digit phone number.";

/// Validation rule applied to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    Name,
    Email,
    Phone,
    /// Non-empty check with a message built from the field's label
    Required,
}

impl Validator {
    /// Check `value` against this rule. `label` is only used by `Required`.
    pub fn check(self, value: &str, label: &str) -> Result<(), String> {
        let value = value.trim();
        let ok = match self {
            Validator::Name | Validator::Required => !value.is_empty(),
            Validator::Email => EMAIL_PATTERN.is_match(value),
            Validator::Phone => PHONE_PATTERN.is_match(value),
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            Validator::Name => NAME_REQUIRED.to_string(),
            Validator::Email => INVALID_EMAIL.to_string(),
            Validator::Phone => INVALID_PHONE.to_string(),
            Validator::Required => format!("{label} is required."),
        })
    }

    /// Validate the field's current value and annotate it. Returns validity.
    pub fn apply(self, field: &mut Field) -> bool {
        match self.check(&field.value, &field.placeholder) {
            Ok(()) => {
                field.feedback.show_success();
                true
            }
            Err(message) => {
                field.feedback.show_error(message);
                false
            }
        }
    }
}
