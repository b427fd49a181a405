//! Real-time validation wiring
//!
//! The field-to-validator mapping is decided once when the binder is built.
//! Every edit then runs the mapped validator against the edited field.

use super::field::{Field, FieldKind};
use super::form_state::ResumeForm;
use super::validators::Validator;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RealtimeBinder {
    validators: HashMap<String, Validator>,
}

impl RealtimeBinder {
    /// Build the mapping for `form`.
    ///
    /// Unless `check_name_live` is set, the name field uses the generic
    /// required check while typing and only gets the Name rule at submit.
    pub fn bind(form: &ResumeForm, check_name_live: bool) -> Self {
        let validators = form
            .fields
            .iter()
            .map(|field| {
                let validator = match field.kind {
                    FieldKind::Email => Validator::Email,
                    FieldKind::Phone => Validator::Phone,
                    FieldKind::Name if check_name_live => Validator::Name,
                    FieldKind::Name | FieldKind::Generic => Validator::Required,
                };
                (field.name.clone(), validator)
            })
            .collect();
        Self { validators }
    }

    /// Validator for a field name; unmapped names get the required check
    pub fn validator_for(&self, name: &str) -> Validator {
        self.validators
            .get(name)
            .copied()
            .unwrap_or(Validator::Required)
    }

    /// Handle an input event on `field`. Returns the field's validity.
    pub fn on_input(&self, field: &mut Field) -> bool {
        self.validator_for(&field.name).apply(field)
    }
}
