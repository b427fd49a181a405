//! Full-form validation gating the resume submission

use super::form_state::{FormSnapshot, ResumeForm};
use super::validators::Validator;

/// Fields checked with their own rule before the generic pass
const EXPLICIT_CHECKS: [(&str, Validator); 3] = [
    ("name", Validator::Name),
    ("email", Validator::Email),
    ("phone", Validator::Phone),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Held only for the duration of one `submit` call
    Validating,
    /// Submission accepted; the form has been handed off once
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; errors are visible on the form
    Rejected { invalid_fields: Vec<String> },
    /// Every check passed; carry the snapshot to submit
    Accepted(FormSnapshot),
    /// A previous submission was already accepted
    AlreadySubmitted,
}

#[derive(Debug, Clone, Default)]
pub struct SubmitController {
    state: SubmitState,
}

impl SubmitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Validate every field of `form` and decide whether it may be submitted.
    ///
    /// All validators run regardless of earlier failures so every field's
    /// feedback is refreshed.
    pub fn submit(&mut self, form: &mut ResumeForm) -> SubmitOutcome {
        if self.state == SubmitState::Submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        self.transition(SubmitState::Validating);

        let mut invalid_fields = Vec::new();
        for (name, validator) in EXPLICIT_CHECKS {
            match form.field_mut(name) {
                Some(field) => {
                    if !validator.apply(field) {
                        invalid_fields.push(name.to_string());
                    }
                }
                None => {
                    tracing::warn!(field = name, "form has no field for explicit check");
                    invalid_fields.push(name.to_string());
                }
            }
        }

        for field in form
            .fields
            .iter_mut()
            .filter(|f| !EXPLICIT_CHECKS.iter().any(|(name, _)| f.name == *name))
        {
            if !Validator::Required.apply(field) {
                invalid_fields.push(field.name.clone());
            }
        }

        if invalid_fields.is_empty() {
            self.transition(SubmitState::Submitted);
            tracing::info!("resume form accepted for submission");
            SubmitOutcome::Accepted(form.snapshot())
        } else {
            self.transition(SubmitState::Idle);
            tracing::debug!(?invalid_fields, "resume form rejected");
            SubmitOutcome::Rejected { invalid_fields }
        }
    }

    /// Return to `Idle` after the handed-off submission failed
    pub fn reopen(&mut self) {
        self.transition(SubmitState::Idle);
    }

    fn transition(&mut self, next: SubmitState) {
        tracing::debug!(from = ?self.state, to = ?next, "submit state");
        self.state = next;
    }
}
