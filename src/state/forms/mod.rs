//! Form domain layer
//!
//! Fields, validators, real-time validation wiring and the submit gate for
//! the resume form, plus the separate email form.

mod binder;
mod field;
mod form_state;
mod submit;
mod validators;

pub use binder::RealtimeBinder;
pub use field::{Field, FieldKind};
pub use form_state::{EmailForm, Form, FormSnapshot, ResumeButton, ResumeForm};
pub use submit::{SubmitController, SubmitOutcome, SubmitState};
pub use validators::Validator;
