//! Form rendering module
//!
//! - `field_renderer`: a single input with its error tooltip
//! - `resume_form`: the resume form and its button row
//! - `email_form`: the email address form

mod email_form;
mod field_renderer;
mod resume_form;

pub use email_form::draw_email_form;
pub use resume_form::draw_resume_form;
