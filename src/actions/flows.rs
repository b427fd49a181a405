//! The remote round-trips behind each action

use super::download::DownloadDir;
use super::error::ActionError;
use super::ActionSuccess;
use crate::server::{EmailRequest, ResumeService};
use crate::state::FormSnapshot;
use std::sync::Arc;

pub const PDF_FILE_NAME: &str = "resume.pdf";

/// Generate the PDF and save it as `resume.pdf`
pub(super) async fn download_pdf(
    service: Arc<dyn ResumeService>,
    downloads: DownloadDir,
    snapshot: FormSnapshot,
) -> Result<ActionSuccess, ActionError> {
    let document = service.generate_pdf(&snapshot).await?;
    let path = downloads.save(PDF_FILE_NAME, document).await?;
    Ok(ActionSuccess::PdfSaved(path))
}

/// Send the field map together with the separately entered address
pub(super) async fn send_email(
    service: Arc<dyn ResumeService>,
    snapshot: FormSnapshot,
    email_address: String,
) -> Result<ActionSuccess, ActionError> {
    let request = EmailRequest {
        form_data: snapshot,
        email_address,
    };
    service.send_email(&request).await?;
    Ok(ActionSuccess::EmailSent)
}

/// Post the validated form
pub(super) async fn submit_form(
    service: Arc<dyn ResumeService>,
    snapshot: FormSnapshot,
) -> Result<ActionSuccess, ActionError> {
    service.submit_form(&snapshot).await?;
    Ok(ActionSuccess::Submitted)
}
