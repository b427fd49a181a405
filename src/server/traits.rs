//! Trait abstraction for the resume server to enable mocking in tests

use super::client::EmailRequest;
use super::error::ServiceResult;
use crate::state::FormSnapshot;
use async_trait::async_trait;

/// Remote operations the form performs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResumeService: Send + Sync {
    /// Render the form as a PDF document; returns the document bytes
    async fn generate_pdf(&self, snapshot: &FormSnapshot) -> ServiceResult<Vec<u8>>;

    /// Email the form data to the requested address
    async fn send_email(&self, request: &EmailRequest) -> ServiceResult<()>;

    /// Submit the validated form
    async fn submit_form(&self, snapshot: &FormSnapshot) -> ServiceResult<()>;
}
