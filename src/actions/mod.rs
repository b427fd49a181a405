//! Side actions: PDF download, email send and the form post
//!
//! Each action runs as a spawned task that reports back over a channel. At
//! most one invocation per action kind is in flight; every invocation is
//! bounded by a timeout and owns a cancellation token.

mod download;
mod error;
mod flows;

pub use download::DownloadDir;
pub use error::ActionError;

use crate::server::ResumeService;
use crate::state::FormSnapshot;
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Identifies one action invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(Uuid);

impl ActionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    DownloadPdf,
    SendEmail,
    SubmitForm,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DownloadPdf => "PDF download",
            Self::SendEmail => "Email send",
            Self::SubmitForm => "Form submission",
        }
    }

    /// Feedback text for an outcome, and whether it is an error
    pub fn feedback(&self, result: &Result<ActionSuccess, ActionError>) -> (String, bool) {
        match (self, result) {
            (Self::DownloadPdf, Ok(_)) => ("PDF downloaded successfully!".to_string(), false),
            (Self::DownloadPdf, Err(e)) => (format!("Error downloading PDF: {e}"), true),
            (Self::SendEmail, Ok(_)) => ("Email sent successfully!".to_string(), false),
            (Self::SendEmail, Err(e)) => (format!("Error sending email: {e}"), true),
            (Self::SubmitForm, Ok(_)) => ("Resume submitted successfully!".to_string(), false),
            (Self::SubmitForm, Err(e)) => (format!("Error submitting form: {e}"), true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSuccess {
    PdfSaved(PathBuf),
    EmailSent,
    Submitted,
}

/// Completion report sent back by an action task
#[derive(Debug)]
pub struct ActionEvent {
    pub id: ActionId,
    pub kind: ActionKind,
    pub result: Result<ActionSuccess, ActionError>,
}

#[derive(Debug)]
struct InFlight {
    id: ActionId,
    cancel: CancellationToken,
}

pub struct ActionHandlers {
    service: Arc<dyn ResumeService>,
    downloads: DownloadDir,
    timeout: Duration,
    events_tx: UnboundedSender<ActionEvent>,
    in_flight: HashMap<ActionKind, InFlight>,
}

impl ActionHandlers {
    /// Create the handlers and the receiver their completions arrive on
    pub fn new(
        service: Arc<dyn ResumeService>,
        downloads: DownloadDir,
        timeout: Duration,
    ) -> (Self, UnboundedReceiver<ActionEvent>) {
        let (events_tx, events_rx) = unbounded_channel();
        let handlers = Self {
            service,
            downloads,
            timeout,
            events_tx,
            in_flight: HashMap::new(),
        };
        (handlers, events_rx)
    }

    pub fn is_in_flight(&self, kind: ActionKind) -> bool {
        self.in_flight.contains_key(&kind)
    }

    pub fn downloads(&self) -> &DownloadDir {
        &self.downloads
    }

    /// Start a PDF download. `None` if one is already in flight.
    pub fn download_pdf(&mut self, snapshot: FormSnapshot) -> Option<ActionId> {
        let service = Arc::clone(&self.service);
        let downloads = self.downloads.clone();
        self.spawn(
            ActionKind::DownloadPdf,
            flows::download_pdf(service, downloads, snapshot),
        )
    }

    /// Start an email send. `None` if one is already in flight.
    pub fn send_email(&mut self, snapshot: FormSnapshot, email_address: String) -> Option<ActionId> {
        let service = Arc::clone(&self.service);
        self.spawn(
            ActionKind::SendEmail,
            flows::send_email(service, snapshot, email_address),
        )
    }

    /// Post the validated form. `None` if a post is already in flight.
    pub fn submit_form(&mut self, snapshot: FormSnapshot) -> Option<ActionId> {
        let service = Arc::clone(&self.service);
        self.spawn(ActionKind::SubmitForm, flows::submit_form(service, snapshot))
    }

    fn spawn<F>(&mut self, kind: ActionKind, flow: F) -> Option<ActionId>
    where
        F: Future<Output = Result<ActionSuccess, ActionError>> + Send + 'static,
    {
        if self.is_in_flight(kind) {
            tracing::info!(?kind, "action already in flight, ignoring trigger");
            return None;
        }

        let id = ActionId::new();
        let cancel = CancellationToken::new();
        self.in_flight.insert(
            kind,
            InFlight {
                id,
                cancel: cancel.clone(),
            },
        );

        let timeout = self.timeout;
        let events_tx = self.events_tx.clone();
        tracing::info!(?kind, %id, "action started");
        tokio::spawn(async move {
            let result = run_guarded(flow, timeout, cancel).await;
            // Receiver gone means the app is shutting down
            let _ = events_tx.send(ActionEvent { id, kind, result });
        });
        Some(id)
    }

    /// Cancel every in-flight action and forget it.
    ///
    /// Returns the cancelled kinds. Their late completions are stale.
    pub fn cancel_all(&mut self) -> Vec<ActionKind> {
        let cancelled: Vec<ActionKind> = self.in_flight.keys().copied().collect();
        for (kind, in_flight) in self.in_flight.drain() {
            tracing::info!(?kind, id = %in_flight.id, "action cancelled");
            in_flight.cancel.cancel();
        }
        cancelled
    }

    /// Record a completion. Returns false for stale events, which must be ignored.
    pub fn complete(&mut self, event: &ActionEvent) -> bool {
        match self.in_flight.get(&event.kind) {
            Some(in_flight) if in_flight.id == event.id => {
                self.in_flight.remove(&event.kind);
                match &event.result {
                    Ok(ActionSuccess::PdfSaved(path)) => {
                        tracing::info!(id = %event.id, path = %path.display(), "PDF saved")
                    }
                    Ok(_) => tracing::info!(kind = ?event.kind, id = %event.id, "action succeeded"),
                    Err(e) => tracing::warn!(
                        kind = ?event.kind,
                        id = %event.id,
                        status = ?e.status_code(),
                        error = %e,
                        "action failed"
                    ),
                }
                true
            }
            _ => {
                tracing::debug!(kind = ?event.kind, id = %event.id, "discarding stale action event");
                false
            }
        }
    }
}

/// Run `flow` until it finishes, the timeout elapses or `cancel` fires
async fn run_guarded<F>(
    flow: F,
    timeout: Duration,
    cancel: CancellationToken,
) -> Result<ActionSuccess, ActionError>
where
    F: Future<Output = Result<ActionSuccess, ActionError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ActionError::Cancelled),
        outcome = tokio::time::timeout(timeout, flow) => match outcome {
            Ok(result) => result,
            Err(_) => Err(ActionError::Timeout(timeout)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        EmailRequest, Endpoint, MockResumeService, ServiceError, ServiceResult,
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    /// Service whose calls never answer in time
    struct SlowService;

    #[async_trait]
    impl ResumeService for SlowService {
        async fn generate_pdf(&self, _snapshot: &FormSnapshot) -> ServiceResult<Vec<u8>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }
        async fn send_email(&self, _request: &EmailRequest) -> ServiceResult<()> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
        async fn submit_form(&self, _snapshot: &FormSnapshot) -> ServiceResult<()> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    fn snapshot() -> FormSnapshot {
        FormSnapshot::from([("name", "Ada"), ("email", "x@y.com")])
    }

    fn handlers(
        service: impl ResumeService + 'static,
        dir: &std::path::Path,
        timeout: Duration,
    ) -> (ActionHandlers, UnboundedReceiver<ActionEvent>) {
        ActionHandlers::new(Arc::new(service), DownloadDir::new(dir), timeout)
    }

    #[tokio::test]
    async fn test_pdf_error_status_reports_legacy_message_and_saves_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut service = MockResumeService::new();
        service.expect_generate_pdf().times(1).returning(|_| {
            Err(ServiceError::Status {
                endpoint: Endpoint::Generate,
                code: 500,
            })
        });
        let (mut actions, mut events) = handlers(service, tmp.path(), Duration::from_secs(5));

        let id = actions.download_pdf(snapshot()).unwrap();
        let event = events.recv().await.unwrap();

        assert_eq!(event.id, id);
        assert!(actions.complete(&event));
        assert_eq!(
            event.kind.feedback(&event.result),
            (
                "Error downloading PDF: Failed to generate PDF.".to_string(),
                true
            )
        );
        assert!(!tmp.path().join("resume.pdf").exists());
        assert!(!actions.is_in_flight(ActionKind::DownloadPdf));
    }

    #[tokio::test]
    async fn test_pdf_success_saves_resume_pdf() {
        let tmp = tempfile::tempdir().unwrap();
        let mut service = MockResumeService::new();
        service
            .expect_generate_pdf()
            .withf(|s| s.get("name") == Some("Ada"))
            .returning(|_| Ok(b"%PDF-1.7".to_vec()));
        let (mut actions, mut events) = handlers(service, tmp.path(), Duration::from_secs(5));

        actions.download_pdf(snapshot());
        let event = events.recv().await.unwrap();

        assert!(actions.complete(&event));
        let saved = tmp.path().join("resume.pdf");
        assert_eq!(event.result.as_ref().unwrap(), &ActionSuccess::PdfSaved(saved.clone()));
        assert_eq!(std::fs::read(saved).unwrap(), b"%PDF-1.7");
        assert_eq!(
            event.kind.feedback(&event.result),
            ("PDF downloaded successfully!".to_string(), false)
        );
    }

    #[tokio::test]
    async fn test_email_success_sends_fields_and_address() {
        let tmp = tempfile::tempdir().unwrap();
        let mut service = MockResumeService::new();
        service
            .expect_send_email()
            .withf(|req| {
                req.email_address == "hr@example.com"
                    && req.form_data == FormSnapshot::from([("name", "Ada"), ("email", "x@y.com")])
            })
            .times(1)
            .returning(|_| Ok(()));
        let (mut actions, mut events) = handlers(service, tmp.path(), Duration::from_secs(5));

        actions.send_email(snapshot(), "hr@example.com".to_string());
        let event = events.recv().await.unwrap();

        assert!(actions.complete(&event));
        assert_eq!(
            event.kind.feedback(&event.result),
            ("Email sent successfully!".to_string(), false)
        );
    }

    #[tokio::test]
    async fn test_email_failure_message() {
        let tmp = tempfile::tempdir().unwrap();
        let mut service = MockResumeService::new();
        service.expect_send_email().returning(|_| {
            Err(ServiceError::Status {
                endpoint: Endpoint::Email,
                code: 503,
            })
        });
        let (mut actions, mut events) = handlers(service, tmp.path(), Duration::from_secs(5));

        actions.send_email(snapshot(), String::new());
        let event = events.recv().await.unwrap();

        assert_eq!(
            event.kind.feedback(&event.result).0,
            "Error sending email: Failed to send email."
        );
    }

    #[tokio::test]
    async fn test_second_trigger_is_rejected_while_in_flight() {
        let tmp = tempfile::tempdir().unwrap();
        let mut service = MockResumeService::new();
        service
            .expect_generate_pdf()
            .times(1)
            .returning(|_| Ok(b"%PDF".to_vec()));
        let (mut actions, mut events) = handlers(service, tmp.path(), Duration::from_secs(5));

        assert!(actions.download_pdf(snapshot()).is_some());
        assert!(actions.download_pdf(snapshot()).is_none());
        assert!(actions.is_in_flight(ActionKind::DownloadPdf));

        let event = events.recv().await.unwrap();
        assert!(actions.complete(&event));
        assert!(!actions.is_in_flight(ActionKind::DownloadPdf));
    }

    #[tokio::test]
    async fn test_different_kinds_run_independently() {
        let tmp = tempfile::tempdir().unwrap();
        let (mut actions, _events) = handlers(SlowService, tmp.path(), Duration::from_secs(5));

        assert!(actions.download_pdf(snapshot()).is_some());
        assert!(actions.send_email(snapshot(), "a@b.co".into()).is_some());
        assert!(actions.is_in_flight(ActionKind::DownloadPdf));
        assert!(actions.is_in_flight(ActionKind::SendEmail));
        actions.cancel_all();
    }

    #[tokio::test]
    async fn test_hung_request_times_out() {
        let tmp = tempfile::tempdir().unwrap();
        let (mut actions, mut events) =
            handlers(SlowService, tmp.path(), Duration::from_millis(50));

        actions.send_email(snapshot(), "hr@example.com".into());
        let event = events.recv().await.unwrap();

        assert!(matches!(event.result, Err(ActionError::Timeout(_))));
        assert!(actions.complete(&event));
        assert_eq!(
            event.kind.feedback(&event.result).0,
            "Error sending email: Request timed out after 50ms."
        );
    }

    #[tokio::test]
    async fn test_cancel_makes_completion_stale() {
        let tmp = tempfile::tempdir().unwrap();
        let (mut actions, mut events) = handlers(SlowService, tmp.path(), Duration::from_secs(30));

        actions.submit_form(snapshot());
        assert_eq!(actions.cancel_all(), vec![ActionKind::SubmitForm]);
        assert!(!actions.is_in_flight(ActionKind::SubmitForm));

        let event = events.recv().await.unwrap();
        assert!(matches!(event.result, Err(ActionError::Cancelled)));
        assert!(!actions.complete(&event));
    }

    #[tokio::test]
    async fn test_retrigger_after_cancel_ignores_old_completion() {
        let tmp = tempfile::tempdir().unwrap();
        let (mut actions, mut events) = handlers(SlowService, tmp.path(), Duration::from_secs(30));

        let first = actions.download_pdf(snapshot()).unwrap();
        actions.cancel_all();
        let second = actions.download_pdf(snapshot()).unwrap();
        assert_ne!(first, second);

        let event = events.recv().await.unwrap();
        assert_eq!(event.id, first);
        assert!(!actions.complete(&event));
        assert!(actions.is_in_flight(ActionKind::DownloadPdf));
        actions.cancel_all();
    }

    #[test]
    fn test_submit_feedback() {
        let ok = Ok(ActionSuccess::Submitted);
        assert_eq!(
            ActionKind::SubmitForm.feedback(&ok),
            ("Resume submitted successfully!".to_string(), false)
        );
        let err = Err(ActionError::Cancelled);
        assert_eq!(
            ActionKind::SubmitForm.feedback(&err),
            ("Error submitting form: Request cancelled.".to_string(), true)
        );
    }
}
