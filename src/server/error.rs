//! Service error types

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Remote endpoints the form talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Generate,
    Email,
    Submit,
}

impl Endpoint {
    /// Message shown when the endpoint answers with a non-success status
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Generate => "Failed to generate PDF.",
            Endpoint::Email => "Failed to send email.",
            Endpoint::Submit => "Failed to submit form.",
        }
    }
}

/// Errors from one round-trip to the resume server
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("could not reach server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{}", .endpoint.failure_message())]
    Status { endpoint: Endpoint, code: u16 },

    #[error("unreadable response: {0}")]
    Parse(String),
}

impl ServiceError {
    /// HTTP status code, when the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::Status { code, .. } => Some(*code),
            ServiceError::Transport(e) => e.status().map(|s| s.as_u16()),
            ServiceError::Parse(_) => None,
        }
    }
}
