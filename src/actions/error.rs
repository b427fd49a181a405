//! Action error types

use crate::server::ServiceError;
use std::time::Duration;
use thiserror::Error;

/// Why a side action did not complete
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Request timed out after {0:?}.")]
    Timeout(Duration),

    #[error("Request cancelled.")]
    Cancelled,

    #[error("could not save {file}: {source}")]
    Save {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl ActionError {
    /// HTTP status code, when the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ActionError::Service(e) => e.status_code(),
            _ => None,
        }
    }
}
