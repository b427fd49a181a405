//! HTTP client module for the resume server endpoints

mod client;
mod error;
mod traits;

pub use client::{EmailRequest, HttpResumeService};
pub use error::{Endpoint, ServiceError, ServiceResult};
pub use traits::ResumeService;

#[cfg(test)]
pub use traits::MockResumeService;
