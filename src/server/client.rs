//! HTTP client for the resume server
//!
//! Wraps the three endpoints the form uses: `POST /generate` (multipart form
//! data, PDF bytes back), `POST /email` (JSON body) and the form's own submit
//! path (url-encoded, like a browser form post).

use super::error::{Endpoint, ServiceError, ServiceResult};
use super::traits::ResumeService;
use crate::config::FormConfig;
use crate::state::FormSnapshot;
use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Serialize;
use std::time::Duration;

const GENERATE_PATH: &str = "/generate";
const EMAIL_PATH: &str = "/email";

/// JSON body for `POST /email`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub form_data: FormSnapshot,
    pub email_address: String,
}

/// Client for the resume server
#[derive(Debug, Clone)]
pub struct HttpResumeService {
    client: Client,
    base_url: String,
    submit_path: String,
}

impl HttpResumeService {
    pub fn new(base_url: &str, submit_path: &str, timeout: Duration) -> ServiceResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            submit_path: normalize_path(submit_path),
        })
    }

    pub fn from_config(config: &FormConfig) -> ServiceResult<Self> {
        Self::new(
            &config.server_url(),
            config.submit_path(),
            config.request_timeout(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Map a non-success status to a typed error
fn ensure_success(response: Response, endpoint: Endpoint) -> ServiceResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::warn!(?endpoint, status = status.as_u16(), "server returned error status");
    Err(ServiceError::Status {
        endpoint,
        code: status.as_u16(),
    })
}

#[async_trait]
impl ResumeService for HttpResumeService {
    async fn generate_pdf(&self, snapshot: &FormSnapshot) -> ServiceResult<Vec<u8>> {
        let form = snapshot
            .entries()
            .iter()
            .fold(multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self
            .client
            .post(self.url(GENERATE_PATH))
            .multipart(form)
            .send()
            .await?;
        let response = ensure_success(response, Endpoint::Generate)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;
        if body.is_empty() {
            return Err(ServiceError::Parse("empty document body".to_string()));
        }
        tracing::debug!(bytes = body.len(), "received generated PDF");
        Ok(body.to_vec())
    }

    async fn send_email(&self, request: &EmailRequest) -> ServiceResult<()> {
        let response = self
            .client
            .post(self.url(EMAIL_PATH))
            .json(request)
            .send()
            .await?;
        ensure_success(response, Endpoint::Email)?;
        Ok(())
    }

    async fn submit_form(&self, snapshot: &FormSnapshot) -> ServiceResult<()> {
        let response = self
            .client
            .post(self.url(&self.submit_path))
            .form(snapshot.entries())
            .send()
            .await?;
        ensure_success(response, Endpoint::Submit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> HttpResumeService {
        HttpResumeService::new(&server.uri(), "/submit", Duration::from_secs(5)).unwrap()
    }

    fn snapshot() -> FormSnapshot {
        FormSnapshot::from([
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "5551234567"),
        ])
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("submit"), "/submit");
        assert_eq!(normalize_path("/resume/submit"), "/resume/submit");
    }

    #[test]
    fn test_email_request_wire_format() {
        let request = EmailRequest {
            form_data: FormSnapshot::from([("name", "Ada")]),
            email_address: "hr@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "formData": { "name": "Ada" },
                "emailAddress": "hr@example.com"
            })
        );
    }

    #[tokio::test]
    async fn test_generate_pdf_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let bytes = service(&server).generate_pdf(&snapshot()).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.7".to_vec());

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"phone\""));
        assert!(body.contains("5551234567"));
    }

    #[tokio::test]
    async fn test_generate_pdf_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = service(&server).generate_pdf(&snapshot()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Status {
                endpoint: Endpoint::Generate,
                code: 500
            }
        ));
        assert_eq!(err.to_string(), "Failed to generate PDF.");
    }

    #[tokio::test]
    async fn test_generate_pdf_empty_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = service(&server).generate_pdf(&snapshot()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_send_email_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/email"))
            .and(body_json(serde_json::json!({
                "formData": {
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "phone": "5551234567"
                },
                "emailAddress": "hr@example.com"
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let request = EmailRequest {
            form_data: snapshot(),
            email_address: "hr@example.com".to_string(),
        };
        tokio_test::assert_ok!(service(&server).send_email(&request).await);
    }

    #[tokio::test]
    async fn test_send_email_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/email"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let request = EmailRequest {
            form_data: snapshot(),
            email_address: String::new(),
        };
        let err = service(&server).send_email(&request).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "Failed to send email.");
    }

    #[tokio::test]
    async fn test_submit_form_is_url_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        tokio_test::assert_ok!(service(&server).submit_form(&snapshot()).await);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            String::from_utf8_lossy(&requests[0].body),
            "name=Ada+Lovelace&email=ada%40example.com&phone=5551234567"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let service =
            HttpResumeService::new("http://127.0.0.1:1", "/submit", Duration::from_secs(2))
                .unwrap();
        let err = service.submit_form(&snapshot()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_client_timeout_is_transport_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/email"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let service =
            HttpResumeService::new(&server.uri(), "/submit", Duration::from_millis(100)).unwrap();
        let request = EmailRequest {
            form_data: snapshot(),
            email_address: "hr@example.com".to_string(),
        };
        let err = service.send_email(&request).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(ref e) if e.is_timeout()));
    }
}
