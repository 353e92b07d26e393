//! Client for the external NLP resume parsing service.
//!
//! The service takes the document as multipart field `resume` and answers
//! `{ "success": bool, "data": {...}, "error": "..." }`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::resume::ResumeProfile;
use crate::parsing::normalize::{normalize_nlp_resume, NlpResumeData};
use crate::parsing::{ParseError, ResumeParser, UploadedFile};

#[derive(Debug, Deserialize)]
struct NlpEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<NlpResumeData>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NlpResumeParser {
    client: Client,
    endpoint: String,
}

impl NlpResumeParser {
    /// `timeout` bounds the whole request, connect through body.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ParseError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ResumeParser for NlpResumeParser {
    async fn parse(&self, file: &UploadedFile) -> Result<ResumeProfile, ParseError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("resume", part);

        debug!("Sending {} to NLP parser at {}", file.file_name, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("NLP parser returned {status}");
            return Err(ParseError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: NlpEnvelope = response.json().await?;
        match envelope {
            NlpEnvelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(normalize_nlp_resume(data)),
            NlpEnvelope { error, .. } => Err(ParseError::Unreadable(
                error.unwrap_or_else(|| "Failed to parse resume".to_string()),
            )),
        }
    }

    fn backend(&self) -> &'static str {
        "nlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Multipart, http::StatusCode, routing::post, Json, Router};
    use axum::response::IntoResponse;
    use bytes::Bytes;
    use serde_json::{json, Value};

    use crate::errors::AppError;

    fn parser(url: String) -> NlpResumeParser {
        NlpResumeParser::new(url, Duration::from_secs(5)).unwrap()
    }

    /// Serves `router` on an ephemeral port and returns its `/upload` URL.
    async fn spawn_service(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/upload")
    }

    fn sample_file() -> UploadedFile {
        UploadedFile {
            file_name: "resume.pdf".to_string(),
            content_type: crate::parsing::PDF.to_string(),
            bytes: Bytes::from_static(b"%PDF-1.7 fake"),
        }
    }

    #[tokio::test]
    async fn test_successful_parse_is_normalized() {
        async fn upload(mut multipart: Multipart) -> Json<Value> {
            let field = multipart.next_field().await.unwrap().unwrap();
            assert_eq!(field.name(), Some("resume"));
            assert_eq!(field.file_name(), Some("resume.pdf"));
            Json(json!({
                "success": true,
                "data": {
                    "name": "Robin",
                    "emails": ["robin@example.com"],
                    "phone_numbers": ["555-0100"],
                    "skills": ["Rust", "Go"],
                    "experience": ["Backend Engineer at Globex, 2019 - Present"],
                    "education": ["BSc Mathematics, Uni, 2018"],
                    "certifications": [],
                    "projects": [],
                    "achievements": [],
                    "matched_jobs": []
                }
            }))
        }

        let url = spawn_service(Router::new().route("/upload", post(upload))).await;
        let profile = parser(url).parse(&sample_file()).await.unwrap();

        assert_eq!(profile.name, "Robin");
        assert_eq!(profile.email, "robin@example.com");
        assert_eq!(profile.phone, "555-0100");
        assert_eq!(profile.skills, vec!["Rust", "Go"]);
        assert_eq!(profile.experience[0].company, "Globex");
        assert_eq!(profile.experience[0].end_date, "Present");
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_unreadable() {
        async fn upload() -> Json<Value> {
            Json(json!({ "success": false, "error": "Unsupported file" }))
        }

        let url = spawn_service(Router::new().route("/upload", post(upload))).await;
        let err = parser(url).parse(&sample_file()).await.unwrap_err();
        assert!(matches!(err, ParseError::Unreadable(msg) if msg == "Unsupported file"));
    }

    #[tokio::test]
    async fn test_server_error_is_upstream() {
        async fn upload() -> (StatusCode, &'static str) {
            (StatusCode::INTERNAL_SERVER_ERROR, "boom")
        }

        let url = spawn_service(Router::new().route("/upload", post(upload))).await;
        let err = parser(url).parse(&sample_file()).await.unwrap_err();
        match err {
            ParseError::Upstream { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_service_times_out_as_gateway_error() {
        async fn upload() -> Json<Value> {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "success": true, "data": {} }))
        }

        let url = spawn_service(Router::new().route("/upload", post(upload))).await;
        let parser = NlpResumeParser::new(url, Duration::from_millis(200)).unwrap();

        let started = std::time::Instant::now();
        let err = parser.parse(&sample_file()).await.unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(matches!(&err, ParseError::Http(e) if e.is_timeout()));
        assert_eq!(
            AppError::from(err).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
