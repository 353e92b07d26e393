//! Resume parsing boundary.
//!
//! Turning an uploaded document into a `ResumeProfile` is delegated to a
//! `ResumeParser`. Whatever goes wrong in there surfaces as a `ParseError`
//! and stops at the handler; the matching core only sees finished profiles.

pub mod completeness;
pub mod handlers;
pub mod mock;
pub mod nlp;
pub mod normalize;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::resume::ResumeProfile;

pub use mock::MockResumeParser;
pub use nlp::NlpResumeParser;

pub const PDF: &str = "application/pdf";
pub const DOC: &str = "application/msword";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Content types accepted for upload.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[PDF, DOC, DOCX];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parser service error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("parser could not read the document: {0}")]
    Unreadable(String),
}

/// An uploaded resume document.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Converts an uploaded document into a structured resume.
///
/// Carried in `AppState` as `Arc<dyn ResumeParser>`.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(&self, file: &UploadedFile) -> Result<ResumeProfile, ParseError>;

    /// Short backend name for logs: "mock" | "nlp".
    fn backend(&self) -> &'static str;
}
