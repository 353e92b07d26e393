//! Axum route handler for resume upload.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeProfile;
use crate::parsing::completeness::completeness_score;
use crate::parsing::{UploadedFile, ALLOWED_CONTENT_TYPES};
use crate::state::AppState;

const FILE_FIELD: &str = "resume";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    #[serde(flatten)]
    pub resume: ResumeProfile,
    /// 0 – 100
    pub completeness_score: u32,
}

/// POST /api/parse-resume
///
/// Accepts a multipart upload with the document in field `resume`
/// (PDF, DOC or DOCX) and returns the parsed resume.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let file = read_resume_field(&mut multipart, state.config.max_upload_bytes).await?;
    validate_upload(&file, state.config.max_upload_bytes)?;

    let resume = state.parser.parse(&file).await?;
    let completeness_score = completeness_score(&resume);

    info!(
        "Parsed {} via {} parser: {} skills, completeness {}",
        file.file_name,
        state.parser.backend(),
        resume.skills.len(),
        completeness_score
    );

    Ok(Json(ParseResumeResponse {
        resume,
        completeness_score,
    }))
}

async fn read_resume_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body", max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, "Failed to read upload", max_bytes))?;

        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(format!(
        "Missing file field '{FILE_FIELD}'"
    )))
}

/// The body limit surfaces as a multipart error carrying 413.
fn multipart_error(err: MultipartError, context: &str, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(size_limit_message(max_bytes))
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}

fn size_limit_message(max_bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if max_bytes >= MIB && max_bytes % MIB == 0 {
        format!("Maximum file size is {} MB", max_bytes / MIB)
    } else {
        format!("Maximum file size is {max_bytes} bytes")
    }
}

fn validate_upload(file: &UploadedFile, max_bytes: usize) -> Result<(), AppError> {
    if !ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        return Err(AppError::Validation(
            "Please upload a PDF or Word document (.doc, .docx)".to_string(),
        ));
    }
    if file.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if file.bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(size_limit_message(max_bytes)));
    }
    Ok(())
}
