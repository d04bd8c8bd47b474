//! Axum route handlers for profile analysis.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::profile::assembler::{analyze, analyze_document, ProfileRecord};

/// Multipart field carrying the uploaded PDF.
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// POST /api/v1/profile/analyze
///
/// Accepts a multipart upload with the PDF in the `file` field.
pub async fn handle_analyze_pdf(multipart: Multipart) -> Result<Json<ProfileRecord>, AppError> {
    let bytes = read_upload(multipart).await?;
    let size = bytes.len();

    let record = tokio::task::spawn_blocking(move || analyze_document(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Profile analysis task failed: {e}")))??;

    info!(
        "Analyzed {size} byte profile PDF: {} skills, {} experience, {} education",
        record.skills.len(),
        record.experience.len(),
        record.education.len()
    );
    Ok(Json(record))
}

/// POST /api/v1/profile/analyze-text
///
/// Same analysis for callers that already extracted the document text.
pub async fn handle_analyze_text(
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<ProfileRecord>, AppError> {
    Ok(Json(analyze(&request.text)))
}

/// Uploads over the body limit surface as 413; anything else is a bad request.
fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}

async fn read_upload(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() == Some(UPLOAD_FIELD) {
            return field.bytes().await.map_err(upload_error);
        }
    }
    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field with the profile PDF"
    )))
}
