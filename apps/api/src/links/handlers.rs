//! Axum route handler for the link saver.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::links::summarizer::{excerpt, summarize_page, SummaryMode, DEFAULT_MAX_BULLETS};
use crate::models::post::PostRow;
use crate::posts::store::{save_post, NewPost};
use crate::state::AppState;

/// Tag, length and language recorded for saved link summaries.
pub const LINK_SUMMARY_TAG: &str = "Link Summary";
const LINK_SUMMARY_LENGTH: &str = "N/A";
const LINK_SUMMARY_LANGUAGE: &str = "English";

#[derive(Debug, Deserialize)]
pub struct SummarizeLinkRequest {
    pub url: String,
    #[serde(default)]
    pub mode: SummaryMode,
    pub max_bullets: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeLinkResponse {
    pub summary: String,
    pub post: PostRow,
}

/// POST /api/v1/links/summarize
///
/// Fetches the page, summarizes it and saves the summary as a post.
pub async fn handle_summarize_link(
    State(state): State<AppState>,
    Json(request): Json<SummarizeLinkRequest>,
) -> Result<Json<SummarizeLinkResponse>, AppError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let html = state
        .fetcher
        .fetch_html(url)
        .await
        .map_err(|e| AppError::Upstream(format!("Error summarizing URL: {e}")))?;

    let summary = match request.mode {
        SummaryMode::Excerpt => excerpt(&html),
        SummaryMode::Llm => summarize_page(
            state.llm.as_ref(),
            &html,
            request.max_bullets.unwrap_or(DEFAULT_MAX_BULLETS),
        )
        .await
        .map_err(|e| AppError::Llm(format!("Link summarization failed: {e}")))?,
    };

    if summary.trim().is_empty() {
        return Err(AppError::Upstream(format!(
            "No readable text found at {url}"
        )));
    }

    let post = save_post(
        &state.db,
        &NewPost {
            content: &summary,
            tag: LINK_SUMMARY_TAG,
            length: LINK_SUMMARY_LENGTH,
            language: LINK_SUMMARY_LANGUAGE,
            url: Some(url),
        },
    )
    .await?;

    info!("Saved {:?} summary of {url} as post {}", request.mode, post.id);
    Ok(Json(SummarizeLinkResponse { summary, post }))
}
