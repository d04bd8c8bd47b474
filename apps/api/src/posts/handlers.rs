//! Axum route handlers for post generation and the saved-post list.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::post::PostRow;
use crate::posts::generator::{generate_post, GeneratePostRequest};
use crate::posts::store::{delete_all_posts, list_posts, save_post, NewPost};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeneratePostResponse {
    pub post: PostRow,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

/// POST /api/v1/posts/generate
///
/// Generates a post (profile-aware when `profile` is supplied) and saves it.
pub async fn handle_generate_post(
    State(state): State<AppState>,
    Json(request): Json<GeneratePostRequest>,
) -> Result<Json<GeneratePostResponse>, AppError> {
    if request.tag.trim().is_empty() {
        return Err(AppError::Validation("tag cannot be empty".to_string()));
    }

    let content = generate_post(state.llm.as_ref(), &state.few_shot, &request).await?;

    let post = save_post(
        &state.db,
        &NewPost {
            content: &content,
            tag: request.tag.trim(),
            length: request.length.as_str(),
            language: request.language.as_str(),
            url: None,
        },
    )
    .await?;

    Ok(Json(GeneratePostResponse { post }))
}

/// GET /api/v1/posts
pub async fn handle_list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostRow>>, AppError> {
    Ok(Json(list_posts(&state.db).await?))
}

/// DELETE /api/v1/posts
pub async fn handle_delete_posts(
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = delete_all_posts(&state.db).await?;
    tracing::warn!("Deleted all {deleted} saved posts");
    Ok(Json(DeletedResponse { deleted }))
}

/// GET /api/v1/posts/tags
pub async fn handle_list_tags(State(state): State<AppState>) -> Json<TagsResponse> {
    Json(TagsResponse {
        tags: state.few_shot.tags(),
    })
}
