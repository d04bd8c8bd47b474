//! Axum route handlers for the LinkedIn integration.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::linkedin::client::LinkedinError;
use crate::linkedin::profile::{analyze_profile, LinkedinProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub access_token: String,
}

fn upstream(e: LinkedinError) -> AppError {
    AppError::Upstream(e.to_string())
}

/// POST /api/v1/linkedin/token
pub async fn handle_exchange_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let app = state.config.linkedin.as_ref().ok_or_else(|| {
        AppError::Validation("LinkedIn OAuth is not configured".to_string())
    })?;
    let code = req.code.trim();
    if code.is_empty() {
        return Err(AppError::Validation("code cannot be empty".to_string()));
    }

    let access_token = state
        .linkedin
        .exchange_code(app, code)
        .await
        .map_err(upstream)?;
    Ok(Json(TokenResponse { access_token }))
}

/// POST /api/v1/linkedin/profile
pub async fn handle_fetch_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<LinkedinProfile>, AppError> {
    let token = req.access_token.trim();
    if token.is_empty() {
        return Err(AppError::Validation(
            "access_token cannot be empty".to_string(),
        ));
    }

    let bundle = state.linkedin.fetch_profile(token).await.map_err(upstream)?;
    Ok(Json(analyze_profile(bundle)))
}
