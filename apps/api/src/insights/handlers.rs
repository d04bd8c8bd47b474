//! Axum route handlers for LLM insights.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::insights::advisor::{analyze_performance, optimize_post, research_trends, PerformanceReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TrendsRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub insights: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub post: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_post: String,
}

#[derive(Debug, Deserialize)]
pub struct PerformanceRequest {
    pub posts: String,
}

/// POST /api/v1/insights/trends
pub async fn handle_trends(
    State(state): State<AppState>,
    Json(req): Json<TrendsRequest>,
) -> Result<Json<TrendsResponse>, AppError> {
    let insights = research_trends(state.llm.as_ref(), &req.query).await?;
    Ok(Json(TrendsResponse { insights }))
}

/// POST /api/v1/insights/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let optimized_post = optimize_post(state.llm.as_ref(), &req.post).await?;
    Ok(Json(OptimizeResponse { optimized_post }))
}

/// POST /api/v1/insights/performance
pub async fn handle_performance(
    State(state): State<AppState>,
    Json(req): Json<PerformanceRequest>,
) -> Result<Json<PerformanceReport>, AppError> {
    Ok(Json(analyze_performance(state.llm.as_ref(), &req.posts).await?))
}
