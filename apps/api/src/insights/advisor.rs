use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::insights::prompts::{OPTIMIZE_PROMPT_TEMPLATE, PERFORMANCE_PROMPT_TEMPLATE, TRENDS_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, ChatRequest, LlmBackend};

const INSIGHT_MAX_TOKENS: u32 = 500;
const CREATIVE_TEMPERATURE: f32 = 0.7;
const ANALYTIC_TEMPERATURE: f32 = 0.5;
const MAX_SCORE: f32 = 10.0;

/// LLM-scored review of one or more posts. Scores are on a 0–10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub engagement_score: f32,
    pub clarity_score: f32,
    pub emotional_appeal_score: f32,
    pub tone_feedback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl PerformanceReport {
    fn clamped(mut self) -> Self {
        self.engagement_score = self.engagement_score.clamp(0.0, MAX_SCORE);
        self.clarity_score = self.clarity_score.clamp(0.0, MAX_SCORE);
        self.emotional_appeal_score = self.emotional_appeal_score.clamp(0.0, MAX_SCORE);
        self
    }
}

fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}

/// Industry research answer for a free-form query.
pub async fn research_trends(llm: &dyn LlmBackend, query: &str) -> Result<String, AppError> {
    let query = require_text(query, "query")?;
    let request = ChatRequest::new(query)
        .system(TRENDS_SYSTEM)
        .temperature(CREATIVE_TEMPERATURE)
        .max_tokens(INSIGHT_MAX_TOKENS);
    let answer = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Error fetching trends: {e}")))?;
    Ok(answer.trim().to_string())
}

/// Rewrites a post for engagement while keeping its message.
pub async fn optimize_post(llm: &dyn LlmBackend, post: &str) -> Result<String, AppError> {
    let post = require_text(post, "post")?;
    let request = ChatRequest::new(OPTIMIZE_PROMPT_TEMPLATE.replace("{post}", post))
        .temperature(CREATIVE_TEMPERATURE)
        .max_tokens(INSIGHT_MAX_TOKENS);
    let optimized = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Post optimization failed: {e}")))?;
    Ok(optimized.trim().to_string())
}

pub async fn analyze_performance(
    llm: &dyn LlmBackend,
    posts: &str,
) -> Result<PerformanceReport, AppError> {
    let posts = require_text(posts, "posts")?;
    let request = ChatRequest::new(PERFORMANCE_PROMPT_TEMPLATE.replace("{posts}", posts))
        .system(JSON_ONLY_SYSTEM)
        .temperature(ANALYTIC_TEMPERATURE)
        .max_tokens(INSIGHT_MAX_TOKENS);
    let report: PerformanceReport = complete_json(llm, &request)
        .await
        .map_err(|e| AppError::Llm(format!("Performance analysis failed: {e}")))?;
    let report = report.clamped();
    info!(
        "Performance report: engagement={} clarity={} emotional={}",
        report.engagement_score, report.clarity_score, report.emotional_appeal_score
    );
    Ok(report)
}
