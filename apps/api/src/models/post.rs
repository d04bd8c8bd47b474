use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A saved post: LLM-generated content or a link summary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostRow {
    pub id: i64,
    pub content: String,
    pub tag: Option<String>,
    pub length: Option<String>,
    pub language: Option<String>,
    pub url: Option<String>,
    pub created_at: NaiveDateTime,
}
