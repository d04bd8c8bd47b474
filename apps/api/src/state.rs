use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::linkedin::client::LinkedinClient;
use crate::links::scraper::PageFetcher;
use crate::llm_client::LlmBackend;
use crate::posts::few_shot::FewShotPosts;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Groq in production, a stub in tests.
    pub llm: Arc<dyn LlmBackend>,
    /// Example posts loaded once at startup.
    pub few_shot: Arc<FewShotPosts>,
    pub fetcher: PageFetcher,
    pub linkedin: LinkedinClient,
    pub config: Config,
}
