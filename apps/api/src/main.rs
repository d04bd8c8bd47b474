mod calendar;
mod config;
mod db;
mod errors;
mod insights;
mod linkedin;
mod links;
mod llm_client;
mod models;
mod posts;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::linkedin::client::LinkedinClient;
use crate::links::scraper::PageFetcher;
use crate::llm_client::LlmClient;
use crate::posts::few_shot::FewShotPosts;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Postwise API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite (schema is created on connect)
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone(), &config.groq_api_url)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let few_shot = FewShotPosts::load_or_empty(&config.few_shot_posts_path);

    let fetcher = PageFetcher::new()?;
    let linkedin = LinkedinClient::new()?;
    if config.linkedin.is_none() {
        info!("LinkedIn OAuth not configured; token exchange is disabled");
    }

    let state = AppState {
        db,
        llm: Arc::new(llm),
        few_shot: Arc::new(few_shot),
        fetcher,
        linkedin,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
