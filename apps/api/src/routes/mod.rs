pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};

use crate::calendar::handlers as calendar;
use crate::insights::handlers as insights;
use crate::linkedin::handlers as linkedin;
use crate::links::handlers as links;
use crate::posts::handlers as posts;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Profile analysis
        .route(
            "/api/v1/profile/analyze",
            post(profile::handle_analyze_pdf).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/profile/analyze-text",
            post(profile::handle_analyze_text),
        )
        // Posts
        .route("/api/v1/posts/generate", post(posts::handle_generate_post))
        .route(
            "/api/v1/posts",
            get(posts::handle_list_posts).delete(posts::handle_delete_posts),
        )
        .route("/api/v1/posts/tags", get(posts::handle_list_tags))
        // Link saver
        .route("/api/v1/links/summarize", post(links::handle_summarize_link))
        // Content calendar
        .route(
            "/api/v1/calendar",
            get(calendar::handle_list_entries).post(calendar::handle_add_entry),
        )
        .route(
            "/api/v1/calendar/:id/status",
            patch(calendar::handle_update_status),
        )
        .route(
            "/api/v1/calendar/:id",
            delete(calendar::handle_delete_entry),
        )
        // Insights
        .route("/api/v1/insights/trends", post(insights::handle_trends))
        .route("/api/v1/insights/optimize", post(insights::handle_optimize))
        .route(
            "/api/v1/insights/performance",
            post(insights::handle_performance),
        )
        // LinkedIn
        .route("/api/v1/linkedin/token", post(linkedin::handle_exchange_token))
        .route("/api/v1/linkedin/profile", post(linkedin::handle_fetch_profile))
        .with_state(state)
}
