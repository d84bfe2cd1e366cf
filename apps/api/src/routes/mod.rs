pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers as generation;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(generation::handle_list_templates))
        // Scoring API
        .route("/api/v1/keywords", post(scoring::handle_extract_keywords))
        .route("/api/v1/resumes/ats-score", post(scoring::handle_ats_score))
        // Generation API
        .route(
            "/api/v1/resumes/summary",
            post(generation::handle_generate_summary),
        )
        .route("/api/v1/resumes/optimize", post(generation::handle_optimize))
        .route(
            "/api/v1/resumes/render",
            post(generation::handle_render_resume),
        )
        .route(
            "/api/v1/cover-letters/render",
            post(generation::handle_render_cover_letter),
        )
        .fallback(not_found)
        .with_state(state)
}
