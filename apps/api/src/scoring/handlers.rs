//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::scoring::ats::AtsScoreResult;
use crate::scoring::keywords::extract_keywords;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreRequest {
    #[serde(default)]
    pub resume: Resume,
    #[serde(default)]
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords
///
/// Extracts candidate keywords from a job description. Empty text yields an empty list.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let keywords = extract_keywords(
        &request.job_description.to_lowercase(),
        &state.config.lexicon,
    );
    info!("Extracted {} keywords", keywords.len());
    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/v1/resumes/ats-score
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(request): Json<AtsScoreRequest>,
) -> Result<Json<AtsScoreResult>, AppError> {
    let result = state
        .scorer
        .score(&request.resume, request.job_description.as_deref());
    info!(
        "ATS score {}/100 (format {}, content {}, keywords {})",
        result.overall_score, result.format_score, result.content_score, result.keyword_match
    );
    Ok(Json(result))
}
