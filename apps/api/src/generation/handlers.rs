//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::cover_letter::{render_cover_letter, CoverLetterDocument};
use crate::generation::optimizer::optimize_resume;
use crate::generation::resume_html::{generate_resume_html, resume_file_name};
use crate::generation::summary::generate_resume_summary;
use crate::generation::templates::{ResumeTemplate, TemplateStyle};
use crate::models::cover_letter::CoverLetter;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(default)]
    pub resume: Resume,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub resume: Resume,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResumeRequest {
    #[serde(default)]
    pub resume: Resume,
    pub template_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResumeResponse {
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderCoverLetterRequest {
    pub cover_letter: CoverLetter,
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub style: &'static TemplateStyle,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateSummary>> {
    Json(
        ResumeTemplate::ALL
            .into_iter()
            .map(|template| TemplateSummary {
                id: template.id(),
                name: template.display_name(),
                style: template.style(),
            })
            .collect(),
    )
}

/// POST /api/v1/resumes/summary
pub async fn handle_generate_summary(
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = generate_resume_summary(&request.resume);
    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/v1/resumes/optimize
///
/// Appends up to three unmatched job-description keywords to the summary.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let resume = optimize_resume(
        &request.resume,
        &request.job_description,
        &state.config.lexicon,
    );
    if resume.summary != request.resume.summary {
        info!("Optimized summary with job-description keywords");
    }
    Ok(Json(OptimizeResponse { resume }))
}

/// POST /api/v1/resumes/render
///
/// Rejects unknown template ids with 400 UNKNOWN_TEMPLATE.
pub async fn handle_render_resume(
    Json(request): Json<RenderResumeRequest>,
) -> Result<Json<RenderResumeResponse>, AppError> {
    let template: ResumeTemplate = request.template_id.parse()?;
    let html = generate_resume_html(&request.resume, template)?;
    let file_name = request.resume.personal_info.as_ref().map(resume_file_name);

    info!("Rendered resume with template {template}");
    Ok(Json(RenderResumeResponse { html, file_name }))
}

/// POST /api/v1/cover-letters/render
pub async fn handle_render_cover_letter(
    Json(request): Json<RenderCoverLetterRequest>,
) -> Result<Json<CoverLetterDocument>, AppError> {
    let document = render_cover_letter(&request.cover_letter);
    info!(
        "Rendered cover letter with {} paragraphs",
        document.paragraphs.len()
    );
    Ok(Json(document))
}
