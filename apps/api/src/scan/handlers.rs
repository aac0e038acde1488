//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{analyse_resume, ResumeAnalysis};
use crate::errors::AppError;
use crate::models::resume::ScanSummaryRow;
use crate::scan::ats::MatchResult;
use crate::scan::feedback::{generate_feedback, FeedbackReport};
use crate::scan::history::{list_recent_scans, record_scan, ScanKind};
use crate::scan::skills::{extract_skills, ExtractedSkills};
use crate::scan::upload::ResumeForm;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub result: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub success: bool,
    pub message: String,
    pub skills: ExtractedSkills,
    pub feedback: FeedbackReport,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub message: String,
    pub analysis: ResumeAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub scans: Vec<ScanSummaryRow>,
}

#[derive(Serialize)]
struct SkillsRecord<'a> {
    skills: &'a ExtractedSkills,
    feedback: &'a FeedbackReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/calculate-ats
///
/// Scores the résumé's coverage of the job description's keywords.
pub async fn handle_calculate_ats(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let form = ResumeForm::from_multipart(multipart).await?;
    let job_description = form.require_job_description()?;
    let resume_text = form.resolve_resume_text(state.extractor.as_ref()).await?;

    let result = state.matcher.compute_match(job_description, &resume_text)?;
    info!(
        "ATS score {}/100 ({} matched, {} missing)",
        result.score,
        result.matched_keywords.len(),
        result.missing_keywords.len()
    );

    record_scan(
        state.db.as_ref(),
        ScanKind::Ats,
        &resume_text,
        Some(result.score),
        &result,
    )
    .await;

    Ok(Json(AtsScoreResponse {
        success: true,
        message: "ATS score calculated successfully".to_string(),
        result,
    }))
}

/// POST /api/v1/resume/extract-skills
///
/// Extracts dictionary skills per category and reports what is missing.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SkillsResponse>, AppError> {
    let form = ResumeForm::from_multipart(multipart).await?;
    let resume_text = form.resolve_resume_text(state.extractor.as_ref()).await?;

    let skills = extract_skills(&resume_text, &state.skills);
    let feedback = generate_feedback(&skills, &state.skills);
    info!(
        "Extracted {}/{} dictionary skills ({} complete categories)",
        skills.total(),
        state.skills.total_skills(),
        feedback.complete_categories()
    );

    record_scan(
        state.db.as_ref(),
        ScanKind::Skills,
        &resume_text,
        None,
        &SkillsRecord {
            skills: &skills,
            feedback: &feedback,
        },
    )
    .await;

    Ok(Json(SkillsResponse {
        success: true,
        message: "Skills fetched successfully".to_string(),
        skills,
        feedback,
    }))
}

/// POST /api/v1/resume/analyse-resume
///
/// Qualitative LLM analysis. Job description is optional.
pub async fn handle_analyse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::LlmUnavailable("Resume analysis is not configured on this server".to_string())
    })?;

    let form = ResumeForm::from_multipart(multipart).await?;
    let resume_text = form.resolve_resume_text(state.extractor.as_ref()).await?;

    let analysis = analyse_resume(llm, &resume_text, form.job_description.as_deref()).await?;

    record_scan(
        state.db.as_ref(),
        ScanKind::Analysis,
        &resume_text,
        None,
        &analysis,
    )
    .await;

    Ok(Json(AnalysisResponse {
        success: true,
        message: "Resume analysed successfully".to_string(),
        analysis,
    }))
}

/// GET /api/v1/resume/scans?limit=N
pub async fn handle_list_scans(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let pool = state.db.as_ref().ok_or(AppError::DatabaseUnavailable)?;
    let scans = list_recent_scans(pool, params.limit).await?;
    Ok(Json(HistoryResponse {
        success: true,
        scans,
    }))
}
