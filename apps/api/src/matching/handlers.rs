//! Axum route handlers for the matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{AppError, AppJson};
use crate::matching::classifier::Importance;
use crate::matching::engine::{
    analyze_job_skills, compute_match_score, partition_skills, rank_jobs, score_catalogue,
    MatchBand, SkillAssessment,
};
use crate::models::job::JobPosting;
use crate::models::resume::ResumeProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchesRequest {
    #[serde(default)]
    pub resume_data: ResumeProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysisRequest {
    pub job_id: String,
    #[serde(default)]
    pub resume_data: ResumeProfile,
}

/// A skill assessment as rendered to the client, with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillView {
    pub name: String,
    pub matched: bool,
    pub importance: Importance,
    pub label: String,
}

impl From<SkillAssessment> for SkillView {
    fn from(a: SkillAssessment) -> Self {
        SkillView {
            label: a.importance.label().to_string(),
            name: a.name,
            matched: a.matched,
            importance: a.importance,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysisResponse {
    pub job: JobPosting,
    /// Score computed against the submitted resume.
    pub match_score: f64,
    pub match_band: MatchBand,
    /// Job skills in catalogue order.
    pub skill_analysis: Vec<SkillView>,
    pub matched_skills: Vec<SkillView>,
    pub unmatched_skills: Vec<SkillView>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/job-matches
///
/// Returns the catalogue ranked for the submitted resume, best match first.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    AppJson(request): AppJson<JobMatchesRequest>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let catalogue = state.jobs.list_jobs().await?;

    let ranked = if state.config.rank_by_computed_score {
        let scored = score_catalogue(&catalogue, &request.resume_data, state.jitter.as_ref());
        rank_jobs(&scored)
    } else {
        rank_jobs(&catalogue)
    };

    info!(
        "Ranked {} jobs for resume with {} skills",
        ranked.len(),
        request.resume_data.skills.len()
    );
    Ok(Json(ranked))
}

/// POST /api/job-analysis
///
/// Per-skill breakdown of one job against the submitted resume.
pub async fn handle_job_analysis(
    State(state): State<AppState>,
    AppJson(request): AppJson<JobAnalysisRequest>,
) -> Result<Json<JobAnalysisResponse>, AppError> {
    if request.job_id.trim().is_empty() {
        return Err(AppError::Validation("jobId cannot be empty".to_string()));
    }

    let job = state
        .jobs
        .find_job(&request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let resume = &request.resume_data;
    let assessments = analyze_job_skills(&job, resume, &state.classifier);
    let breakdown = partition_skills(&assessments);
    let match_score = compute_match_score(&job, resume, state.jitter.as_ref());

    debug!(
        "Job {}: {}/{} skills matched, score {:.2}",
        job.id,
        breakdown.matched.len(),
        assessments.len(),
        match_score
    );

    Ok(Json(JobAnalysisResponse {
        job,
        match_score,
        match_band: MatchBand::from_score(match_score),
        skill_analysis: assessments.into_iter().map(SkillView::from).collect(),
        matched_skills: breakdown.matched.into_iter().map(SkillView::from).collect(),
        unmatched_skills: breakdown.unmatched.into_iter().map(SkillView::from).collect(),
    }))
}
