//! Match Engine — ranks the job catalogue and measures resume/job skill overlap.
//!
//! Everything here is a pure function over borrowed inputs. Randomness enters
//! only through the injected `Jitter`, and classification only through the
//! `SkillClassifier` passed in by the caller.

use serde::{Deserialize, Serialize};

use crate::matching::classifier::{Importance, SkillClassifier};
use crate::matching::jitter::Jitter;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeProfile;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One required skill of a job, checked against a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub name: String,
    pub matched: bool,
    pub importance: Importance,
}

/// Assessments split into matched and missing groups, each ordered
/// high → low importance with catalogue order kept among equals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub matched: Vec<SkillAssessment>,
    pub unmatched: Vec<SkillAssessment>,
}

/// Coarse display bucket for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchBand {
    /// ≥ 90%
    Strong,
    /// 70 – 89%
    Good,
    Fair,
}

impl MatchBand {
    pub fn from_score(score: f64) -> Self {
        let percent = (score * 100.0).round();
        if percent >= 90.0 {
            MatchBand::Strong
        } else if percent >= 70.0 {
            MatchBand::Good
        } else {
            MatchBand::Fair
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Orders the catalogue by `match_score`, highest first. The sort is stable,
/// so equal scores keep catalogue order. NaN scores sink to the bottom.
pub fn rank_jobs(catalogue: &[JobPosting]) -> Vec<JobPosting> {
    let mut ranked = catalogue.to_vec();
    ranked.sort_by(|a, b| sort_key(b.match_score).total_cmp(&sort_key(a.match_score)));
    ranked
}

fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

/// Copies of the catalogue with `match_score` recomputed against `resume`.
pub fn score_catalogue(
    catalogue: &[JobPosting],
    resume: &ResumeProfile,
    jitter: &dyn Jitter,
) -> Vec<JobPosting> {
    catalogue
        .iter()
        .map(|job| JobPosting {
            match_score: compute_match_score(job, resume, jitter),
            ..job.clone()
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Fraction of the job's required skills present in the resume, plus one
/// jitter sample, clamped to `[0, 1]`.
///
/// Matching is exact equality after lower-casing: no substrings, no fuzzy
/// matching. Duplicate job skills count once per occurrence. A job with no
/// required skills scores 0 before jitter.
pub fn compute_match_score(job: &JobPosting, resume: &ResumeProfile, jitter: &dyn Jitter) -> f64 {
    let raw = overlap_ratio(job, resume);
    (raw + jitter.sample()).clamp(0.0, 1.0)
}

fn overlap_ratio(job: &JobPosting, resume: &ResumeProfile) -> f64 {
    if job.skills.is_empty() {
        return 0.0;
    }
    let resume_skills = resume.normalized_skills();
    let matched = job
        .skills
        .iter()
        .filter(|skill| resume_skills.contains(&skill.to_lowercase()))
        .count();
    matched as f64 / job.skills.len() as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Skill analysis
// ────────────────────────────────────────────────────────────────────────────

/// One assessment per required skill of `job`, in the job's order.
pub fn analyze_job_skills(
    job: &JobPosting,
    resume: &ResumeProfile,
    classifier: &SkillClassifier,
) -> Vec<SkillAssessment> {
    let resume_skills = resume.normalized_skills();
    job.skills
        .iter()
        .map(|skill| SkillAssessment {
            name: skill.clone(),
            matched: resume_skills.contains(&skill.to_lowercase()),
            importance: classifier.classify(skill),
        })
        .collect()
}

/// Splits assessments into matched / unmatched, each sorted by importance.
pub fn partition_skills(assessments: &[SkillAssessment]) -> SkillBreakdown {
    let (mut matched, mut unmatched): (Vec<_>, Vec<_>) =
        assessments.iter().cloned().partition(|a| a.matched);

    // sort_by_key is stable
    matched.sort_by_key(|a| std::cmp::Reverse(a.importance.rank()));
    unmatched.sort_by_key(|a| std::cmp::Reverse(a.importance.rank()));

    SkillBreakdown { matched, unmatched }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
