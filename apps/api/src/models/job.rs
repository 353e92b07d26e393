use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A job posting from the catalogue. Reference data: the matching core
/// reads it and hands out copies, it never edits one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(alias = "salary")]
    pub salary_range: String,
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    /// Required skills.
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    pub posted_date: String,
    /// 0.0 – 1.0
    pub match_score: f64,
}
