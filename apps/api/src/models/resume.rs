use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A single position from the experience section of a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EduEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
}

/// Structured resume produced by a `ResumeParser`.
///
/// Every list field tolerates being absent or `null` on the wire and comes
/// back as an empty sequence, so the matching core only ever sees
/// well-formed data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<WorkEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EduEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    pub parsed_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emails: Vec<String>,
    #[serde(alias = "phone_numbers", deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<String>,
}

impl ResumeProfile {
    /// Lower-cased skill names, the form every comparison in the core uses.
    pub fn normalized_skills(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_lists_deserialize_empty() {
        let profile: ResumeProfile = serde_json::from_value(json!({ "name": "Sam" })).unwrap();
        assert_eq!(profile.name, "Sam");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_null_skills_deserialize_empty() {
        let profile: ResumeProfile =
            serde_json::from_value(json!({ "skills": null, "experience": null })).unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_snake_case_phone_numbers_accepted() {
        let profile: ResumeProfile =
            serde_json::from_value(json!({ "phone_numbers": ["(555) 000-1111"] })).unwrap();
        assert_eq!(profile.phone_numbers, vec!["(555) 000-1111"]);
    }

    #[test]
    fn test_work_entry_uses_camel_case() {
        let entry = WorkEntry {
            start_date: "Jan 2021".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["startDate"], "Jan 2021");
    }

    #[test]
    fn test_normalized_skills_preserve_order_and_duplicates() {
        let profile = ResumeProfile {
            skills: vec!["React".into(), "GraphQL".into(), "react".into()],
            ..Default::default()
        };
        assert_eq!(profile.normalized_skills(), vec!["react", "graphql", "react"]);
    }
}
