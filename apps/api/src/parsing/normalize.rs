//! Normalization of the NLP service's flat resume format into `ResumeProfile`.
//!
//! The service returns experience and education as free-text lines and
//! contact details as lists. Structure is recovered here with a handful of
//! patterns; anything not found falls back to a placeholder.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;
use crate::models::resume::{EduEntry, ResumeProfile, WorkEntry};

const MONTH: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*([^,|\d]+?)\s*(?:\bat\b|\bfor\b|[,|\d(]|$)").expect("valid title regex")
});

static COMPANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:at|for)\s+([^,|.(]+)").expect("valid company regex"));

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let endpoint = format!(r"(?:{}\s+\d{{4}}|\d{{4}})", MONTH);
    Regex::new(&format!(
        r"(?i)\b({endpoint})\s*(?:-|–|to)\s*({endpoint}|present)\b"
    ))
    .expect("valid date range regex")
});

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor|master|phd|b\.s\.|m\.s\.|m\.a\.|b\.a\.|b\.tech|m\.tech|bsc|msc|mba|doctorate|associate)[^,]*",
    )
    .expect("valid degree regex")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("valid year regex"));

/// Resume payload as produced by the NLP parsing service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpResumeData {
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emails: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

pub fn normalize_nlp_resume(data: NlpResumeData) -> ResumeProfile {
    let experience = data.experience.iter().map(|line| parse_work_line(line)).collect();
    let education = data.education.iter().map(|line| parse_edu_line(line)).collect();

    let parsed_text = format!("{}\n{}", data.experience.join("\n"), data.education.join("\n"));

    ResumeProfile {
        name: data.name,
        email: data.emails.first().cloned().unwrap_or_default(),
        phone: data.phone_numbers.first().cloned().unwrap_or_default(),
        location: "Location not extracted".to_string(),
        summary: "Summary not available".to_string(),
        skills: data.skills,
        experience,
        education,
        certifications: data.certifications,
        projects: data.projects,
        achievements: data.achievements,
        parsed_text,
        emails: data.emails,
        phone_numbers: data.phone_numbers,
    }
}

pub fn parse_work_line(line: &str) -> WorkEntry {
    let title = TITLE_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Position".to_string());

    let company = COMPANY_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "Company".to_string());

    let (start_date, end_date) = match DATE_RANGE_RE.captures(line) {
        Some(caps) => {
            let end = &caps[2];
            let end = if end.eq_ignore_ascii_case("present") {
                "Present".to_string()
            } else {
                end.to_string()
            };
            (caps[1].to_string(), end)
        }
        None => (
            "Date not specified".to_string(),
            "Date not specified".to_string(),
        ),
    };

    WorkEntry {
        title,
        company,
        location: "Location not specified".to_string(),
        start_date,
        end_date,
        description: line.to_string(),
    }
}

pub fn parse_edu_line(line: &str) -> EduEntry {
    let degree = DEGREE_RE.find(line).map(|m| m.as_str().trim().to_string());

    let remainder = match &degree {
        Some(d) => line.replacen(d.as_str(), "", 1),
        None => line.to_string(),
    };
    let institution = remainder
        .split(',')
        .map(str::trim)
        .find(|part| !part.is_empty())
        .map(|part| part.trim_matches(|c: char| c == '-' || c.is_whitespace()).to_string())
        .unwrap_or_default();

    let graduation_date = YEAR_RE
        .find_iter(line)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Date not specified".to_string());

    EduEntry {
        degree: degree.unwrap_or_else(|| "Degree not specified".to_string()),
        institution,
        location: "Location not specified".to_string(),
        graduation_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_line_with_month_range() {
        let entry = parse_work_line("Software Engineer at Acme Corp, Jan 2019 - Mar 2021");
        assert_eq!(entry.title, "Software Engineer");
        assert_eq!(entry.company, "Acme Corp");
        assert_eq!(entry.start_date, "Jan 2019");
        assert_eq!(entry.end_date, "Mar 2021");
    }

    #[test]
    fn test_work_line_with_present() {
        let entry = parse_work_line("Data Engineer at Initech | 2020 to present");
        assert_eq!(entry.title, "Data Engineer");
        assert_eq!(entry.company, "Initech");
        assert_eq!(entry.start_date, "2020");
        assert_eq!(entry.end_date, "Present");
    }

    #[test]
    fn test_work_line_without_structure_uses_placeholders() {
        let entry = parse_work_line("2019");
        assert_eq!(entry.title, "Position");
        assert_eq!(entry.company, "Company");
        assert_eq!(entry.start_date, "Date not specified");
        assert_eq!(entry.description, "2019");
    }

    #[test]
    fn test_edu_line() {
        let entry = parse_edu_line("B.S. Computer Science, Stanford University, 2014 - 2018");
        assert_eq!(entry.degree, "B.S. Computer Science");
        assert_eq!(entry.institution, "Stanford University");
        assert_eq!(entry.graduation_date, "2018");
    }

    #[test]
    fn test_edu_line_without_degree() {
        let entry = parse_edu_line("Coding Bootcamp");
        assert_eq!(entry.degree, "Degree not specified");
        assert_eq!(entry.institution, "Coding Bootcamp");
        assert_eq!(entry.graduation_date, "Date not specified");
    }

    #[test]
    fn test_normalize_picks_first_contact_details() {
        let data = NlpResumeData {
            name: "Jo".to_string(),
            emails: vec!["jo@a.io".to_string(), "jo@b.io".to_string()],
            phone_numbers: vec![],
            skills: vec!["Rust".to_string()],
            experience: vec!["Engineer at Foo, 2020 - 2022".to_string()],
            education: vec!["MSc Physics, ETH, 2019".to_string()],
            ..Default::default()
        };
        let profile = normalize_nlp_resume(data);
        assert_eq!(profile.email, "jo@a.io");
        assert_eq!(profile.phone, "");
        assert_eq!(profile.emails.len(), 2);
        assert_eq!(profile.skills, vec!["Rust"]);
        assert_eq!(profile.experience[0].company, "Foo");
        assert_eq!(profile.education[0].degree, "MSc Physics");
        assert_eq!(
            profile.parsed_text,
            "Engineer at Foo, 2020 - 2022\nMSc Physics, ETH, 2019"
        );
    }

    #[test]
    fn test_nlp_payload_tolerates_nulls() {
        let data: NlpResumeData = serde_json::from_value(serde_json::json!({
            "name": "Jo",
            "skills": null,
            "matched_jobs": []
        }))
        .unwrap();
        assert!(data.skills.is_empty());
        assert!(normalize_nlp_resume(data).skills.is_empty());
    }
}
