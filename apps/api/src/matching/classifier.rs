//! Skill importance classification.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const DEFAULT_HIGH: &[&str] = &["react", "javascript", "typescript"];
const DEFAULT_MEDIUM: &[&str] = &["html5", "css3", "redux", "node.js"];

/// How critical a skill is to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    /// Sort rank: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Importance::High => 3,
            Importance::Medium => 2,
            Importance::Low => 1,
        }
    }

    /// Label shown next to a skill in the match breakdown.
    pub fn label(self) -> &'static str {
        match self {
            Importance::High => "Critical",
            Importance::Medium => "Important",
            Importance::Low => "Preferred",
        }
    }
}

/// Maps skill names to an importance tier with a fixed membership table.
/// Anything not listed as high or medium is low.
#[derive(Debug, Clone)]
pub struct SkillClassifier {
    high: HashSet<String>,
    medium: HashSet<String>,
}

impl Default for SkillClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH.iter().copied(), DEFAULT_MEDIUM.iter().copied())
    }
}

impl SkillClassifier {
    /// Builds a classifier from custom tables. Names are stored lower-cased;
    /// a name listed in both tables counts as high.
    pub fn new<H, M, S>(high: H, medium: M) -> Self
    where
        H: IntoIterator<Item = S>,
        M: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            high: normalize_table(high),
            medium: normalize_table(medium),
        }
    }

    /// Default table with either tier optionally replaced.
    pub fn with_overrides(high: Option<&[String]>, medium: Option<&[String]>) -> Self {
        let defaults = Self::default();
        Self {
            high: high.map(normalize_table).unwrap_or(defaults.high),
            medium: medium.map(normalize_table).unwrap_or(defaults.medium),
        }
    }

    /// Exact case-insensitive lookup. Whitespace is significant, matching
    /// how the engine compares job and resume skills.
    pub fn classify(&self, skill: &str) -> Importance {
        let skill = skill.to_lowercase();
        if self.high.contains(&skill) {
            Importance::High
        } else if self.medium.contains(&skill) {
            Importance::Medium
        } else {
            Importance::Low
        }
    }
}

fn normalize_table<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
