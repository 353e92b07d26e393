use crate::models::resume::ResumeProfile;

const POINTS_PER_SECTION: u32 = 25;

/// Resume completeness, 0 – 100: 25 points for each of education,
/// experience, skills and certifications that is non-empty.
pub fn completeness_score(profile: &ResumeProfile) -> u32 {
    let sections = [
        !profile.education.is_empty(),
        !profile.experience.is_empty(),
        !profile.skills.is_empty(),
        !profile.certifications.is_empty(),
    ];
    let score = sections.iter().filter(|present| **present).count() as u32 * POINTS_PER_SECTION;
    score.min(100)
}
