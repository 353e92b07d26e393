use async_trait::async_trait;
use tracing::debug;

use crate::models::resume::{EduEntry, ResumeProfile, WorkEntry};
use crate::parsing::{ParseError, ResumeParser, UploadedFile};

/// Returns the same sample resume for every upload. Used when no
/// `NLP_PARSER_URL` is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResumeParser;

#[async_trait]
impl ResumeParser for MockResumeParser {
    async fn parse(&self, file: &UploadedFile) -> Result<ResumeProfile, ParseError> {
        debug!(
            "Mock parser ignoring {} ({} bytes)",
            file.file_name,
            file.bytes.len()
        );
        Ok(sample_resume())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

fn sample_resume() -> ResumeProfile {
    let summary = "Experienced software engineer with 5+ years of experience in frontend development, specializing in React, TypeScript, and responsive web design. Passionate about creating intuitive user experiences and optimizing application performance.";

    let experience = vec![
        work(
            "Senior Frontend Developer",
            "TechCorp Inc.",
            "San Francisco, CA",
            ("Jan 2021", "Present"),
            "Lead frontend development for e-commerce platform serving 500k+ monthly users. Implemented performance optimizations resulting in 40% improvement in load times. Mentored junior developers and established frontend best practices.",
        ),
        work(
            "Frontend Developer",
            "WebSolutions LLC",
            "Oakland, CA",
            ("Mar 2018", "Dec 2020"),
            "Developed responsive web applications for clients across various industries. Worked with a team of designers and backend developers to deliver full-stack solutions. Specialized in React and state management solutions.",
        ),
        work(
            "Junior Web Developer",
            "Creative Digital Agency",
            "Berkeley, CA",
            ("Jun 2016", "Feb 2018"),
            "Built and maintained websites for small businesses and startups. Responsible for implementing designs, integrating content management systems, and ensuring cross-browser compatibility.",
        ),
    ];

    let education = vec![
        EduEntry {
            degree: "B.S. Computer Science".to_string(),
            institution: "University of California, Berkeley".to_string(),
            location: "Berkeley, CA".to_string(),
            graduation_date: "May 2016".to_string(),
        },
        EduEntry {
            degree: "Frontend Web Development Certification".to_string(),
            institution: "Coding Bootcamp".to_string(),
            location: "San Francisco, CA".to_string(),
            graduation_date: "August 2015".to_string(),
        },
    ];

    let skills = [
        "JavaScript",
        "TypeScript",
        "React",
        "HTML5",
        "CSS3",
        "Tailwind CSS",
        "Redux",
        "Node.js",
        "GraphQL",
        "Responsive Design",
        "UI/UX",
        "Figma",
        "Jest",
        "Cypress",
        "Git",
        "CI/CD",
        "Agile",
    ];

    let parsed_text = render_text("Alex Johnson", summary, &experience, &education);

    ResumeProfile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        summary: summary.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience,
        education,
        parsed_text,
        emails: vec!["alex.johnson@example.com".to_string()],
        phone_numbers: vec!["(555) 123-4567".to_string()],
        ..Default::default()
    }
}

fn work(
    title: &str,
    company: &str,
    location: &str,
    (start, end): (&str, &str),
    description: &str,
) -> WorkEntry {
    WorkEntry {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        description: description.to_string(),
    }
}

fn render_text(name: &str, summary: &str, experience: &[WorkEntry], education: &[EduEntry]) -> String {
    let mut text = format!("{name}\n\nSummary\n{summary}\n\nExperience\n");
    for w in experience {
        text.push_str(&format!(
            "{} - {}, {} ({} - {})\n{}\n\n",
            w.title, w.company, w.location, w.start_date, w.end_date, w.description
        ));
    }
    text.push_str("Education\n");
    for e in education {
        text.push_str(&format!(
            "{} - {}, {} ({})\n",
            e.degree, e.institution, e.location, e.graduation_date
        ));
    }
    text.trim_end().to_string()
}
