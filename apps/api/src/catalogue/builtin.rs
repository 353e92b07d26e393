use crate::models::job::JobPosting;

struct Seed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary_range: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
    posted_date: &'static str,
    match_score: f64,
    skills: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "job-1",
        title: "Senior React Developer",
        company: "TechGiant Inc.",
        location: "San Francisco, CA",
        salary_range: "$130,000 - $160,000",
        description: "We are looking for an experienced React developer to join our frontend team. You'll be responsible for building and maintaining high-performance web applications, collaborating with designers and backend engineers, and contributing to our component library.",
        requirements: &[
            "5+ years of experience with React",
            "Strong TypeScript skills",
            "Experience with state management (Redux, MobX, or similar)",
            "Familiarity with modern CI/CD practices",
            "Understanding of server-side rendering",
        ],
        posted_date: "2 days ago",
        match_score: 0.95,
        skills: &[
            "React",
            "TypeScript",
            "JavaScript",
            "Redux",
            "HTML5",
            "CSS3",
            "Node.js",
            "GraphQL",
            "Responsive Design",
        ],
    },
    Seed {
        id: "job-2",
        title: "Full Stack JavaScript Engineer",
        company: "GrowthStartup",
        location: "Remote",
        salary_range: "$120,000 - $150,000",
        description: "Join our fast-growing team to build innovative solutions for our SaaS platform. You'll work across the entire stack, from frontend React applications to backend Node.js services and everything in between.",
        requirements: &[
            "4+ years of full stack development experience",
            "Strong JavaScript/TypeScript knowledge",
            "Experience with React and Node.js",
            "Familiarity with SQL and NoSQL databases",
            "Bonus: Experience with AWS or other cloud providers",
        ],
        posted_date: "1 week ago",
        match_score: 0.87,
        skills: &[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Express",
            "MongoDB",
            "AWS",
            "Git",
            "REST APIs",
        ],
    },
    Seed {
        id: "job-3",
        title: "Frontend UI/UX Developer",
        company: "DesignMasters Co.",
        location: "New York, NY",
        salary_range: "$110,000 - $135,000",
        description: "Looking for a frontend developer with a strong eye for design to create beautiful, intuitive interfaces. You'll work closely with our design team to bring wireframes and mockups to life while ensuring optimal performance and accessibility.",
        requirements: &[
            "3+ years of frontend development",
            "Strong HTML, CSS, and JavaScript skills",
            "Experience with modern CSS frameworks",
            "Eye for detail and passion for UI/UX",
            "Experience with animation and interactive elements",
        ],
        posted_date: "3 days ago",
        match_score: 0.82,
        skills: &[
            "HTML5",
            "CSS3",
            "JavaScript",
            "UI/UX",
            "Responsive Design",
            "Tailwind CSS",
            "Figma",
            "Accessibility",
        ],
    },
    Seed {
        id: "job-4",
        title: "React Native Developer",
        company: "MobileApps Inc.",
        location: "Austin, TX",
        salary_range: "$125,000 - $145,000",
        description: "Join our mobile app development team to build cross-platform applications using React Native. You'll be responsible for developing new features, improving existing functionality, and ensuring a seamless user experience across iOS and Android platforms.",
        requirements: &[
            "3+ years of experience with React Native",
            "Proficiency in JavaScript/TypeScript",
            "Experience with state management in mobile apps",
            "Understanding of native modules and their integration",
            "Familiarity with app store deployment processes",
        ],
        posted_date: "1 week ago",
        match_score: 0.75,
        skills: &[
            "React Native",
            "JavaScript",
            "TypeScript",
            "Redux",
            "iOS",
            "Android",
            "API Integration",
            "Mobile UI/UX",
        ],
    },
    Seed {
        id: "job-5",
        title: "Frontend Performance Engineer",
        company: "SpeedyWeb Solutions",
        location: "Chicago, IL",
        salary_range: "$140,000 - $165,000",
        description: "We're looking for a performance-focused frontend developer to help optimize our web applications. You'll analyze performance metrics, implement optimizations, and ensure our applications load quickly and run smoothly for all users.",
        requirements: &[
            "5+ years of frontend development experience",
            "Deep understanding of web performance optimization",
            "Experience with JavaScript performance profiling",
            "Knowledge of code splitting, lazy loading, and caching strategies",
            "Familiarity with Core Web Vitals and performance metrics",
        ],
        posted_date: "2 weeks ago",
        match_score: 0.73,
        skills: &[
            "JavaScript",
            "Performance Optimization",
            "Webpack",
            "Web Vitals",
            "Lighthouse",
            "React",
            "Browser DevTools",
            "CDN",
        ],
    },
    Seed {
        id: "job-6",
        title: "JavaScript Testing Specialist",
        company: "QualityCode Ltd.",
        location: "Boston, MA",
        salary_range: "$115,000 - $140,000",
        description: "Join our quality engineering team to build and maintain our testing infrastructure. You'll develop automated tests, improve testing processes, and ensure code quality across our JavaScript applications.",
        requirements: &[
            "4+ years of JavaScript development",
            "Strong experience with testing frameworks",
            "Knowledge of test-driven development practices",
            "Experience with CI/CD integration for tests",
            "Familiarity with mocking and stubbing techniques",
        ],
        posted_date: "3 weeks ago",
        match_score: 0.68,
        skills: &[
            "JavaScript",
            "Jest",
            "Cypress",
            "Testing",
            "TDD",
            "CI/CD",
            "React",
            "QA Automation",
        ],
    },
];

pub(super) fn jobs() -> Vec<JobPosting> {
    SEEDS.iter().map(to_posting).collect()
}

fn to_posting(seed: &Seed) -> JobPosting {
    JobPosting {
        id: seed.id.to_string(),
        title: seed.title.to_string(),
        company: seed.company.to_string(),
        location: seed.location.to_string(),
        salary_range: seed.salary_range.to_string(),
        description: seed.description.to_string(),
        requirements: seed.requirements.iter().map(|s| s.to_string()).collect(),
        skills: seed.skills.iter().map(|s| s.to_string()).collect(),
        posted_date: seed.posted_date.to_string(),
        match_score: seed.match_score,
    }
}
