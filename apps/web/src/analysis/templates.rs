// Static copy used by the mock analysis generator.
// None of it depends on the uploaded file.

/// Ordered suggestion template. Mock results carry a prefix of this list.
pub const SUGGESTIONS: &[&str] = &[
    "Add more industry-specific keywords to improve ATS compatibility",
    "Include quantifiable achievements with specific metrics and numbers",
    "Optimize the summary section to better highlight your unique value proposition",
    "Ensure consistent formatting throughout all sections",
    "Add relevant technical skills that match current industry requirements",
    "Consider reordering sections to highlight your strongest qualifications first",
];

/// Analysis paragraph. Replace `{mode}` and `{job_description_clause}` before use.
pub const ANALYSIS_TEMPLATE: &str = "Your resume shows strong potential with {mode} analysis completed. \
    The document structure is well-organized and contains relevant professional information. \
    Key areas have been evaluated including keyword optimization, formatting consistency, and ATS compatibility. \
    {job_description_clause}";

pub const JOB_DESCRIPTION_MATCHED: &str =
    "Job description matching has been incorporated into the analysis for targeted recommendations.";

pub const JOB_DESCRIPTION_MISSING: &str =
    "Consider adding a job description for more targeted insights.";

pub const STRUCTURE: &[&str] = &[
    "Move the Professional Summary to the top for immediate impact",
    "Reorganize sections in order of relevance: Summary, Experience, Skills, Education",
    "Create clear visual hierarchy with consistent spacing between sections",
    "Ensure chronological order in work experience (most recent first)",
];

pub const FORMATTING: &[&str] = &[
    "Use consistent bullet point styles throughout the document",
    "Maintain uniform font sizes: 11-12pt for body text, 14-16pt for headers",
    "Apply consistent date formatting (MM/YYYY or Month YYYY)",
    "Ensure adequate white space between sections for readability",
    "Use bold formatting strategically for job titles and company names",
];

pub const CONTENT: &[&str] = &[
    "Expand work experience descriptions with specific accomplishments",
    "Include relevant certifications and professional development",
    "Add a skills section with both technical and soft skills",
    "Incorporate industry-specific terminology and buzzwords",
    "Remove outdated or irrelevant information older than 10-15 years",
];

pub const LANGUAGE: &[&str] = &[
    "Replace passive voice with active, action-oriented language",
    "Use strong action verbs: 'Led', 'Implemented', 'Achieved', 'Optimized'",
    "Eliminate first-person pronouns (I, me, my) throughout",
    "Ensure consistent verb tense (past tense for previous roles)",
    "Use professional terminology appropriate for your industry",
];

pub const SECTIONS: &[&str] = &[
    "Add a compelling Professional Summary (3-4 lines)",
    "Include a dedicated Technical Skills section if applicable",
    "Consider adding a Projects or Achievements section",
    "Ensure contact information is complete and professional",
    "Add LinkedIn profile URL and relevant social media links",
];

pub const FOUND_KEYWORDS: &[&str] = &[
    "Project Management",
    "Leadership",
    "Strategic Planning",
    "Team Building",
    "Data Analysis",
    "Process Improvement",
    "Customer Service",
    "Communication",
    "Problem Solving",
    "Microsoft Office",
    "Budget Management",
    "Training",
];

pub const MISSING_KEYWORDS: &[&str] = &[
    "Agile Methodology",
    "Stakeholder Management",
    "KPI Tracking",
    "Cross-functional",
    "Digital Transformation",
    "Change Management",
    "Performance Metrics",
    "Compliance",
    "Risk Assessment",
    "Vendor Management",
    "Quality Assurance",
    "Continuous Improvement",
];

pub const KEYWORD_DENSITY: f64 = 2.3;

pub const SECTION_MAPPING: &[(&str, &[&str])] = &[
    ("Professional Summary", &["Leadership", "Strategic Planning"]),
    (
        "Work Experience",
        &[
            "Project Management",
            "Team Building",
            "Data Analysis",
            "Process Improvement",
        ],
    ),
    ("Skills", &["Microsoft Office", "Communication", "Problem Solving"]),
    ("Education", &["Training", "Customer Service"]),
];

pub const INDUSTRY_COMPARISON: &str = "Your keyword usage is 15% below industry average. \
    Top-performing resumes in your field typically include 18-25 relevant keywords with 3-4% density.";

/// (location, current, improved, reason)
pub const SPECIFIC_CHANGES: &[(&str, &str, &str, &str)] = &[
    (
        "Professional Summary, Line 1",
        "Experienced professional with background in management",
        "Results-driven senior manager with 8+ years of proven success in leading cross-functional teams and driving operational excellence",
        "More specific, quantified, and impact-focused",
    ),
    (
        "Work Experience, Current Role, Bullet 2",
        "Managed team projects and deadlines",
        "Led 12-member cross-functional team to deliver 15+ strategic projects on time and 20% under budget",
        "Adds specific numbers and quantifiable results",
    ),
    (
        "Work Experience, Previous Role, Bullet 1",
        "Responsible for customer service improvements",
        "Implemented customer service optimization strategies that increased satisfaction scores by 35% and reduced response time by 50%",
        "Transforms responsibility into achievement with metrics",
    ),
];

/// (weak, strong, context)
pub const WORD_CHOICES: &[(&str, &str, &str)] = &[
    (
        "Responsible for",
        "Led | Managed | Directed",
        "Use action verbs instead of passive language",
    ),
    (
        "Helped with",
        "Collaborated | Facilitated | Supported",
        "Shows active participation and contribution",
    ),
    (
        "Worked on",
        "Developed | Executed | Implemented",
        "Demonstrates ownership and initiative",
    ),
    (
        "Good at",
        "Proficient in | Expert in | Specialized in",
        "More professional and specific skill description",
    ),
];

/// (original, improved, section)
pub const SENTENCE_RESTRUCTURING: &[(&str, &str, &str)] = &[
    (
        "I was involved in various projects that helped the company grow",
        "Contributed to 25% company revenue growth through strategic project leadership and cross-departmental collaboration",
        "Work Experience",
    ),
    (
        "My role included managing budgets and working with vendors",
        "Managed $2.5M annual budget while negotiating vendor contracts that reduced costs by 18%",
        "Work Experience",
    ),
];

pub const QUANTIFIABLE_ACHIEVEMENTS: &[&str] = &[
    "Add specific percentages to all improvement claims (e.g., 'increased efficiency by X%')",
    "Include dollar amounts for budget management, cost savings, or revenue impact",
    "Specify team sizes when mentioning leadership roles",
    "Add timeframes for project completion and goal achievement",
    "Include customer satisfaction scores, performance ratings, or quality metrics",
];
