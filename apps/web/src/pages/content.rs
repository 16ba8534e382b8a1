// Fixed marketing copy for the Home and About views.

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct AnalysisTier {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "AI-Powered Analysis",
        description: "Advanced algorithms analyze your resume against industry standards and ATS requirements.",
    },
    Feature {
        title: "Job-Specific Optimization",
        description: "Tailor your resume for specific job descriptions to maximize your chances of success.",
    },
    Feature {
        title: "Actionable Insights",
        description: "Get detailed recommendations to improve your resume score and stand out to recruiters.",
    },
];

pub const HOW_IT_WORKS: &[Step] = &[
    Step {
        step: 1,
        title: "Upload Your Resume",
        description: "Upload your PDF resume and optionally add a job description for targeted analysis.",
    },
    Step {
        step: 2,
        title: "AI Analysis",
        description: "Our AI analyzes your resume for ATS compatibility, keywords, and formatting.",
    },
    Step {
        step: 3,
        title: "Get Results",
        description: "Receive a detailed score, analysis, and actionable suggestions for improvement.",
    },
];

pub const ABOUT_FEATURES: &[Feature] = &[
    Feature {
        title: "Advanced AI Technology",
        description: "Our proprietary AI algorithms analyze thousands of data points to provide accurate, actionable feedback on your resume.",
    },
    Feature {
        title: "ATS Compatibility",
        description: "Ensure your resume passes through Applicant Tracking Systems used by 99% of Fortune 500 companies.",
    },
    Feature {
        title: "Instant Results",
        description: "Get comprehensive analysis and recommendations in seconds, not days. No waiting, no delays.",
    },
    Feature {
        title: "Job-Specific Optimization",
        description: "Tailor your resume for specific positions by analyzing job descriptions and matching requirements.",
    },
];

pub const ANALYSIS_TIERS: &[AnalysisTier] = &[
    AnalysisTier {
        name: "Quick Analysis",
        description: "Fast assessment of basic resume elements including formatting, keywords, and structure.",
        features: &[
            "ATS compatibility check",
            "Basic keyword analysis",
            "Formatting review",
            "Overall score",
        ],
    },
    AnalysisTier {
        name: "Detailed Analysis",
        description: "Comprehensive review covering all aspects of your resume with in-depth recommendations.",
        features: &[
            "Complete content analysis",
            "Advanced keyword optimization",
            "Section-by-section feedback",
            "Industry-specific insights",
            "Detailed improvement suggestions",
        ],
    },
    AnalysisTier {
        name: "Optimize Mode",
        description: "Advanced analysis with personalized optimization strategies for maximum impact.",
        features: &[
            "Job description matching",
            "Competitive analysis",
            "Industry benchmarking",
            "Custom optimization strategies",
            "Priority-ranked recommendations",
            "Performance predictions",
        ],
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        number: "95%",
        label: "Success Rate",
    },
    Stat {
        number: "3.2x",
        label: "More Interviews",
    },
    Stat {
        number: "24/7",
        label: "Availability",
    },
];

/// (heading, description)
pub const HOW_OUR_AI_WORKS: &[(&str, &str)] = &[
    (
        "Content Analysis",
        "Analyzes your resume content for relevance, impact, and optimization opportunities.",
    ),
    (
        "ATS Simulation",
        "Tests your resume against real ATS algorithms used by major companies.",
    ),
    (
        "Industry Benchmarking",
        "Compares your resume against successful profiles in your industry.",
    ),
    (
        "Optimization Engine",
        "Provides personalized recommendations for maximum impact.",
    ),
];

pub const KEY_BENEFITS: &[&str] = &[
    "95% accuracy in ATS prediction",
    "Instant analysis and feedback",
    "Industry-specific recommendations",
    "Continuous learning and improvement",
];

/// Cards shown under the upload form.
pub const UPLOAD_INFO_CARDS: &[Feature] = &[
    Feature {
        title: "Secure & Private",
        description: "Your resume is processed securely and never stored on our servers. Your privacy is our priority.",
    },
    Feature {
        title: "Instant Results",
        description: "Get comprehensive analysis and actionable recommendations in seconds, not days.",
    },
];
