//! Career definitions shipped with the service.
//!
//! The first block is grouped by domain; the second block is an older,
//! broader list without domains. Titles repeat across the two blocks with
//! different skill sets and both are scored.

use crate::matching::catalog::CareerDef;

pub(crate) const BUILTIN_CAREERS: &[CareerDef] = &[
    CareerDef {
        title: "Software Engineer",
        domain: Some("Engineering"),
        skills: &[
            "programming",
            "software development",
            "algorithms",
            "problem-solving",
            "technology",
            "teamwork",
        ],
        description: "Designs, develops, and maintains software applications and systems.",
        roadmap: &[
            "Earn a degree in Computer Science or related field",
            "Learn programming languages (e.g., Python, Java, C++)",
            "Build software projects",
            "Apply for software engineering roles",
        ],
    },
    CareerDef {
        title: "Civil Engineer",
        domain: Some("Engineering"),
        skills: &[
            "structural analysis",
            "project management",
            "math",
            "design",
            "construction",
            "problem-solving",
        ],
        description:
            "Designs and oversees construction of infrastructure projects like roads, bridges, and buildings.",
        roadmap: &[
            "Earn a degree in Civil Engineering",
            "Gain internship experience",
            "Get licensed (PE)",
            "Apply for civil engineering jobs",
        ],
    },
    CareerDef {
        title: "Mechanical Engineer",
        domain: Some("Engineering"),
        skills: &[
            "mechanical design",
            "CAD",
            "math",
            "physics",
            "problem-solving",
            "manufacturing",
        ],
        description: "Designs and builds mechanical systems and devices.",
        roadmap: &[
            "Earn a degree in Mechanical Engineering",
            "Learn CAD software",
            "Work on engineering projects",
            "Apply for mechanical engineering roles",
        ],
    },
    CareerDef {
        title: "Electrical Engineer",
        domain: Some("Engineering"),
        skills: &[
            "circuit design",
            "electronics",
            "math",
            "problem-solving",
            "embedded systems",
            "communication",
        ],
        description: "Designs and develops electrical systems and components.",
        roadmap: &[
            "Earn a degree in Electrical Engineering",
            "Work on electronics projects",
            "Apply for electrical engineering jobs",
        ],
    },
    CareerDef {
        title: "Cardiologist",
        domain: Some("Medicine"),
        skills: &[
            "medicine",
            "cardiology",
            "diagnosis",
            "patient care",
            "communication",
            "research",
        ],
        description: "Diagnoses and treats heart and cardiovascular conditions.",
        roadmap: &[
            "Earn a medical degree (MD)",
            "Complete residency in internal medicine",
            "Complete fellowship in cardiology",
            "Get board certified",
            "Apply for cardiologist positions",
        ],
    },
    CareerDef {
        title: "General Surgeon",
        domain: Some("Medicine"),
        skills: &[
            "surgery",
            "anatomy",
            "patient care",
            "decision-making",
            "teamwork",
            "medical knowledge",
        ],
        description: "Performs surgical operations to treat diseases and injuries.",
        roadmap: &[
            "Earn a medical degree (MD)",
            "Complete surgical residency",
            "Get board certified",
            "Apply for surgeon positions",
        ],
    },
    CareerDef {
        title: "Nurse Practitioner",
        domain: Some("Medicine"),
        skills: &[
            "nursing",
            "patient care",
            "diagnosis",
            "communication",
            "medical knowledge",
            "teamwork",
        ],
        description: "Provides advanced nursing care and can diagnose and treat illnesses.",
        roadmap: &[
            "Earn a nursing degree (BSN)",
            "Become a registered nurse (RN)",
            "Complete nurse practitioner program (MSN or DNP)",
            "Get certified",
            "Apply for NP jobs",
        ],
    },
    CareerDef {
        title: "Data Scientist",
        domain: Some("Science"),
        skills: &[
            "statistics",
            "data analysis",
            "machine learning",
            "programming",
            "math",
            "curiosity",
        ],
        description: "Analyzes and interprets complex data to help organizations make decisions.",
        roadmap: &[
            "Earn a degree in Data Science, Statistics, or related field",
            "Learn Python/R",
            "Work on data projects",
            "Apply for data scientist roles",
        ],
    },
    CareerDef {
        title: "Research Physicist",
        domain: Some("Science"),
        skills: &[
            "physics",
            "math",
            "research",
            "problem-solving",
            "experimentation",
            "critical thinking",
        ],
        description:
            "Conducts research to understand physical phenomena and develop new technologies.",
        roadmap: &[
            "Earn a degree in Physics",
            "Complete a PhD in Physics",
            "Conduct research and publish papers",
            "Apply for research positions",
        ],
    },
    CareerDef {
        title: "Environmental Scientist",
        domain: Some("Science"),
        skills: &[
            "environmental science",
            "research",
            "analysis",
            "problem-solving",
            "communication",
        ],
        description: "Studies the environment and develops solutions to environmental problems.",
        roadmap: &[
            "Earn a degree in Environmental Science",
            "Conduct research",
            "Apply for scientist roles",
        ],
    },
    CareerDef {
        title: "Policy Analyst",
        domain: Some("Politics"),
        skills: &[
            "policy analysis",
            "research",
            "writing",
            "critical thinking",
            "communication",
            "public speaking",
        ],
        description: "Researches and analyzes policies to advise governments and organizations.",
        roadmap: &[
            "Earn a degree in Political Science, Public Policy, or related field",
            "Gain experience in policy research",
            "Apply for policy analyst roles",
        ],
    },
    CareerDef {
        title: "Diplomat",
        domain: Some("Politics"),
        skills: &[
            "diplomacy",
            "negotiation",
            "foreign languages",
            "communication",
            "international relations",
            "problem-solving",
        ],
        description: "Represents a country abroad and manages international relations.",
        roadmap: &[
            "Earn a degree in International Relations or related field",
            "Pass foreign service exam",
            "Gain experience abroad",
            "Apply for diplomat positions",
        ],
    },
    CareerDef {
        title: "Legislative Assistant",
        domain: Some("Politics"),
        skills: &[
            "research",
            "writing",
            "policy analysis",
            "communication",
            "organization",
            "public policy",
        ],
        description:
            "Assists lawmakers by researching issues, drafting legislation, and communicating with constituents.",
        roadmap: &[
            "Earn a degree in Political Science or related field",
            "Intern with a legislator",
            "Apply for legislative assistant roles",
        ],
    },
    CareerDef {
        title: "Product Manager",
        domain: Some("Business"),
        skills: &[
            "product management",
            "leadership",
            "communication",
            "strategy",
            "market research",
            "problem-solving",
        ],
        description: "Oversees the development and success of products from conception to launch.",
        roadmap: &[
            "Earn a degree in Business, Engineering, or related field",
            "Gain experience in product development",
            "Apply for product manager roles",
        ],
    },
    CareerDef {
        title: "Financial Analyst",
        domain: Some("Business"),
        skills: &["finance", "analysis", "excel", "communication", "problem-solving", "accounting"],
        description: "Analyzes financial data to help organizations make investment decisions.",
        roadmap: &[
            "Earn a degree in Finance, Accounting, or related field",
            "Learn financial modeling",
            "Apply for financial analyst jobs",
        ],
    },
    CareerDef {
        title: "Human Resources Manager",
        domain: Some("Business"),
        skills: &[
            "human resources",
            "communication",
            "organization",
            "leadership",
            "conflict resolution",
            "recruitment",
        ],
        description: "Manages hiring, training, and employee relations in organizations.",
        roadmap: &[
            "Earn a degree in Human Resources or related field",
            "Gain HR experience",
            "Apply for HR manager roles",
        ],
    },
    CareerDef {
        title: "Graphic Designer",
        domain: Some("Creative"),
        skills: &[
            "creativity",
            "design",
            "visual arts",
            "communication",
            "technology",
            "adobe suite",
        ],
        description: "Creates visual content for print and digital media.",
        roadmap: &[
            "Earn a degree in Graphic Design or related field",
            "Build a portfolio",
            "Apply for design jobs",
        ],
    },
    CareerDef {
        title: "UX/UI Designer",
        domain: Some("Creative"),
        skills: &[
            "design",
            "creativity",
            "user research",
            "technology",
            "communication",
            "prototyping",
        ],
        description: "Designs user interfaces and experiences for digital products.",
        roadmap: &["Learn UX/UI principles", "Build a design portfolio", "Apply for UX/UI jobs"],
    },
    CareerDef {
        title: "Copywriter",
        domain: Some("Creative"),
        skills: &["writing", "creativity", "marketing", "storytelling", "communication", "editing"],
        description: "Writes persuasive and engaging content for advertising and marketing.",
        roadmap: &[
            "Earn a degree in English, Marketing, or related field",
            "Build a writing portfolio",
            "Apply for copywriting jobs",
        ],
    },
    CareerDef {
        title: "Software Engineer",
        domain: None,
        skills: &["programming", "problem-solving", "logic", "technology", "math"],
        description: "Designs and builds software applications and systems.",
        roadmap: &[
            "Learn programming basics",
            "Build software projects",
            "Apply for internships/jobs",
        ],
    },
    CareerDef {
        title: "Data Scientist",
        domain: None,
        skills: &["statistics", "data analysis", "programming", "math", "curiosity"],
        description: "Analyzes and interprets complex data to help organizations make decisions.",
        roadmap: &[
            "Learn statistics and Python",
            "Practice with datasets",
            "Apply for data science roles",
        ],
    },
    CareerDef {
        title: "Graphic Designer",
        domain: None,
        skills: &["creativity", "design", "visual arts", "communication", "technology"],
        description: "Creates visual content for print and digital media.",
        roadmap: &["Learn design tools", "Build a portfolio", "Apply for design jobs"],
    },
    CareerDef {
        title: "Mechanical Engineer",
        domain: None,
        skills: &["math", "physics", "problem-solving", "design", "technology"],
        description: "Designs and builds mechanical systems and devices.",
        roadmap: &[
            "Study engineering fundamentals",
            "Work on engineering projects",
            "Apply for engineering roles",
        ],
    },
    CareerDef {
        title: "Teacher",
        domain: None,
        skills: &["communication", "patience", "organization", "subject knowledge", "empathy"],
        description: "Educates students in a variety of subjects.",
        roadmap: &[
            "Earn a teaching degree",
            "Gain classroom experience",
            "Apply for teaching positions",
        ],
    },
    CareerDef {
        title: "Marketing Specialist",
        domain: None,
        skills: &["communication", "creativity", "analytics", "strategy", "persuasion"],
        description: "Promotes products and services to target audiences.",
        roadmap: &["Learn marketing basics", "Work on campaigns", "Apply for marketing jobs"],
    },
    CareerDef {
        title: "Nurse",
        domain: None,
        skills: &["empathy", "medical knowledge", "patience", "teamwork", "attention to detail"],
        description: "Provides care and support to patients in healthcare settings.",
        roadmap: &["Earn a nursing degree", "Complete clinical training", "Apply for nursing jobs"],
    },
    CareerDef {
        title: "Accountant",
        domain: None,
        skills: &["math", "attention to detail", "organization", "finance", "analysis"],
        description: "Manages financial records and prepares reports for organizations.",
        roadmap: &[
            "Earn an accounting degree",
            "Get certified (e.g., CPA)",
            "Apply for accounting jobs",
        ],
    },
    CareerDef {
        title: "Civil Engineer",
        domain: None,
        skills: &["math", "design", "project management", "problem-solving", "teamwork"],
        description:
            "Designs and oversees construction projects like roads, bridges, and buildings.",
        roadmap: &[
            "Earn a civil engineering degree",
            "Work on construction projects",
            "Apply for engineering roles",
        ],
    },
    CareerDef {
        title: "Chef",
        domain: None,
        skills: &["creativity", "cooking", "organization", "time management", "teamwork"],
        description: "Prepares meals and manages kitchen staff in restaurants or hotels.",
        roadmap: &["Attend culinary school", "Gain kitchen experience", "Apply for chef positions"],
    },
    CareerDef {
        title: "Pharmacist",
        domain: None,
        skills: &[
            "medical knowledge",
            "attention to detail",
            "communication",
            "organization",
            "science",
        ],
        description: "Dispenses medications and advises patients on their proper use.",
        roadmap: &["Earn a pharmacy degree", "Complete internship", "Apply for pharmacist jobs"],
    },
    CareerDef {
        title: "Lawyer",
        domain: None,
        skills: &["critical thinking", "communication", "research", "argumentation", "analysis"],
        description: "Represents clients in legal matters and provides legal advice.",
        roadmap: &["Earn a law degree", "Pass the bar exam", "Apply for legal positions"],
    },
    CareerDef {
        title: "Psychologist",
        domain: None,
        skills: &["empathy", "research", "communication", "analysis", "patience"],
        description: "Studies mental processes and helps people manage mental health issues.",
        roadmap: &[
            "Earn a psychology degree",
            "Complete supervised practice",
            "Apply for psychologist roles",
        ],
    },
    CareerDef {
        title: "Sales Manager",
        domain: None,
        skills: &["communication", "persuasion", "leadership", "strategy", "negotiation"],
        description: "Leads sales teams and develops strategies to meet sales targets.",
        roadmap: &[
            "Gain sales experience",
            "Develop leadership skills",
            "Apply for sales manager roles",
        ],
    },
    CareerDef {
        title: "Web Developer",
        domain: None,
        skills: &["programming", "design", "problem-solving", "technology", "creativity"],
        description: "Builds and maintains websites and web applications.",
        roadmap: &["Learn web development", "Build web projects", "Apply for web developer jobs"],
    },
    CareerDef {
        title: "Electrician",
        domain: None,
        skills: &["technical skills", "problem-solving", "attention to detail", "safety", "math"],
        description: "Installs and maintains electrical systems in homes and businesses.",
        roadmap: &["Complete electrician training", "Get licensed", "Apply for electrician jobs"],
    },
    CareerDef {
        title: "Journalist",
        domain: None,
        skills: &["writing", "research", "communication", "curiosity", "critical thinking"],
        description: "Researches and writes news stories for media outlets.",
        roadmap: &[
            "Earn a journalism degree",
            "Build a writing portfolio",
            "Apply for journalist positions",
        ],
    },
    CareerDef {
        title: "UX/UI Designer",
        domain: None,
        skills: &["design", "creativity", "user research", "technology", "communication"],
        description: "Designs user interfaces and experiences for digital products.",
        roadmap: &["Learn UX/UI principles", "Build a design portfolio", "Apply for UX/UI jobs"],
    },
    CareerDef {
        title: "Environmental Scientist",
        domain: None,
        skills: &["science", "research", "analysis", "problem-solving", "communication"],
        description: "Studies the environment and develops solutions to environmental problems.",
        roadmap: &[
            "Earn an environmental science degree",
            "Conduct research",
            "Apply for scientist roles",
        ],
    },
    CareerDef {
        title: "Entrepreneur",
        domain: None,
        skills: &["leadership", "creativity", "risk-taking", "strategy", "problem-solving"],
        description: "Starts and manages new business ventures.",
        roadmap: &[
            "Develop a business idea",
            "Create a business plan",
            "Launch and grow your business",
        ],
    },
    CareerDef {
        title: "Project Manager",
        domain: None,
        skills: &["leadership", "organization", "communication", "planning", "problem-solving"],
        description:
            "Oversees projects and teams to ensure goals are met on time and within budget.",
        roadmap: &[
            "Earn a degree (any field)",
            "Gain project experience",
            "Get PMP certification",
            "Apply for project manager roles",
        ],
    },
    CareerDef {
        title: "Social Worker",
        domain: None,
        skills: &["empathy", "communication", "problem-solving", "advocacy", "organization"],
        description: "Helps individuals and families cope with challenges in their lives.",
        roadmap: &[
            "Earn a social work degree",
            "Complete supervised practice",
            "Apply for social worker jobs",
        ],
    },
    CareerDef {
        title: "Police Officer",
        domain: None,
        skills: &["physical fitness", "communication", "problem-solving", "teamwork", "integrity"],
        description: "Protects the public, prevents crime, and enforces laws.",
        roadmap: &[
            "Complete police academy training",
            "Pass background checks",
            "Apply for police officer positions",
        ],
    },
    CareerDef {
        title: "Flight Attendant",
        domain: None,
        skills: &[
            "communication",
            "customer service",
            "problem-solving",
            "teamwork",
            "adaptability",
        ],
        description: "Ensures passenger safety and comfort on flights.",
        roadmap: &[
            "Meet airline requirements",
            "Complete training",
            "Apply for flight attendant jobs",
        ],
    },
    CareerDef {
        title: "Fitness Trainer",
        domain: None,
        skills: &["physical fitness", "motivation", "communication", "teaching", "planning"],
        description: "Helps clients achieve fitness goals through exercise and nutrition guidance.",
        roadmap: &["Earn fitness certification", "Gain experience", "Apply for trainer positions"],
    },
    CareerDef {
        title: "Plumber",
        domain: None,
        skills: &[
            "technical skills",
            "problem-solving",
            "attention to detail",
            "manual dexterity",
            "customer service",
        ],
        description: "Installs and repairs plumbing systems in homes and businesses.",
        roadmap: &["Complete apprenticeship", "Get licensed", "Apply for plumber jobs"],
    },
    CareerDef {
        title: "Veterinarian",
        domain: None,
        skills: &[
            "medical knowledge",
            "empathy",
            "problem-solving",
            "attention to detail",
            "communication",
        ],
        description: "Provides medical care to animals.",
        roadmap: &[
            "Earn a veterinary degree",
            "Complete clinical training",
            "Apply for veterinarian jobs",
        ],
    },
];
