//! Career catalog and keyword bonus table.
//!
//! Both tables are fixed reference data. The scorer folds every `BonusRule`
//! over every `CareerArchetype`; nothing here is mutated at runtime.

use crate::models::career::CareerRecommendation;

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// One of the fixed careers the heuristic scorer can recommend.
#[derive(Debug, Clone, Copy)]
pub struct CareerArchetype {
    pub title: &'static str,
    pub description: &'static str,
    /// Starting score before any keyword bonus is applied.
    pub base_match: u8,
    pub required_skills: &'static [&'static str],
    pub average_salary: &'static str,
}

impl CareerArchetype {
    pub fn to_recommendation(&self, match_percentage: u8) -> CareerRecommendation {
        CareerRecommendation {
            title: self.title.to_string(),
            description: self.description.to_string(),
            match_percentage,
            required_skills: self.required_skills.iter().map(|s| s.to_string()).collect(),
            average_salary: self.average_salary.to_string(),
        }
    }
}

/// Declaration order matters: it is the tie-break order after sorting.
pub static CATALOG: [CareerArchetype; 6] = [
    CareerArchetype {
        title: "Software Developer",
        description: "Design and develop software applications, websites, and systems using various programming languages and frameworks.",
        base_match: 95,
        required_skills: &["JavaScript", "Python", "React", "Problem Solving", "Git"],
        average_salary: "$85,000 - $130,000",
    },
    CareerArchetype {
        title: "Data Scientist",
        description: "Analyze complex data to help organizations make informed business decisions using statistical methods and machine learning.",
        base_match: 90,
        required_skills: &["Python", "SQL", "Machine Learning", "Statistics", "Tableau"],
        average_salary: "$95,000 - $145,000",
    },
    CareerArchetype {
        title: "UX/UI Designer",
        description: "Create intuitive and visually appealing user interfaces and experiences for digital products and services.",
        base_match: 85,
        required_skills: &[
            "Figma",
            "Adobe Creative Suite",
            "User Research",
            "Prototyping",
            "HTML/CSS",
        ],
        average_salary: "$70,000 - $110,000",
    },
    CareerArchetype {
        title: "Digital Marketing Specialist",
        description: "Develop and execute online marketing campaigns to promote products, services, and brand awareness.",
        base_match: 82,
        required_skills: &[
            "Google Analytics",
            "SEO",
            "Social Media",
            "Content Creation",
            "PPC Advertising",
        ],
        average_salary: "$50,000 - $80,000",
    },
    CareerArchetype {
        title: "Product Manager",
        description: "Lead product development from conception to launch, coordinating between technical and business teams.",
        base_match: 88,
        required_skills: &[
            "Project Management",
            "Analytics",
            "Communication",
            "Market Research",
            "Agile",
        ],
        average_salary: "$90,000 - $140,000",
    },
    CareerArchetype {
        title: "Cybersecurity Analyst",
        description: "Protect organizations from digital threats by monitoring, detecting, and responding to security incidents.",
        base_match: 87,
        required_skills: &[
            "Network Security",
            "Incident Response",
            "Risk Assessment",
            "Compliance",
            "Ethical Hacking",
        ],
        average_salary: "$80,000 - $120,000",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Bonus rules
// ────────────────────────────────────────────────────────────────────────────

/// Which free-text profile field a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Interests,
    AcademicBackground,
}

/// An additive bonus: if the field contains any trigger, every career whose
/// title contains any target fragment gains `bonus` points.
#[derive(Debug, Clone, Copy)]
pub struct BonusRule {
    pub field: ProfileField,
    pub triggers: &'static [&'static str],
    pub targets: &'static [&'static str],
    pub bonus: u8,
}

impl BonusRule {
    /// `text` must already be lower-cased.
    pub fn triggered_by(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| text.contains(t))
    }

    pub fn targets_title(&self, title: &str) -> bool {
        self.targets.iter().any(|t| title.contains(t))
    }
}

pub static BONUS_RULES: [BonusRule; 7] = [
    BonusRule {
        field: ProfileField::Interests,
        triggers: &["technology", "tech", "programming"],
        targets: &["Software", "Data"],
        bonus: 5,
    },
    BonusRule {
        field: ProfileField::Interests,
        triggers: &["design", "creative"],
        targets: &["UX/UI"],
        bonus: 8,
    },
    BonusRule {
        field: ProfileField::Interests,
        triggers: &["marketing", "business"],
        targets: &["Marketing", "Product"],
        bonus: 6,
    },
    BonusRule {
        field: ProfileField::Interests,
        triggers: &["security", "cybersecurity"],
        targets: &["Cybersecurity"],
        bonus: 10,
    },
    BonusRule {
        field: ProfileField::AcademicBackground,
        triggers: &["computer science", "engineering"],
        targets: &["Software", "Data", "Cybersecurity"],
        bonus: 3,
    },
    BonusRule {
        field: ProfileField::AcademicBackground,
        triggers: &["business", "mba"],
        targets: &["Product", "Marketing"],
        bonus: 4,
    },
    BonusRule {
        field: ProfileField::AcademicBackground,
        triggers: &["design", "art"],
        targets: &["UX/UI"],
        bonus: 5,
    },
];
