use serde::{Deserialize, Serialize};

/// A ranked career suggestion. Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
    pub match_percentage: u8, // 0 – 100
    pub required_skills: Vec<String>,
    pub average_salary: String,
}

/// One week of a learning plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRoadmapWeek {
    pub week: u8,
    pub title: String,
    pub tasks: Vec<String>,
    pub resources: Vec<String>,
}

/// Which backend produced a recommendation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Remote,
    Heuristic,
}

/// Recommendations plus roadmap, as stored on the profile row (`ai_result`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<CareerRecommendation>,
    pub roadmap: Vec<SkillRoadmapWeek>,
    pub source: RecommendationSource,
}
