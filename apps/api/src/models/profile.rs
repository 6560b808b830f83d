use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::career::{
    CareerRecommendation, RecommendationSet, RecommendationSource, SkillRoadmapWeek,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: String,
    pub interests: String,
    pub academic_background: String,
    pub ai_result: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated, not-yet-persisted profile. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub name: String,
    pub interests: String,
    pub academic_background: String,
}

/// The profile as seen by the recommender and by API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub interests: String,
    pub academic_background: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_result: Option<RecommendationSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CareerProfile {
    /// Builds a transient profile with no identity or stored result.
    pub fn new(name: &str, interests: &str, academic_background: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            interests: interests.to_string(),
            academic_background: academic_background.to_string(),
            ai_result: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<NewProfile> for CareerProfile {
    fn from(new: NewProfile) -> Self {
        CareerProfile::new(&new.name, &new.interests, &new.academic_background)
    }
}

impl TryFrom<ProfileRow> for CareerProfile {
    type Error = anyhow::Error;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let ai_result = row
            .ai_result
            .map(serde_json::from_value::<RecommendationSet>)
            .transpose()
            .with_context(|| format!("Profile {} has an unreadable ai_result", row.id))?;

        Ok(CareerProfile {
            id: Some(row.id),
            name: row.name,
            interests: row.interests,
            academic_background: row.academic_background,
            ai_result,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

/// Everything the results view and the report need.
#[derive(Debug, Clone, Serialize)]
pub struct CareerResults {
    pub profile: CareerProfile,
    pub recommendations: Vec<CareerRecommendation>,
    pub roadmap: Vec<SkillRoadmapWeek>,
    pub source: RecommendationSource,
}
