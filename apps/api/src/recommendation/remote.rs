//! Client for the remote career recommendation service.
//!
//! Wire contract: `POST` `{name, interests, background}`, expecting
//! `{careers: [string], skillRoadmap: [string]}`. The response is reshaped
//! into the same `CareerRecommendation` / `SkillRoadmapWeek` types the
//! heuristic scorer produces.
//!
//! Errors here never reach HTTP callers; `RemoteRecommender` logs them and
//! falls back to the heuristic path.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::career::{
    CareerRecommendation, RecommendationSet, RecommendationSource, SkillRoadmapWeek,
};
use crate::models::profile::CareerProfile;
use crate::recommendation::scorer::MATCH_CEILING;

const REMOTE_BASE_MATCH: u32 = 85;
const REMOTE_MATCH_STEP: u32 = 5;
const REMOTE_SALARY_RANGE: &str = "$60,000 - $120,000";
/// Week numbers are `u8`; longer remote roadmaps are rejected.
pub const MAX_REMOTE_ROADMAP_WEEKS: usize = u8::MAX as usize;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recommendation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Serialize)]
struct RemoteRequest<'a> {
    name: &'a str,
    interests: &'a str,
    background: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteResponse {
    pub careers: Vec<String>,
    pub skill_roadmap: Vec<String>,
}

#[derive(Clone)]
pub struct RemoteRecommenderClient {
    client: Client,
    endpoint: String,
}

impl RemoteRecommenderClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, RemoteError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Makes a single request. No retries: the caller falls back instead.
    pub async fn fetch(&self, profile: &CareerProfile) -> Result<RecommendationSet, RemoteError> {
        let request_body = RemoteRequest {
            name: &profile.name,
            interests: &profile.interests,
            background: &profile.academic_background,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: RemoteResponse = serde_json::from_str(&body)?;

        debug!(
            "Recommendation service returned {} careers, {} roadmap entries",
            parsed.careers.len(),
            parsed.skill_roadmap.len()
        );

        into_recommendation_set(parsed)
    }
}

/// Validates and reshapes a decoded remote response.
pub fn into_recommendation_set(response: RemoteResponse) -> Result<RecommendationSet, RemoteError> {
    if response.careers.is_empty() {
        return Err(RemoteError::Malformed("no careers"));
    }
    if response.skill_roadmap.is_empty() {
        return Err(RemoteError::Malformed("no roadmap entries"));
    }
    if response.skill_roadmap.len() > MAX_REMOTE_ROADMAP_WEEKS {
        return Err(RemoteError::Malformed("too many roadmap entries"));
    }

    Ok(RecommendationSet {
        recommendations: careers_to_recommendations(&response.careers),
        roadmap: roadmap_from_remote(&response.skill_roadmap),
        source: RecommendationSource::Remote,
    })
}

/// Remote careers carry only a title; everything else is filled in.
/// Match percentage starts at 85 and steps by 5 per position, capped at the
/// heuristic ceiling.
pub fn careers_to_recommendations(careers: &[String]) -> Vec<CareerRecommendation> {
    careers
        .iter()
        .enumerate()
        .map(|(index, career)| {
            let raw = REMOTE_BASE_MATCH + REMOTE_MATCH_STEP * index as u32;
            CareerRecommendation {
                title: career.clone(),
                description: format!(
                    "Exciting career opportunity in {career} tailored to your interests and background."
                ),
                match_percentage: raw.min(u32::from(MATCH_CEILING)) as u8,
                required_skills: vec![
                    format!("{career} fundamentals"),
                    "Problem solving".to_string(),
                    "Communication".to_string(),
                ],
                average_salary: REMOTE_SALARY_RANGE.to_string(),
            }
        })
        .collect()
}

/// Numbers entries from week 1. Entries past `MAX_REMOTE_ROADMAP_WEEKS` are
/// dropped; `into_recommendation_set` rejects such responses first.
pub fn roadmap_from_remote(entries: &[String]) -> Vec<SkillRoadmapWeek> {
    entries
        .iter()
        .zip(1..=u8::MAX)
        .map(|(entry, week)| SkillRoadmapWeek {
            week,
            title: entry.clone(),
            tasks: vec![
                format!("Complete {} exercises", entry.to_lowercase()),
                "Practice hands-on projects".to_string(),
                "Review and document progress".to_string(),
            ],
            resources: vec![
                "Online tutorials".to_string(),
                "Practice exercises".to_string(),
                "Community forums".to_string(),
            ],
        })
        .collect()
}
