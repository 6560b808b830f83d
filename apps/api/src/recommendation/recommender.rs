//! Pluggable recommender. `AppState` holds an `Arc<dyn CareerRecommender>`,
//! chosen at startup: `RemoteRecommender` when `RECOMMENDER_URL` is set,
//! otherwise `HeuristicRecommender`.
//!
//! `recommend` is infallible. Every remote failure degrades to the heuristic
//! scorer and roadmap selector.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::career::{RecommendationSet, RecommendationSource};
use crate::models::profile::{CareerProfile, CareerResults};
use crate::recommendation::remote::RemoteRecommenderClient;
use crate::recommendation::roadmap::select_roadmap;
use crate::recommendation::scorer::score;

#[async_trait]
pub trait CareerRecommender: Send + Sync {
    async fn recommend(&self, profile: &CareerProfile) -> RecommendationSet;

    /// Backend label for logs.
    fn backend(&self) -> &'static str;
}

/// Runs the scorer and roadmap selector directly.
pub fn heuristic_result(profile: &CareerProfile) -> RecommendationSet {
    RecommendationSet {
        recommendations: score(profile),
        roadmap: select_roadmap(profile),
        source: RecommendationSource::Heuristic,
    }
}

/// Uses the stored result when present, otherwise computes the heuristic one.
pub fn resolve_results(mut profile: CareerProfile) -> CareerResults {
    let set = match profile.ai_result.take() {
        Some(set) => set,
        None => heuristic_result(&profile),
    };
    CareerResults {
        profile,
        recommendations: set.recommendations,
        roadmap: set.roadmap,
        source: set.source,
    }
}

pub struct HeuristicRecommender;

#[async_trait]
impl CareerRecommender for HeuristicRecommender {
    async fn recommend(&self, profile: &CareerProfile) -> RecommendationSet {
        heuristic_result(profile)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

pub struct RemoteRecommender {
    client: RemoteRecommenderClient,
}

impl RemoteRecommender {
    pub fn new(client: RemoteRecommenderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CareerRecommender for RemoteRecommender {
    async fn recommend(&self, profile: &CareerProfile) -> RecommendationSet {
        match self.client.fetch(profile).await {
            Ok(set) => {
                info!(
                    "Remote recommendations received ({} careers)",
                    set.recommendations.len()
                );
                set
            }
            Err(e) => {
                warn!(
                    "Recommendation service at {} failed, using heuristic fallback: {e}",
                    self.client.endpoint()
                );
                heuristic_result(profile)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}
