use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommendation::recommender::CareerRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Remote recommender with heuristic fallback, or heuristic-only when no
    /// `RECOMMENDER_URL` is configured.
    pub recommender: Arc<dyn CareerRecommender>,
}
