use axum::Json;

use crate::errors::AppError;
use crate::models::profile::{CareerProfile, CareerResults};
use crate::profiles::validation::ProfileSubmission;
use crate::recommendation::recommender::resolve_results;

/// POST /api/v1/recommendations/preview
///
/// Runs the heuristic scorer and roadmap selector on an unsaved profile.
/// No persistence, no remote call.
pub async fn handle_preview(
    Json(submission): Json<ProfileSubmission>,
) -> Result<Json<CareerResults>, AppError> {
    let profile = CareerProfile::from(submission.validate()?);
    Ok(Json(resolve_results(profile)))
}
