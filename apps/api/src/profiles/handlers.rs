//! Axum route handlers for the Profiles API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{CareerProfile, CareerResults};
use crate::profiles::repository::{get_profile, insert_profile, store_ai_result};
use crate::profiles::validation::ProfileSubmission;
use crate::recommendation::recommender::resolve_results;
use crate::report::{render_report, report_filename, REPORT_CONTENT_TYPE};
use crate::state::AppState;

/// POST /api/v1/profiles
///
/// validate → persist → recommend (remote, falling back to heuristic) →
/// store the result on the row → return the results payload.
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(submission): Json<ProfileSubmission>,
) -> Result<(StatusCode, Json<CareerResults>), AppError> {
    let new_profile = submission.validate()?;

    let row = insert_profile(&state.db, &new_profile).await?;
    let profile_id = row.id;
    let profile = CareerProfile::try_from(row)?;

    let result = state.recommender.recommend(&profile).await;
    info!(
        "Profile {profile_id}: {:?} recommendations via {} backend",
        result.source,
        state.recommender.backend()
    );

    let row = store_ai_result(&state.db, profile_id, &result).await?;
    let profile = CareerProfile::try_from(row)?;

    Ok((StatusCode::CREATED, Json(resolve_results(profile))))
}

/// GET /api/v1/profiles/:id
///
/// Profiles stored without a result get the heuristic one computed on read.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<CareerResults>, AppError> {
    let profile = load_profile(&state, profile_id).await?;
    Ok(Json(resolve_results(profile)))
}

/// GET /api/v1/profiles/:id/report
///
/// Returns the Markdown report as a file download.
pub async fn handle_download_report(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let profile = load_profile(&state, profile_id).await?;
    let results = resolve_results(profile);

    let body = render_report(&results, Utc::now());
    let disposition = format!(
        "attachment; filename=\"{}\"",
        report_filename(&results.profile.name)
    );
    info!("Generated report for profile {profile_id}");

    Ok((
        [
            (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

async fn load_profile(state: &AppState, profile_id: Uuid) -> Result<CareerProfile, AppError> {
    let row = get_profile(&state.db, profile_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {profile_id} not found")))?;
    Ok(CareerProfile::try_from(row)?)
}
