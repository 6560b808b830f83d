use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::career::RecommendationSet;
use crate::models::profile::{NewProfile, ProfileRow};

/// Inserts a validated profile and returns the stored row (id and timestamps
/// are assigned by the database).
pub async fn insert_profile(pool: &PgPool, profile: &NewProfile) -> Result<ProfileRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (name, interests, academic_background)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&profile.name)
    .bind(&profile.interests)
    .bind(&profile.academic_background)
    .fetch_one(pool)
    .await?;

    info!("Inserted profile {}", row.id);
    Ok(row)
}

/// Attaches a recommendation set to an existing profile.
pub async fn store_ai_result(
    pool: &PgPool,
    profile_id: Uuid,
    result: &RecommendationSet,
) -> Result<ProfileRow, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        UPDATE profiles
        SET ai_result = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(Json(result))
    .bind(profile_id)
    .fetch_one(pool)
    .await
}

pub async fn get_profile(pool: &PgPool, profile_id: Uuid) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(profile_id)
        .fetch_optional(pool)
        .await
}
