use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::assessment::form::AssessmentForm;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

/// POST /api/v1/assessment
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(form): Json<AssessmentForm>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let profile = form.into_profile(user_id)?;
    let stored = state.profiles.upsert_profile(&profile).await?;
    info!(
        "Stored assessment for user {user_id} ({} skills)",
        stored.skills.len()
    );
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/v1/assessment
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Profile>, AppError> {
    state
        .profiles
        .get_profile(user_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound("Assessment not found. Please complete it first.".to_string())
        })
}
