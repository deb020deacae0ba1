//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::skill_resource::SkillResource;
use crate::recommendation::RecommendedRole;
use crate::state::AppState;

/// GET /api/v1/recommendations
///
/// Returns up to 10 roles for the authenticated user, most relevant first.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<RecommendedRole>>, AppError> {
    let recommendations = state.recommender.recommend(user_id).await?;
    debug!(
        "Recommendations for user {user_id}: {:?}",
        recommendations
            .iter()
            .map(|r| r.role().role_id.as_str())
            .collect::<Vec<_>>()
    );
    Ok(Json(recommendations))
}

/// GET /api/v1/resources/:skill_name
///
/// Learning links for a skill, typically one of a role's `missing_skills`.
pub async fn handle_get_skill_resource(
    State(state): State<AppState>,
    Path(skill_name): Path<String>,
) -> Result<Json<SkillResource>, AppError> {
    state
        .resources
        .find_by_skill_name(&skill_name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No resources found for skill '{skill_name}'")))
}
