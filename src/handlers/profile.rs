use axum::{extract::State, http::StatusCode, Json};

use crate::dto::ProfileResponse;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::profile::UserProfile;
use crate::services::onboarding;
use crate::AppState;

pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<ProfileResponse>> {
    let profile = state
        .repo
        .profile()
        .await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;

    Ok(Json(profile.into()))
}

/// Completes onboarding, or replaces the stored profile.
pub async fn save_profile(
    State(state): State<AppState>,
    AppJson(profile): AppJson<UserProfile>,
) -> AppResult<Json<ProfileResponse>> {
    onboarding::validate_profile(&profile).map_err(|e| AppError::Validation(e.to_string()))?;

    state.repo.save_profile(&profile).await?;
    tracing::info!(age = profile.age, minor = profile.is_minor(), "Profile saved");

    Ok(Json(profile.into()))
}

/// Signs out by forgetting the profile. Wellness history is kept.
pub async fn clear_profile(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.repo.clear_profile().await?;
    tracing::info!("Profile cleared");
    Ok(StatusCode::NO_CONTENT)
}
