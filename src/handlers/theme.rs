use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::ThemeRequest;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::models::profile::Theme;
use crate::services::content::{GradientPreset, GRADIENT_PRESETS};
use crate::AppState;

/// Stored gradient, or the default one when none was picked yet.
pub async fn get_theme(State(state): State<AppState>) -> AppResult<Json<Theme>> {
    Ok(Json(state.repo.theme().await?.unwrap_or_default()))
}

pub async fn save_theme(
    State(state): State<AppState>,
    AppJson(req): AppJson<ThemeRequest>,
) -> AppResult<Json<Theme>> {
    req.validate()?;

    let theme = Theme::from(req);
    state.repo.save_theme(&theme).await?;
    tracing::debug!(from = %theme.from, to = %theme.to, "Theme saved");

    Ok(Json(theme))
}

pub async fn presets() -> Json<&'static [GradientPreset]> {
    Json(&GRADIENT_PRESETS[..])
}
