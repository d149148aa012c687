use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::gamification::AchievementBoard;
use crate::AppState;

pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<AchievementBoard>> {
    let stats = state.repo.wellness_stats().await?;
    Ok(Json(AchievementBoard::new(stats)))
}
