use axum::{extract::State, Json};
use chrono::Local;
use validator::Validate;

use crate::dto::{MoodAnalysisResponse, MoodAnalyzeRequest, SaveMoodRequest, SaveMoodResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::mood::{local_today, MoodEntry};
use crate::models::profile::LifeStage;
use crate::services::aggregator::{self, MoodSummary};
use crate::services::{gamification, text_emotion};
use crate::AppState;

/// Records a check-in and recomputes streak and badges in one step.
pub async fn save_mood(
    State(state): State<AppState>,
    AppJson(req): AppJson<SaveMoodRequest>,
) -> AppResult<Json<SaveMoodResponse>> {
    req.validate()?;

    let _guard = state.repo.exclusive().await;

    let entry = MoodEntry::at(req.mood, &Local::now());
    let today = entry.date;

    let mut history = state.repo.mood_history().await?;
    history.push(entry.clone());

    let journal_count = state.repo.journal_entries().await?.len();
    let previous = state.repo.wellness_stats().await?;
    let stats = gamification::apply_check_in(&previous, &history, journal_count, today);

    state.repo.save_mood_history(&history).await?;
    state.repo.save_wellness_stats(&stats).await?;

    let new_badges: Vec<_> = stats.badges.difference(&previous.badges).collect();
    tracing::info!(
        mood = entry.mood,
        streak = stats.streak,
        total_check_ins = stats.total_check_ins,
        new_badges = ?new_badges,
        "Mood check-in saved"
    );

    Ok(Json(SaveMoodResponse { entry, stats }))
}

pub async fn list_moods(State(state): State<AppState>) -> AppResult<Json<Vec<MoodEntry>>> {
    Ok(Json(state.repo.mood_history().await?))
}

pub async fn summary(State(state): State<AppState>) -> AppResult<Json<MoodSummary>> {
    let history = state.repo.mood_history().await?;
    Ok(Json(aggregator::summarize(&history, local_today())))
}

/// Keyword analysis of a free-text check-in. Without an explicit age the
/// stored profile's age picks the stress factors.
pub async fn analyze(
    State(state): State<AppState>,
    AppJson(req): AppJson<MoodAnalyzeRequest>,
) -> AppResult<Json<MoodAnalysisResponse>> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".into()));
    }

    let age = match req.age {
        Some(age) => Some(age),
        None => state.repo.profile().await?.map(|p| p.age),
    };
    let life_stage = age.map(LifeStage::from_age).unwrap_or(LifeStage::EarlyAdult);
    let emotion = text_emotion::classify(&req.text);

    Ok(Json(MoodAnalysisResponse {
        emotion,
        response: emotion.response(),
        suggestions: emotion.coping_suggestions(),
        life_stage,
        stress_factors: text_emotion::stress_factors(life_stage),
    }))
}
