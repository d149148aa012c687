use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::dto::{CreateJournalRequest, CreateJournalResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::journal::{JournalEntry, JournalMoodCounts};
use crate::models::mood::local_today;
use crate::services::gamification;
use crate::AppState;

/// Newest first.
pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<JournalEntry>>> {
    Ok(Json(state.repo.journal_entries().await?))
}

pub async fn create_entry(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateJournalRequest>,
) -> AppResult<(StatusCode, Json<CreateJournalResponse>)> {
    req.validate()?;
    let content = req.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("Journal entry cannot be empty".into()));
    }

    let _guard = state.repo.exclusive().await;

    let entry = JournalEntry::new(req.mood, content, local_today());
    let mut entries = state.repo.journal_entries().await?;
    entries.insert(0, entry.clone());
    state.repo.save_journal_entries(&entries).await?;

    let stats = gamification::refresh_badges(&state.repo.wellness_stats().await?, entries.len());
    state.repo.save_wellness_stats(&stats).await?;

    tracing::info!(entry_id = %entry.id, mood = ?entry.mood, total = entries.len(), "Journal entry saved");

    Ok((StatusCode::CREATED, Json(CreateJournalResponse { entry, stats })))
}

pub async fn mood_counts(State(state): State<AppState>) -> AppResult<Json<JournalMoodCounts>> {
    let entries = state.repo.journal_entries().await?;
    Ok(Json(JournalMoodCounts::tally(&entries)))
}
