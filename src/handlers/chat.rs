use axum::{extract::State, Json};

use crate::dto::{ChatRequest, ChatResponse, SuggestionRequest, SuggestionResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::services::crisis;
use crate::services::gemini::{self, GeminiClient, CHAT_GENERATION, MISSING_KEY_MESSAGE};
use crate::AppState;

fn client(state: &AppState) -> AppResult<&GeminiClient> {
    state
        .gemini
        .as_ref()
        .ok_or_else(|| AppError::Config(MISSING_KEY_MESSAGE.into()))
}

pub async fn chat(
    State(state): State<AppState>,
    AppJson(req): AppJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = req
        .message_text()
        .ok_or_else(|| AppError::Validation("Message is required".into()))?;
    let client = client(&state)?;
    let crisis_support = crisis::screen(message);

    let prompt = gemini::build_chat_prompt(message, &req.history);
    tracing::debug!(history = req.history.len(), "Forwarding chat message");

    let response = client
        .generate(&state.config.gemini_chat_model, &prompt, Some(CHAT_GENERATION))
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(ChatResponse {
        response,
        crisis: crisis_support.is_some(),
        crisis_support,
    }))
}

pub async fn emotion_suggestions(
    State(state): State<AppState>,
    AppJson(req): AppJson<SuggestionRequest>,
) -> AppResult<Json<SuggestionResponse>> {
    let emotion = req
        .emotion
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::Validation("Emotion is required".into()))?;
    let client = client(&state)?;

    let prompt = gemini::build_suggestion_prompt(emotion);
    let suggestion = client
        .generate(&state.config.gemini_suggestion_model, &prompt, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, emotion, "Suggestion generation failed");
            AppError::Upstream("Failed to generate suggestions".into())
        })?;

    Ok(Json(SuggestionResponse { suggestion }))
}
