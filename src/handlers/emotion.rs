use axum::{extract::State, http::StatusCode, Json};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::emotion::{EmotionResult, FaceFrame, RawExpressions};
use crate::services::detection::SessionStatus;
use crate::services::expression;
use crate::AppState;

fn checked(expressions: &RawExpressions) -> AppResult<()> {
    expressions.validate().map_err(AppError::Validation)
}

/// One-shot classification of a single frame.
pub async fn detect(AppJson(frame): AppJson<FaceFrame>) -> AppResult<Json<EmotionResult>> {
    let expressions = frame
        .expressions
        .ok_or_else(|| AppError::Validation("No face detected".into()))?;
    checked(&expressions)?;

    Ok(Json(expression::aggregate(&expressions)))
}

pub async fn start_session(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(state.detector.start().await)
}

pub async fn stop_session(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(state.detector.stop().await)
}

pub async fn session_status(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(state.detector.status().await)
}

/// Latest client frame for the running session. A frame without a face
/// replaces the previous one, so the session keeps polling.
pub async fn push_frame(
    State(state): State<AppState>,
    AppJson(frame): AppJson<FaceFrame>,
) -> AppResult<StatusCode> {
    if let Some(expressions) = &frame.expressions {
        checked(expressions)?;
    }
    state.frames.push(frame).await;
    Ok(StatusCode::ACCEPTED)
}
