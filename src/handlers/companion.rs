use axum::Json;
use validator::Validate;

use crate::dto::{CompanionRequest, CompanionResponse};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::models::chat::Message;
use crate::services::{companion, crisis};

/// Offline companion reply, used when no AI backend is wanted.
pub async fn reply(AppJson(req): AppJson<CompanionRequest>) -> AppResult<Json<CompanionResponse>> {
    req.validate()?;

    let reply = companion::reply(&req.message, req.age, req.history.len());
    let crisis_support = crisis::screen(&req.message);
    tracing::debug!(tone = ?reply.tone, age_group = ?reply.age_group, "Companion reply selected");

    Ok(Json(CompanionResponse {
        reply: Message::assistant(reply.text),
        tone: reply.tone,
        age_group: reply.age_group,
        crisis: crisis_support.is_some(),
        crisis_support,
    }))
}
