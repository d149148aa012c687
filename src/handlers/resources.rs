use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use rand::Rng;

use crate::dto::{
    CrisisResponse, MoodResourcesResponse, ProblemsQuery, ProblemsResponse, QuoteResponse,
    TipsResponse,
};
use crate::error::AppResult;
use crate::models::emotion::EmotionLabel;
use crate::services::content::{
    self, ProblemAudience, ResourceKind, CRISIS_REGIONS, DAILY_QUOTES, EMERGENCY_NOTICE,
    WELLNESS_TIPS,
};
use crate::AppState;

pub async fn random_quote() -> Json<QuoteResponse> {
    let pick = rand::thread_rng().gen_range(0..DAILY_QUOTES.len());
    let (index, quote) = content::quote_at(pick);
    Json(QuoteResponse { index, quote })
}

pub async fn tips() -> Json<TipsResponse> {
    Json(TipsResponse {
        tips: &WELLNESS_TIPS,
    })
}

pub async fn crisis() -> Json<CrisisResponse> {
    Json(CrisisResponse {
        emergency_notice: EMERGENCY_NOTICE,
        regions: &CRISIS_REGIONS,
    })
}

/// Unknown emotions get the resources for a happy mood.
pub async fn mood_resources(Path(emotion): Path<String>) -> Json<MoodResourcesResponse> {
    let label = EmotionLabel::parse(&emotion).unwrap_or(EmotionLabel::Happy);

    let grouped = content::mood_resources(label).iter().fold(
        MoodResourcesResponse::default(),
        |mut grouped, resource| {
            match resource.kind() {
                ResourceKind::Article => grouped.articles.push(*resource),
                ResourceKind::Meditation => grouped.meditations.push(*resource),
                ResourceKind::Breathing => grouped.breathing_exercises.push(*resource),
            }
            grouped
        },
    );

    Json(grouped)
}

/// Problem areas to offer for the user's age. `?age=` wins over the stored
/// profile; with neither the young-adult list is served.
pub async fn problems(
    State(state): State<AppState>,
    query: Result<Query<ProblemsQuery>, QueryRejection>,
) -> AppResult<Json<ProblemsResponse>> {
    let Query(query) = query?;

    let age = match query.age {
        Some(age) => Some(age),
        None => state.repo.profile().await?.map(|p| p.age),
    };
    let audience = age
        .map(ProblemAudience::from_age)
        .unwrap_or(ProblemAudience::YoungAdult);

    Ok(Json(ProblemsResponse {
        audience,
        categories: content::problem_categories(audience),
    }))
}
