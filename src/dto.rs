//! Request and response bodies for the HTTP API.
//!
//! - `*Request`  → deserialized from the client JSON body
//! - `*Response` → serialized back to the client
//! - Field-level rules use `validator` derives; cross-field rules live in the
//!   services that own them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::chat::{ChatTurn, Message};
use crate::models::journal::{JournalEntry, JournalMood};
use crate::models::mood::MoodEntry;
use crate::models::profile::{LifeStage, Theme, UserProfile};
use crate::models::stats::WellnessStats;
use crate::services::companion::{AgeGroup, Tone};
use crate::services::content::{
    CrisisRegion, MoodResource, ProblemAudience, ProblemCategory, Quote, WellnessTip,
};
use crate::services::crisis::CrisisSupport;
use crate::services::text_emotion::TextEmotion;

/// Treats an explicit `null` like an absent field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// AI proxy
// ============================================================================

/// POST /api/chat
///
/// `message` stays untyped so that a missing, non-string or empty value all
/// produce the same 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn message_text(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }
}

/// `crisisSupport` is only present when `crisis` is true.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub crisis: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_support: Option<CrisisSupport>,
}

/// POST /api/emotion-suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub emotion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

// ============================================================================
// Companion
// ============================================================================

/// POST /api/companion
#[derive(Debug, Deserialize, Validate)]
pub struct CompanionRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[validate(range(max = 120, message = "Age must be at most 120"))]
    pub age: u32,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionResponse {
    pub reply: Message,
    pub tone: Tone,
    pub age_group: AgeGroup,
    pub crisis: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_support: Option<CrisisSupport>,
}

// ============================================================================
// Mood
// ============================================================================

/// POST /api/mood/analyze
#[derive(Debug, Deserialize)]
pub struct MoodAnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub age: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysisResponse {
    pub emotion: TextEmotion,
    pub response: &'static str,
    pub suggestions: [&'static str; 3],
    pub life_stage: LifeStage,
    pub stress_factors: [&'static str; 6],
}

/// POST /api/mood
#[derive(Debug, Deserialize, Validate)]
pub struct SaveMoodRequest {
    #[validate(range(max = 10, message = "Mood must be between 0 and 10"))]
    pub mood: u8,
}

#[derive(Debug, Serialize)]
pub struct SaveMoodResponse {
    pub entry: MoodEntry,
    pub stats: WellnessStats,
}

// ============================================================================
// Journal
// ============================================================================

/// POST /api/journal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJournalRequest {
    pub mood: JournalMood,

    #[validate(length(max = 10000, message = "Entry must be at most 10000 characters"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CreateJournalResponse {
    pub entry: JournalEntry,
    pub stats: WellnessStats,
}

// ============================================================================
// Profile & theme
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: UserProfile,
    pub life_stage: LifeStage,
    pub is_minor: bool,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            life_stage: LifeStage::from_age(profile.age),
            is_minor: profile.is_minor(),
            profile,
        }
    }
}

/// PUT /api/theme
#[derive(Debug, Deserialize, Validate)]
pub struct ThemeRequest {
    #[validate(length(min = 1, max = 64, message = "Gradient start is required"))]
    pub from: String,
    #[validate(length(min = 1, max = 64, message = "Gradient end is required"))]
    pub to: String,
}

impl From<ThemeRequest> for Theme {
    fn from(req: ThemeRequest) -> Self {
        Theme {
            from: req.from,
            to: req.to,
        }
    }
}

// ============================================================================
// Static content
// ============================================================================

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub index: usize,
    pub quote: Quote,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: &'static [WellnessTip],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisResponse {
    pub emergency_notice: &'static str,
    pub regions: &'static [CrisisRegion],
}

/// Per-emotion resources, split the way the dashboard lays them out.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodResourcesResponse {
    pub articles: Vec<MoodResource>,
    pub meditations: Vec<MoodResource>,
    pub breathing_exercises: Vec<MoodResource>,
}

/// GET /api/problems
#[derive(Debug, Deserialize)]
pub struct ProblemsQuery {
    #[serde(default)]
    pub age: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ProblemsResponse {
    pub audience: ProblemAudience,
    pub categories: &'static [ProblemCategory],
}
