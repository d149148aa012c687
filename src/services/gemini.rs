//! Gemini `generateContent` client and the prompts sent through it.

use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::models::chat::ChatTurn;

pub const SYSTEM_PROMPT: &str = "You are a warm, supportive mental-health companion. You respond gently, empathetically, and safely. You do not diagnose. You provide emotional support and helpful coping suggestions.

Guidelines:
- Always be compassionate and non-judgmental
- Use a calm, caring, therapist-like tone
- Validate the user's feelings
- Offer practical coping strategies when appropriate
- If someone mentions self-harm or crisis, gently suggest professional help
- Keep responses concise but meaningful (2-4 sentences typically)
- Use \"I\" statements to show empathy (e.g., \"I hear that you're feeling...\")
- Never claim to be a licensed therapist
- Encourage self-care and healthy habits";

pub const MISSING_KEY_MESSAGE: &str =
    "Gemini API key not configured. Please set GEMINI_API_KEY in the server environment.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

/// Sampling used for companion chat.
pub const CHAT_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.9,
    top_k: 40,
    top_p: 0.95,
    max_output_tokens: 2048,
};

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned no text")]
    EmptyResponse,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `None` when no credential is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .gemini_api_key
            .as_ref()
            .map(|key| Self::new(key.clone(), config.gemini_base_url.clone()))
    }

    /// Single-shot generation. No retry and no explicit timeout.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        generation: Option<GenerationConfig>,
    ) -> Result<String, GeminiError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });
        if let Some(generation) = generation {
            body["generationConfig"] = json!(generation);
        }

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(text);
            return Err(GeminiError::Api { status, message });
        }

        let payload: serde_json::Value = response.json().await?;
        let text: String = payload["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text)
    }
}

/// System prompt, optional transcript, then the new message awaiting a reply.
pub fn build_chat_prompt(message: &str, history: &[ChatTurn]) -> String {
    let mut prompt = format!("{SYSTEM_PROMPT}\n\n");

    if !history.is_empty() {
        prompt.push_str("Previous conversation:\n");
        for turn in history {
            prompt.push_str(&format!("{}: {}\n", turn.role.speaker(), turn.content));
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!("User: {message}\nAssistant:"));
    prompt
}

pub fn build_suggestion_prompt(emotion: &str) -> String {
    format!(
        r#"You are a compassionate mental health assistant. A person's emotion has been detected as "{emotion}".

Please provide a response with these THREE sections (use clear headings):

**💭 Understanding Your Emotion**
Write 2-3 empathetic sentences acknowledging their {emotion} emotion.

**✨ Three Actionable Suggestions**
Provide 3 specific, practical things they can do right now to feel better. Number them 1, 2, 3.

**🌬️ Quick Breathing Exercise**
Describe one simple breathing or mindfulness technique they can try immediately (2-3 sentences with clear steps).

Keep your response warm, supportive, and practical. Use the exact section headings shown above."#
    )
}
