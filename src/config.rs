use std::env;
use std::path::PathBuf;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const DEFAULT_DETECTION_INTERVAL_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    /// Additional allowed origins, e.g. LAN addresses during development.
    pub cors_extra_origins: Vec<String>,

    /// Directory backing the durable key-value store.
    pub data_dir: PathBuf,

    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_chat_model: String,
    pub gemini_suggestion_model: String,

    pub detection_interval_secs: u64,
    pub ai_rate_limit_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|extra| {
                    extra
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),

            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),

            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.into()),
            gemini_chat_model: env::var("GEMINI_CHAT_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".into()),
            gemini_suggestion_model: env::var("GEMINI_SUGGESTION_MODEL")
                .unwrap_or_else(|_| "gemini-pro".into()),

            detection_interval_secs: detection_interval(
                env::var("DETECTION_INTERVAL_SECS").ok().as_deref(),
            ),
            ai_rate_limit_per_minute: env::var("AI_RATE_LIMIT_PER_MINUTE")
                .unwrap_or_else(|_| "20".into())
                .parse()
                .unwrap_or(20),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    /// Local development settings with no AI credential configured.
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            data_dir: PathBuf::from("./data"),
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.into(),
            gemini_chat_model: "gemini-2.0-flash".into(),
            gemini_suggestion_model: "gemini-pro".into(),
            detection_interval_secs: DEFAULT_DETECTION_INTERVAL_SECS,
            ai_rate_limit_per_minute: 20,
        }
    }
}

/// Polling period for detection sessions. Zero or unparsable values fall back
/// to the default.
fn detection_interval(raw: Option<&str>) -> u64 {
    match raw.map(str::trim) {
        None => DEFAULT_DETECTION_INTERVAL_SECS,
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                tracing::warn!(
                    value,
                    default = DEFAULT_DETECTION_INTERVAL_SECS,
                    "Ignoring invalid DETECTION_INTERVAL_SECS"
                );
                DEFAULT_DETECTION_INTERVAL_SECS
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_interval_rejects_zero() {
        assert_eq!(detection_interval(Some("0")), DEFAULT_DETECTION_INTERVAL_SECS);
        assert_eq!(detection_interval(Some("soon")), DEFAULT_DETECTION_INTERVAL_SECS);
        assert_eq!(detection_interval(None), DEFAULT_DETECTION_INTERVAL_SECS);
        assert_eq!(detection_interval(Some(" 5 ")), 5);
    }
}
