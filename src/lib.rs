use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod rate_limit;
pub mod services;
pub mod store;

use config::Config;
use rate_limit::RateLimitState;
use services::detection::{EmotionDetector, FrameBuffer};
use services::gemini::GeminiClient;
use store::{KeyValueStore, WellnessRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub repo: WellnessRepository,
    /// `None` when `GEMINI_API_KEY` is not set.
    pub gemini: Option<GeminiClient>,
    pub frames: FrameBuffer,
    pub detector: EmotionDetector,
    pub rate_limiter: RateLimitState,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let gemini = GeminiClient::from_config(&config);
        if gemini.is_none() {
            tracing::warn!("GEMINI_API_KEY not set; AI endpoints will return 500");
        }

        let frames = FrameBuffer::new();
        let detector = EmotionDetector::new(
            Arc::new(frames.clone()),
            Duration::from_secs(config.detection_interval_secs),
        );

        Self {
            config: Arc::new(config),
            repo: WellnessRepository::new(store),
            gemini,
            frames,
            detector,
            rate_limiter: RateLimitState::new(),
        }
    }
}

pub fn cors_layer(config: &Config) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(&config.cors_extra_origins)
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

pub fn app(state: AppState) -> Router {
    let ai_routes = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route(
            "/api/emotion-suggestions",
            post(handlers::chat::emotion_suggestions),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit_ai,
        ));

    let wellness_routes = Router::new()
        .route("/api/companion", post(handlers::companion::reply))
        // Mood
        .route(
            "/api/mood",
            get(handlers::mood::list_moods).post(handlers::mood::save_mood),
        )
        .route("/api/mood/summary", get(handlers::mood::summary))
        .route("/api/mood/analyze", post(handlers::mood::analyze))
        // Journal
        .route(
            "/api/journal",
            get(handlers::journal::list_entries).post(handlers::journal::create_entry),
        )
        .route("/api/journal/stats", get(handlers::journal::mood_counts))
        // Gamification
        .route("/api/stats", get(handlers::stats::get_stats))
        // Emotion detection
        .route("/api/emotion/detect", post(handlers::emotion::detect))
        .route("/api/emotion/session", get(handlers::emotion::session_status))
        .route(
            "/api/emotion/session/start",
            post(handlers::emotion::start_session),
        )
        .route(
            "/api/emotion/session/stop",
            post(handlers::emotion::stop_session),
        )
        .route(
            "/api/emotion/session/frame",
            post(handlers::emotion::push_frame),
        )
        // Profile & theme
        .route(
            "/api/profile",
            get(handlers::profile::get_profile)
                .put(handlers::profile::save_profile)
                .delete(handlers::profile::clear_profile),
        )
        .route(
            "/api/theme",
            get(handlers::theme::get_theme).put(handlers::theme::save_theme),
        )
        .route("/api/theme/presets", get(handlers::theme::presets))
        // Static content
        .route("/api/resources/quote", get(handlers::resources::random_quote))
        .route("/api/resources/tips", get(handlers::resources::tips))
        .route("/api/resources/crisis", get(handlers::resources::crisis))
        .route(
            "/api/resources/mood/:emotion",
            get(handlers::resources::mood_resources),
        )
        .route("/api/problems", get(handlers::resources::problems));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(ai_routes)
        .merge(wellness_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config)),
        )
        .with_state(state)
}
