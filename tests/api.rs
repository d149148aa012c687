use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use calmmind_api::config::Config;
use calmmind_api::store::MemoryStore;
use calmmind_api::{app, AppState};

fn test_app(config: Config) -> Router {
    app(AppState::new(config, Arc::new(MemoryStore::new())))
}

fn with_gemini(server: &MockServer) -> Config {
    Config {
        gemini_api_key: Some("test-key".into()),
        gemini_base_url: server.uri(),
        ..Config::default()
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn health_reports_ai_configuration() {
    let app = test_app(Config::default());
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["aiConfigured"], false);

    let (status, _) = send(&app, "GET", "/readyz", None).await;
    assert_eq!(status, StatusCode::OK);
}

// --- AI proxy ---

#[tokio::test]
async fn chat_requires_a_message() {
    let app = test_app(Config::default());

    for body in [json!({ "message": "" }), json!({}), json!({ "message": 42 })] {
        let (status, body) = send(&app, "POST", "/api/chat", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");
    }
}

#[tokio::test]
async fn chat_without_credential_names_the_variable() {
    let app = test_app(Config::default());
    let (status, body) = send(&app, "POST", "/api/chat", Some(json!({ "message": "hi" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn chat_relays_the_generated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/gemini-2\.0-flash:generateContent$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "I hear that you're feeling tired. " },
                { "text": "Rest is important." }
            ] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(with_gemini(&server));
    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({
            "message": "I'm so tired",
            "history": [{ "role": "assistant", "content": "How are you today?" }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "I hear that you're feeling tired. Rest is important."
    );
}

#[tokio::test]
async fn chat_relays_upstream_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Resource has been exhausted" }
        })))
        .mount(&server)
        .await;

    let app = test_app(with_gemini(&server));
    let (status, body) = send(&app, "POST", "/api/chat", Some(json!({ "message": "hi" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Resource has been exhausted");
}

#[tokio::test]
async fn chat_accepts_null_history_and_foreign_roles() {
    let app = test_app(Config::default());
    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({ "message": "hi", "history": null })),
    )
    .await;
    // Past validation; fails only on the missing credential.
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Assistant: Hello there"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Glad you're here." }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(with_gemini(&server));
    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({
            "message": "hi again",
            "history": [{ "role": "model", "content": "Hello there" }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Glad you're here.");
    assert_eq!(body["crisis"], false);
    assert!(body.get("crisisSupport").is_none());
}

#[tokio::test]
async fn chat_flags_crisis_language() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "I'm here with you." }] } }]
        })))
        .mount(&server)
        .await;

    let app = test_app(with_gemini(&server));
    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({ "message": "Honestly I want to die" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "I'm here with you.");
    assert_eq!(body["crisis"], true);
    assert_eq!(body["crisisSupport"]["regions"].as_array().unwrap().len(), 3);
    assert!(body["crisisSupport"]["emergencyNotice"].is_string());
}

#[tokio::test]
async fn suggestions_hide_upstream_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let app = test_app(with_gemini(&server));

    let (status, body) = send(&app, "POST", "/api/emotion-suggestions", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Emotion is required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/emotion-suggestions",
        Some(json!({ "emotion": "Sad" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate suggestions");
}

#[tokio::test]
async fn ai_endpoints_are_rate_limited() {
    let app = test_app(Config {
        ai_rate_limit_per_minute: 2,
        ..Config::default()
    });

    for _ in 0..2 {
        let (status, _) = send(&app, "POST", "/api/chat", Some(json!({ "message": "hi" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "message": "hi" }).to_string()))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);

    let retry_after: u64 = res.headers()[header::RETRY_AFTER]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((1..=60).contains(&retry_after));

    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Rate limited");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = test_app(Config::default());
    let req = Request::builder()
        .method("POST")
        .uri("/api/mood")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

// --- Companion ---

#[tokio::test]
async fn companion_reply_is_deterministic() {
    let app = test_app(Config::default());
    let body = json!({
        "message": "I feel so alone lately",
        "age": 16,
        "history": []
    });

    let (status, first) = send(&app, "POST", "/api/companion", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["tone"], "loneliness");
    assert_eq!(first["ageGroup"], "teen");
    assert_eq!(first["reply"]["role"], "assistant");

    let (_, second) = send(&app, "POST", "/api/companion", Some(body)).await;
    assert_eq!(first["reply"]["content"], second["reply"]["content"]);
}

#[tokio::test]
async fn companion_flags_crisis_language() {
    let app = test_app(Config::default());

    let (status, body) = send(
        &app,
        "POST",
        "/api/companion",
        Some(json!({ "message": "I keep thinking about self harm", "age": 22, "history": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crisis"], true);
    assert_eq!(body["crisisSupport"]["regions"][0]["region"], "us");

    let (_, body) = send(
        &app,
        "POST",
        "/api/companion",
        Some(json!({ "message": "Work was busy today", "age": 22 })),
    )
    .await;
    assert_eq!(body["crisis"], false);
    assert!(body.get("crisisSupport").is_none());
}

// --- Mood & gamification ---

#[tokio::test]
async fn mood_check_in_updates_stats_and_summary() {
    let app = test_app(Config::default());

    let (status, body) = send(&app, "POST", "/api/mood", Some(json!({ "mood": 7 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["mood"], 7);
    assert_eq!(body["stats"]["streak"], 1);
    assert_eq!(body["stats"]["totalCheckIns"], 1);
    assert_eq!(body["stats"]["badges"], json!(["first-step"]));

    let (_, body) = send(&app, "POST", "/api/mood", Some(json!({ "mood": 9 }))).await;
    assert_eq!(body["stats"]["streak"], 1);
    assert_eq!(body["stats"]["totalCheckIns"], 2);

    let (_, history) = send(&app, "GET", "/api/mood", None).await;
    assert_eq!(history.as_array().unwrap().len(), 2);

    let (status, summary) = send(&app, "GET", "/api/mood/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    let days = summary["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[6]["average"], 8.0);
    assert_eq!(days[6]["entries"], 2);
    assert_eq!(summary["streak"], 1);
    assert_eq!(summary["trend"], 0.0);
    assert_eq!(summary["bestDay"]["average"], 8.0);

    let (_, board) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(board["stats"]["totalCheckIns"], 2);
    assert_eq!(board["earned"].as_array().unwrap().len(), 1);
    assert_eq!(board["earned"][0]["id"], "first-step");
    assert_eq!(board["locked"].as_array().unwrap().len(), 7);
    assert!((board["checkInProgress"].as_f64().unwrap() - 4.0).abs() < 1e-9);
}

#[tokio::test]
async fn mood_outside_range_is_rejected() {
    let app = test_app(Config::default());
    let (status, body) = send(&app, "POST", "/api/mood", Some(json!({ "mood": 11 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Mood must be between 0 and 10");

    let (_, history) = send(&app, "GET", "/api/mood", None).await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn fresh_state_has_default_stats() {
    let app = test_app(Config::default());
    let (_, board) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(board["stats"]["streak"], 0);
    assert_eq!(board["stats"]["badges"], json!(["first-step"]));

    let (_, summary) = send(&app, "GET", "/api/mood/summary", None).await;
    assert_eq!(summary["streak"], 0);
    assert_eq!(summary["trend"], 0.0);
    assert_eq!(summary["bestDay"], Value::Null);
}

#[tokio::test]
async fn mood_analysis_classifies_text() {
    let app = test_app(Config::default());

    let (status, body) = send(
        &app,
        "POST",
        "/api/mood/analyze",
        Some(json!({ "text": "I'm so stressed about exams", "age": 17 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // "stressed" is also an anxious keyword, and anxious is checked first.
    assert_eq!(body["emotion"], "anxious");
    assert_eq!(body["lifeStage"], "adolescent");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
    assert_eq!(body["stressFactors"].as_array().unwrap().len(), 6);

    let (_, body) = send(
        &app,
        "POST",
        "/api/mood/analyze",
        Some(json!({ "text": "Nothing much today" })),
    )
    .await;
    assert_eq!(body["emotion"], "calm");
    assert_eq!(body["lifeStage"], "early-adult");

    let (status, _) = send(&app, "POST", "/api/mood/analyze", Some(json!({ "text": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// --- Journal ---

#[tokio::test]
async fn journal_entries_are_listed_newest_first() {
    let app = test_app(Config::default());

    let (status, _) = send(
        &app,
        "POST",
        "/api/journal",
        Some(json!({ "mood": "happy", "content": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for (mood, content) in [("happy", "Good walk"), ("anxious", "Big meeting"), ("happy", "Called mom")] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/journal",
            Some(json!({ "mood": mood, "content": content })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["entry"]["content"], content);
    }

    let (_, entries) = send(&app, "GET", "/api/journal", None).await;
    let contents: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["Called mom", "Big meeting", "Good walk"]);

    let (_, counts) = send(&app, "GET", "/api/journal/stats", None).await;
    assert_eq!(counts, json!({ "happy": 2, "neutral": 0, "sad": 0, "anxious": 1 }));
}

#[tokio::test]
async fn tenth_journal_entry_unlocks_journal_keeper() {
    let app = test_app(Config::default());
    let mut last = Value::Null;
    for i in 0..10 {
        let (_, body) = send(
            &app,
            "POST",
            "/api/journal",
            Some(json!({ "mood": "neutral", "content": format!("Entry {i}") })),
        )
        .await;
        last = body;
    }
    let badges = last["stats"]["badges"].as_array().unwrap();
    assert!(badges.contains(&json!("journal-keeper")));
}

// --- Emotion detection ---

#[tokio::test]
async fn detect_classifies_a_frame() {
    let app = test_app(Config::default());

    let (status, body) = send(
        &app,
        "POST",
        "/api/emotion/detect",
        Some(json!({ "expressions": { "happy": 0.9, "neutral": 0.1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emotion"], "Happy");
    assert!((body["confidence"].as_f64().unwrap() - 90.0).abs() < 1e-9);
    assert_eq!(body["emoji"], "😊");

    let (_, body) = send(
        &app,
        "POST",
        "/api/emotion/detect",
        Some(json!({ "expressions": { "fearful": 0.6, "surprised": 0.4 } })),
    )
    .await;
    assert_eq!(body["emotion"], "Anxious");
    assert!((body["confidence"].as_f64().unwrap() - 80.0).abs() < 1e-9);
}

#[tokio::test]
async fn detect_rejects_missing_or_invalid_scores() {
    let app = test_app(Config::default());

    let (status, body) = send(&app, "POST", "/api/emotion/detect", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No face detected");

    let (status, _) = send(
        &app,
        "POST",
        "/api/emotion/detect",
        Some(json!({ "expressions": { "happy": 1.5 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn detection_session_lifecycle() {
    let app = test_app(Config {
        detection_interval_secs: 1,
        ..Config::default()
    });

    let (_, status) = send(&app, "POST", "/api/emotion/session/start", None).await;
    assert_eq!(status["active"], true);

    let (code, _) = send(
        &app,
        "POST",
        "/api/emotion/session/frame",
        Some(json!({ "expressions": { "sad": 0.8 } })),
    )
    .await;
    assert_eq!(code, StatusCode::ACCEPTED);

    let mut detected = Value::Null;
    for _ in 0..40 {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        let (_, status) = send(&app, "GET", "/api/emotion/session", None).await;
        if !status["result"].is_null() {
            detected = status;
            break;
        }
    }
    assert_eq!(detected["active"], false);
    assert_eq!(detected["result"]["emotion"], "Sad");

    let (_, stopped) = send(&app, "POST", "/api/emotion/session/stop", None).await;
    assert_eq!(stopped, json!({ "active": false, "result": null }));
}

// --- Profile, theme, content ---

#[tokio::test]
async fn profile_onboarding_rules() {
    let app = test_app(Config::default());

    let (status, _) = send(&app, "GET", "/api/profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let adult = json!({
        "name": "Asha",
        "email": "asha@example.com",
        "phone": "5550100",
        "age": 30,
        "trustedContact": "5550100"
    });
    let (status, body) = send(&app, "PUT", "/api/profile", Some(adult.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Trusted contact number must be different"));

    let mut fixed = adult;
    fixed["trustedContact"] = json!("5550111");
    let (status, body) = send(&app, "PUT", "/api/profile", Some(fixed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lifeStage"], "early-adult");
    assert_eq!(body["isMinor"], false);

    let (status, body) = send(&app, "GET", "/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["trustedContact"], "5550111");
    assert!(body["profile"].get("pronouns").is_none());

    let (status, _) = send(&app, "DELETE", "/api/profile", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", "/api/profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_keeps_optional_pronouns() {
    let app = test_app(Config::default());
    let profile = json!({
        "name": "Sam",
        "email": "sam@example.com",
        "phone": "5550100",
        "age": 34,
        "pronouns": "They/Them"
    });

    let (status, body) = send(&app, "PUT", "/api/profile", Some(profile)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["pronouns"], "They/Them");

    let (_, body) = send(&app, "GET", "/api/profile", None).await;
    assert_eq!(body["profile"]["pronouns"], "They/Them");
}

#[tokio::test]
async fn problems_follow_the_age_buckets() {
    let app = test_app(Config::default());

    let (status, body) = send(&app, "GET", "/api/problems?age=17", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["audience"], "teen");
    assert_eq!(body["categories"].as_array().unwrap().len(), 8);
    assert_eq!(body["categories"][0]["id"], "academic");

    let (_, body) = send(&app, "GET", "/api/problems?age=50", None).await;
    assert_eq!(body["audience"], "senior");

    // No age and no profile.
    let (_, body) = send(&app, "GET", "/api/problems", None).await;
    assert_eq!(body["audience"], "young_adult");

    let profile = json!({ "name": "Lee", "email": "lee@example.com", "phone": "5550100", "age": 40 });
    send(&app, "PUT", "/api/profile", Some(profile)).await;
    let (_, body) = send(&app, "GET", "/api/problems", None).await;
    assert_eq!(body["audience"], "professional");

    let (status, body) = send(&app, "GET", "/api/problems?age=old", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn theme_defaults_and_persists() {
    let app = test_app(Config::default());

    let (_, theme) = send(&app, "GET", "/api/theme", None).await;
    assert_eq!(theme, json!({ "from": "#00A8D6", "to": "#7AD68A" }));

    let (status, _) = send(
        &app,
        "PUT",
        "/api/theme",
        Some(json!({ "from": "#fa709a", "to": "#fee140" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, theme) = send(&app, "GET", "/api/theme", None).await;
    assert_eq!(theme, json!({ "from": "#fa709a", "to": "#fee140" }));

    let (_, presets) = send(&app, "GET", "/api/theme/presets", None).await;
    assert_eq!(presets.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn static_content_is_served() {
    let app = test_app(Config::default());

    let (_, quote) = send(&app, "GET", "/api/resources/quote", None).await;
    assert!(quote["quote"]["text"].is_string());

    let (_, tips) = send(&app, "GET", "/api/resources/tips", None).await;
    assert_eq!(tips["tips"].as_array().unwrap().len(), 8);

    let (_, crisis) = send(&app, "GET", "/api/resources/crisis", None).await;
    assert!(crisis["emergencyNotice"].as_str().unwrap().contains("112 in India"));
    assert_eq!(crisis["regions"].as_array().unwrap().len(), 3);

    let (_, anxious) = send(&app, "GET", "/api/resources/mood/anxious", None).await;
    assert_eq!(anxious["articles"].as_array().unwrap().len(), 2);
    assert_eq!(anxious["meditations"].as_array().unwrap().len(), 1);
    assert_eq!(anxious["breathingExercises"].as_array().unwrap().len(), 2);

    let (_, unknown) = send(&app, "GET", "/api/resources/mood/bored", None).await;
    assert_eq!(unknown["meditations"][0]["title"], "Gratitude Meditation");
}
