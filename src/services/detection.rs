//! Webcam detection session.
//!
//! The client runs the face model and pushes each frame's raw scores; while a
//! session is active the latest frame is sampled every period and aggregated.
//! The first successful detection ends the session.

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::models::emotion::{EmotionResult, FaceFrame, RawExpressions};
use crate::services::expression;
use crate::services::ticker::RepeatingTask;

#[async_trait]
pub trait ExpressionSource: Send + Sync {
    /// Scores for the current frame, or `None` when no face is visible.
    async fn sample(&self) -> Option<RawExpressions>;

    /// Forgets any frame captured so far. Called when a session starts or
    /// stops so a session only sees frames taken during it.
    async fn reset(&self) {}
}

/// Holds the most recent frame pushed by the client.
#[derive(Clone, Default)]
pub struct FrameBuffer {
    latest: Arc<Mutex<Option<RawExpressions>>>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, frame: FaceFrame) {
        *self.latest.lock().await = frame.expressions;
    }
}

#[async_trait]
impl ExpressionSource for FrameBuffer {
    async fn sample(&self) -> Option<RawExpressions> {
        *self.latest.lock().await
    }

    async fn reset(&self) {
        self.latest.lock().await.take();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    pub active: bool,
    pub result: Option<EmotionResult>,
}

#[derive(Default)]
struct SessionState {
    generation: u64,
    active: bool,
    result: Option<EmotionResult>,
    task: Option<RepeatingTask>,
}

impl SessionState {
    fn status(&self) -> SessionStatus {
        SessionStatus {
            active: self.active,
            result: self.result.clone(),
        }
    }
}

#[derive(Clone)]
pub struct EmotionDetector {
    source: Arc<dyn ExpressionSource>,
    period: Duration,
    state: Arc<Mutex<SessionState>>,
}

impl EmotionDetector {
    pub fn new(source: Arc<dyn ExpressionSource>, period: Duration) -> Self {
        Self {
            source,
            period,
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    /// Starts a new session, replacing (and cancelling) any running one.
    pub async fn start(&self) -> SessionStatus {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.active = true;
        state.result = None;
        self.source.reset().await;

        let generation = state.generation;
        let source = self.source.clone();
        let shared = Arc::downgrade(&self.state);

        state.task = Some(RepeatingTask::spawn(self.period, move || {
            let source = source.clone();
            let shared = shared.clone();
            async move { detect_once(source.as_ref(), &shared, generation).await }
        }));

        tracing::info!(generation, period_secs = self.period.as_secs(), "Detection session started");
        state.status()
    }

    /// Cancels the polling task and clears the last result.
    pub async fn stop(&self) -> SessionStatus {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.active = false;
        state.result = None;
        if let Some(task) = state.task.take() {
            task.cancel();
        }
        self.source.reset().await;
        tracing::info!("Detection session stopped");
        state.status()
    }

    pub async fn status(&self) -> SessionStatus {
        self.state.lock().await.status()
    }
}

async fn detect_once(
    source: &dyn ExpressionSource,
    shared: &Weak<Mutex<SessionState>>,
    generation: u64,
) -> ControlFlow<()> {
    let Some(session) = shared.upgrade() else {
        return ControlFlow::Break(());
    };

    let Some(expressions) = source.sample().await else {
        tracing::debug!(generation, "No face in frame");
        return ControlFlow::Continue(());
    };
    let result = expression::aggregate(&expressions);

    let mut state = session.lock().await;
    if state.generation != generation {
        return ControlFlow::Break(());
    }

    tracing::info!(
        emotion = ?result.emotion,
        confidence = result.confidence,
        "Emotion detected"
    );
    state.result = Some(result);
    // Stop after the first detection.
    state.active = false;
    ControlFlow::Break(())
}
