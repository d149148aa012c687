use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::AppError;
use crate::AppState;

const WINDOW: Duration = Duration::from_secs(60);

/// Windows untouched for this long are dropped by the sweep.
const IDLE_AFTER: Duration = Duration::from_secs(120);

const SWEEP_EVERY: Duration = Duration::from_secs(300);

/// Per-client quota on the AI proxy. Each client gets a fixed one-minute
/// window that opens on its first call. In-memory, so limits are per process.
#[derive(Clone, Default)]
pub struct RateLimitState {
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    opened_at: Instant,
    used: u32,
}

impl Window {
    fn open(now: Instant) -> Self {
        Self {
            opened_at: now,
            used: 0,
        }
    }

    /// Spends one call from the quota, reopening the window once it has
    /// elapsed. On refusal returns the time until the window reopens.
    fn try_acquire(&mut self, now: Instant, quota: u32) -> Result<(), Duration> {
        let elapsed = now.duration_since(self.opened_at);
        if elapsed >= WINDOW {
            *self = Window::open(now);
        } else if self.used >= quota {
            return Err(WINDOW - elapsed);
        }
        self.used += 1;
        Ok(())
    }

    fn is_idle(&self, now: Instant) -> bool {
        now.duration_since(self.opened_at) >= IDLE_AFTER
    }
}

impl RateLimitState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, client: &str, quota: u32) -> Result<(), Duration> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        windows
            .entry(client.to_owned())
            .or_insert_with(|| Window::open(now))
            .try_acquire(now, quota)
    }

    /// Forgets idle clients and returns how many are still tracked.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        windows.retain(|_, window| !window.is_idle(now));
        windows.len()
    }
}

/// Spawns the periodic sweep of idle limiter windows.
pub fn spawn_cleanup_worker(limiter: RateLimitState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_EVERY);
        loop {
            ticker.tick().await;
            let tracked = limiter.sweep().await;
            tracing::debug!(tracked, "Rate limiter swept");
        }
    })
}

/// Guards the generative-AI endpoints. Requests without a peer address
/// (in-process callers) share one window.
pub async fn rate_limit_ai(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".into());
    let quota = state.config.ai_rate_limit_per_minute;

    if let Err(wait) = state.rate_limiter.acquire(&client, quota).await {
        // Round up so clients never retry a moment too early.
        let retry_after_secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
        tracing::warn!(
            client = %client,
            path = %req.uri().path(),
            retry_after_secs,
            "AI rate limit exceeded"
        );
        return Err(AppError::RateLimited { retry_after_secs });
    }

    Ok(next.run(req).await)
}
