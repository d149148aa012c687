use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use calmmind_api::config::Config;
use calmmind_api::rate_limit;
use calmmind_api::store::FileStore;
use calmmind_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calmmind_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    let store = FileStore::open(&config.data_dir)
        .await
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;

    let addr = config.listen_addr();
    let state = AppState::new(config, Arc::new(store));

    rate_limit::spawn_cleanup_worker(state.rate_limiter.clone());

    let app = calmmind_api::app(state);

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    // Connect info gives the rate limiter the client address.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
