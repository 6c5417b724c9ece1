use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use prosper_center::config::AppConfig;
use prosper_center::routes;
use prosper_center::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("prosper_center=info,tower_http=info")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = Arc::new(AppState::from_config(&config));
    match &config.notify_url {
        Some(url) => tracing::info!(%url, "forwarding submissions to notification service"),
        None => tracing::info!(delay = ?config.notify_delay, "using stub notification sink"),
    }

    let sessions = state.sessions.clone();
    let interval = config.purge_interval.max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let removed = sessions.purge_expired().await;
            if removed > 0 {
                tracing::info!(removed, "purged idle chat sessions");
            }
        }
    });

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Prosper Center backend listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
