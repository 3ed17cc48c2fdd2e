mod api;
mod config;
mod content;
mod live;
mod pagination;
mod routes;
mod services;
mod shape;
mod state;
mod views;

#[cfg(test)]
mod test_helpers;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    let api = api::LeagueApi::new(&config.api_base_url, config.timeouts).expect("league API client init failed");
    let port = config.port;
    let tick = Duration::from_millis(config.live_tick_ms);
    let state = state::AppState::new(config, api);

    // Spawn background scoreboard task.
    let _scoreboard = services::scoreboard::spawn_scoreboard_task(state.live.clone(), tick);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "league site listening");
    axum::serve(listener, app).await.expect("server failed");
}
