//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser pages are server-rendered HTML under `/`; the only JSON surface is
//! the live scoreboard snapshot. Every page handler fetches from the league
//! API through `AppState::api`, so a failed upstream degrades a section to
//! its empty state instead of failing the request.

pub mod pages;
pub mod prefs;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::scoreboard;
use crate::state::AppState;

const STYLESHEET: &str = include_str!("../../static/site.css");

/// Machine-facing routes: liveness and the scoreboard feed.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/live", get(live_snapshot))
        .route("/healthz", get(healthz))
        .layer(cors)
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/schedule", get(pages::schedule))
        .route("/matches/{id}", get(pages::match_detail))
        .route("/teams", get(pages::teams))
        .route("/teams/{slug}", get(pages::team_detail))
        .route("/players/{slug}", get(pages::player))
        .route("/standings", get(pages::standings))
        .route("/news", get(pages::news))
        .route("/about", get(pages::about))
        .route("/videos", get(pages::videos))
        .route("/preferences/theme", post(prefs::toggle_theme))
        .route("/static/site.css", get(stylesheet))
        .merge(api_routes())
        .fallback(pages::fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/live` — current scoreboard snapshot.
async fn live_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    Json(scoreboard::snapshot(&state.live).await)
}

async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
