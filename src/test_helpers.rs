//! Shared test fixtures: an in-process mock league API and server spawning.

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::api::LeagueApi;
use crate::config::SiteConfig;
use crate::state::AppState;

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

/// App state wired to an upstream at `base_url`.
pub fn state_for(base_url: &str) -> AppState {
    let config = SiteConfig::with_base_url(base_url);
    let api = LeagueApi::new(&config.api_base_url, config.timeouts).expect("client builds");
    AppState::new(config, api)
}

/// Upstream whose every endpoint fails: error statuses and non-envelope
/// bodies, never a 404 for the routed paths.
pub fn broken_upstream() -> Router {
    Router::new()
        .route("/seasons", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/teams", get(|| async { "not json" }))
        .route("/matches", get(|| async { Json(json!({ "items": [] })) }))
        .route("/standings", get(|| async { Json(json!({ "data": "nope" })) }))
        .route("/news", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route("/partners", get(|| async { Json(json!({ "data": null })) }))
        .route("/teams/{slug}", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/matches/{id}", get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }))
        .route("/players/{slug}", get(|| async { Json(json!({ "name": "no envelope" })) }))
}

fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "data": data }))
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "data": null, "error": "not found" })))
}

fn team_ref(id: i64, name: &str, slug: &str, short: &str) -> Value {
    json!({ "id": id, "name": name, "slug": slug, "short_name": short })
}

pub fn fixture_teams() -> Value {
    json!([
        {
            "id": 1, "name": "Patna Pirates", "slug": "patna-pirates", "short_name": "PAT",
            "city": "Patna", "home_ground": "Patliputra Sports Complex", "captain": "Sachin", "coach": "Narender Redhu"
        },
        {
            "id": 2, "name": "U Mumba", "slug": "u-mumba", "short_name": "MUM",
            "city": "Mumbai", "captain": "Sunil Kumar"
        },
        { "id": 3, "name": "Bengal Warriors", "slug": "bengal-warriors", "short_name": "BEN" }
    ])
}

pub fn fixture_matches() -> Value {
    let pat = team_ref(1, "Patna Pirates", "patna-pirates", "PAT");
    let mum = team_ref(2, "U Mumba", "u-mumba", "MUM");
    let ben = team_ref(3, "Bengal Warriors", "bengal-warriors", "BEN");
    json!([
        {
            "id": 10, "match_number": 1, "match_type": "League", "date": "2024-10-18T19:30:00Z",
            "venue": "Gachibowli", "home_team": pat, "away_team": mum,
            "home_score": 41, "away_score": 33, "is_finished": true
        },
        {
            "id": 11, "match_number": 2, "match_type": "League", "date": "2024-10-19T19:30:00Z",
            "home_team": mum, "away_team": ben, "home_score": 30, "away_score": 30, "is_finished": true
        },
        {
            "id": 12, "match_number": 3, "match_type": "Final", "date": "2024-12-29T20:00:00Z",
            "home_team": pat, "away_team": ben
        }
    ])
}

fn fixture_news(count: usize) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Story {i}"),
                "summary": format!("Summary {i}"),
                "published_at": format!("2024-10-{:02}T10:00:00Z", i.min(28)),
            })
        })
        .collect();
    Value::Array(items)
}

/// Upstream serving a small, consistent league.
pub fn fixture_upstream() -> Router {
    Router::new()
        .route(
            "/seasons",
            get(|| async { envelope(json!([{ "id": 10, "name": "Season 10" }, { "id": 11, "name": "Season 11" }])) }),
        )
        .route("/teams", get(|| async { envelope(fixture_teams()) }))
        .route("/teams/{slug}", get(team_handler))
        .route("/teams/{slug}/stats", get(team_stats_handler))
        .route("/teams/{slug}/squads/{season}", get(squad_handler))
        .route("/matches", get(|| async { envelope(fixture_matches()) }))
        .route("/matches/{id}", get(match_handler))
        .route("/matches/{id}/lineup-stats", get(lineup_handler))
        .route(
            "/standings",
            get(|| async {
                envelope(json!([
                    { "team": team_ref(2, "U Mumba", "u-mumba", "MUM"), "played": 2, "won": 0, "drawn": 1, "lost": 1, "points": 3 },
                    { "team": team_ref(1, "Patna Pirates", "patna-pirates", "PAT"), "played": 1, "won": 1, "points": 5 },
                    { "team": team_ref(3, "Bengal Warriors", "bengal-warriors", "BEN"), "played": 1, "drawn": 1, "points": 3 }
                ]))
            }),
        )
        .route("/players/{slug}", get(player_handler))
        .route("/players/{slug}/stats", get(player_stats_handler))
        .route("/news", get(|| async { envelope(fixture_news(20)) }))
        .route(
            "/partners",
            get(|| async { envelope(json!([{ "id": 1, "name": "Dream11", "tier": "Title" }])) }),
        )
}

async fn team_handler(Path(slug): Path<String>) -> impl IntoResponse {
    let teams = fixture_teams();
    let found = teams
        .as_array()
        .and_then(|teams| teams.iter().find(|t| t["slug"] == slug.as_str()).cloned());
    match found {
        Some(team) => envelope(team).into_response(),
        None => not_found().into_response(),
    }
}

async fn team_stats_handler(Path(slug): Path<String>) -> impl IntoResponse {
    if slug == "patna-pirates" {
        envelope(json!({
            "matches_played": 1, "wins": 1, "raid_points": 25, "tackle_points": 12,
            "total_raids": 40, "successful_raids": 22, "total_tackles": 30, "successful_tackles": 12
        }))
        .into_response()
    } else {
        not_found().into_response()
    }
}

async fn squad_handler(Path((slug, season)): Path<(String, i64)>) -> impl IntoResponse {
    if slug == "patna-pirates" && season == 11 {
        envelope(json!({
            "season_id": 11,
            "players": [
                { "id": 100, "name": "Devank Dalal", "slug": "devank-dalal", "position": "Raider", "jersey_number": 7 },
                { "id": 101, "name": "Ankit Jaglan", "slug": "ankit-jaglan", "position": "Defender" }
            ]
        }))
        .into_response()
    } else {
        envelope(json!([])).into_response()
    }
}

async fn match_handler(Path(id): Path<i64>) -> impl IntoResponse {
    let matches = fixture_matches();
    let found = matches
        .as_array()
        .and_then(|ms| ms.iter().find(|m| m["id"] == id).cloned());
    match found {
        Some(m) => envelope(m).into_response(),
        None => not_found().into_response(),
    }
}

async fn lineup_handler(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 10 {
        envelope(json!([
            { "player_name": "Devank Dalal", "player_slug": "devank-dalal", "team_id": 1, "role": "Raider",
              "is_starter": true, "raid_points": 14, "tackle_points": 0, "bonus_points": 2, "total_points": 16 },
            { "player_name": "Sunil Kumar", "team_id": 2, "role": "Defender",
              "is_starter": true, "raid_points": 0, "tackle_points": 4, "total_points": 4 }
        ]))
        .into_response()
    } else {
        envelope(json!([])).into_response()
    }
}

async fn player_handler(Path(slug): Path<String>) -> impl IntoResponse {
    if slug == "devank-dalal" {
        envelope(json!({
            "id": 100, "name": "Devank Dalal", "slug": "devank-dalal", "position": "Raider",
            "jersey_number": 7, "nationality": "India",
            "team": team_ref(1, "Patna Pirates", "patna-pirates", "PAT")
        }))
        .into_response()
    } else {
        not_found().into_response()
    }
}

async fn player_stats_handler(Path(slug): Path<String>) -> impl IntoResponse {
    if slug == "devank-dalal" {
        envelope(json!({
            "matches_played": 24, "total_points": 301, "raid_points": 280, "tackle_points": 21,
            "total_raids": 400, "successful_raids": 200, "super_tens": 15
        }))
        .into_response()
    } else {
        not_found().into_response()
    }
}
