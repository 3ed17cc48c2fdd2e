use super::*;
use crate::test_helpers::{broken_upstream, fixture_upstream, spawn_router, state_for};

async fn site(upstream: Router) -> String {
    let api = spawn_router(upstream).await;
    spawn_router(app(state_for(&api))).await
}

async fn get(base: &str, path: &str) -> (u16, String) {
    let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.text().await.unwrap())
}

fn no_redirects() -> reqwest::Client {
    reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build().unwrap()
}

// =============================================================================
// pages against the fixture league
// =============================================================================

#[tokio::test]
async fn home_shows_latest_season_table_and_widget() {
    let base = site(fixture_upstream()).await;
    let (status, body) = get(&base, "/").await;
    assert_eq!(status, 200);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Season 11"));
    assert!(!body.contains("Season 10<"));
    assert!(body.contains("Live demo"));
    assert!(body.contains("Patna Pirates"));
    assert!(body.contains("Dream11"), "partners render in the footer");
}

#[tokio::test]
async fn schedule_filters_by_team_and_status() {
    let base = site(fixture_upstream()).await;

    let (status, body) = get(&base, "/schedule").await;
    assert_eq!(status, 200);
    assert!(body.contains("/matches/10"));
    assert!(body.contains("/matches/11"));
    assert!(body.contains("/matches/12"));
    // Final ranks ahead of league fixtures.
    let final_at = body.find("/matches/12").unwrap();
    let league_at = body.find("/matches/10").unwrap();
    assert!(final_at < league_at);

    let (_, body) = get(&base, "/schedule?team=u-mumba").await;
    assert!(body.contains("/matches/10"));
    assert!(body.contains("/matches/11"));
    assert!(!body.contains("/matches/12"));

    let (_, body) = get(&base, "/schedule?status=upcoming").await;
    assert!(body.contains("/matches/12"));
    assert!(!body.contains("/matches/10"));

    let (_, body) = get(&base, "/schedule?team=nobody&status=bogus").await;
    assert!(body.contains("No matches"));
}

#[tokio::test]
async fn match_detail_renders_lineups() {
    let base = site(fixture_upstream()).await;
    let (status, body) = get(&base, "/matches/10").await;
    assert_eq!(status, 200);
    assert!(body.contains("Devank Dalal"));
    assert!(body.contains("Sunil Kumar"));
    assert!(body.contains("Finished"));
}

#[tokio::test]
async fn unknown_match_team_player_are_404() {
    let base = site(fixture_upstream()).await;
    for path in ["/matches/999", "/matches/not-a-number", "/teams/nobody", "/players/nobody", "/nowhere"] {
        let (status, body) = get(&base, path).await;
        assert_eq!(status, 404, "{path}");
        assert!(body.contains("not found"), "{path}");
    }
}

#[tokio::test]
async fn team_detail_shows_stats_form_and_squad() {
    let base = site(fixture_upstream()).await;
    let (status, body) = get(&base, "/teams/patna-pirates").await;
    assert_eq!(status, 200);
    assert!(body.contains("Patliputra Sports Complex"));
    assert!(body.contains("Squad: Season 11"));
    assert!(body.contains("Ankit Jaglan"));
    assert!(body.contains("/players/devank-dalal"));
    assert!(body.contains("22/40 (55.0%)"));
    assert!(body.contains("form--win"));
}

#[tokio::test]
async fn team_without_stats_or_squad_shows_empty_sections() {
    let base = site(fixture_upstream()).await;
    let (status, body) = get(&base, "/teams/bengal-warriors").await;
    assert_eq!(status, 200);
    assert!(body.contains("Statistics are not available"));
    assert!(body.contains("Squad has not been announced"));
}

#[tokio::test]
async fn player_page_shows_stats() {
    let base = site(fixture_upstream()).await;
    let (status, body) = get(&base, "/players/devank-dalal").await;
    assert_eq!(status, 200);
    assert!(body.contains("Devank Dalal"));
    assert!(body.contains("/teams/patna-pirates"));
    assert!(body.contains("200/400 (50.0%)"));
}

#[tokio::test]
async fn standings_sorted_by_points() {
    let base = site(fixture_upstream()).await;
    let (status, body) = get(&base, "/standings").await;
    assert_eq!(status, 200);
    let patna = body.find("/teams/patna-pirates").unwrap();
    let mumba = body.find("/teams/u-mumba").unwrap();
    assert!(patna < mumba);
    assert!(body.contains("Points by team"));
}

#[tokio::test]
async fn news_paginates_twenty_items_by_nine() {
    let base = site(fixture_upstream()).await;

    let (status, first) = get(&base, "/news").await;
    assert_eq!(status, 200);
    assert!(first.contains("Page 1 of 3"));
    assert!(first.contains("Story 20"), "newest first");
    assert!(first.contains("href=\"/news?page=3\""));
    assert!(!first.contains("href=\"/news?page=4\""));

    let (_, last) = get(&base, "/news?page=3").await;
    assert!(last.contains("Page 3 of 3"));
    assert!(last.contains("Story 1<"));
    assert!(!last.contains("Story 20"));

    let (status, beyond) = get(&base, "/news?page=99").await;
    assert_eq!(status, 200);
    assert!(beyond.contains("Page 3 of 3"));
}

#[tokio::test]
async fn static_pages_render() {
    let base = site(fixture_upstream()).await;
    let (status, about) = get(&base, "/about").await;
    assert_eq!(status, 200);
    assert!(about.contains("About Kabaddi League"));

    let (status, videos) = get(&base, "/videos?category=Explainers").await;
    assert_eq!(status, 200);
    assert!(videos.contains("How a raid works"));
    assert!(!videos.contains("Top 10 Super Raids"));
}

// =============================================================================
// degraded upstream
// =============================================================================

#[tokio::test]
async fn broken_upstream_renders_empty_states() {
    let base = site(broken_upstream()).await;
    for (path, needle) in [
        ("/", "The league is loading"),
        ("/schedule", "No matches"),
        ("/teams", "Teams are loading"),
        ("/standings", "Standings are not available"),
        ("/news", "No news yet"),
    ] {
        let (status, body) = get(&base, path).await;
        assert_eq!(status, 200, "{path}");
        assert!(body.contains(needle), "{path} should contain {needle:?}");
    }
}

#[tokio::test]
async fn failed_entity_lookups_are_unavailable_not_404() {
    let base = site(broken_upstream()).await;
    for (path, what) in [("/teams/patna-pirates", "Team"), ("/matches/10", "Match"), ("/players/devank-dalal", "Player")] {
        let (status, body) = get(&base, path).await;
        assert_eq!(status, 200, "{path}");
        assert!(body.contains(&format!("{what} details are temporarily unavailable")), "{path}");
        assert!(!body.contains("not found"), "{path}");
    }
}

// =============================================================================
// non-page routes
// =============================================================================

#[tokio::test]
async fn live_endpoint_returns_snapshot() {
    let base = site(fixture_upstream()).await;
    let body: serde_json::Value = reqwest::get(format!("{base}/api/live")).await.unwrap().json().await.unwrap();
    assert_eq!(body["home"]["on_mat"], 7);
    assert_eq!(body["finished"], false);
}

#[tokio::test]
async fn healthz_and_stylesheet() {
    let base = site(fixture_upstream()).await;
    let (status, _) = get(&base, "/healthz").await;
    assert_eq!(status, 200);

    let resp = reqwest::get(format!("{base}/static/site.css")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/css"));
}

#[tokio::test]
async fn theme_toggle_sets_cookie_and_redirects_back() {
    let base = site(fixture_upstream()).await;
    let resp = no_redirects()
        .post(format!("{base}/preferences/theme"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("return_to=%2Fnews%3Fpage%3D2")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers()[header::LOCATION], "/news?page=2");
    let cookie = resp.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("league_theme=dark"));

    let resp = no_redirects()
        .post(format!("{base}/preferences/theme"))
        .header(header::COOKIE, "league_theme=dark")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("return_to=https%3A%2F%2Fevil.example")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()[header::LOCATION], "/");
    let cookie = resp.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("league_theme=light"));
}

#[tokio::test]
async fn dark_theme_cookie_reaches_the_shell() {
    let base = site(fixture_upstream()).await;
    let body = reqwest::Client::new()
        .get(format!("{base}/about"))
        .header(header::COOKIE, "league_theme=dark")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("data-theme=\"dark\""));
    assert!(body.contains("Light mode"));
}
