use super::*;
use crate::config::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::test_helpers::{broken_upstream, fixture_upstream, spawn_router};

fn timeouts() -> ApiTimeouts {
    ApiTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
}

async fn fixture_client() -> LeagueApi {
    let base = spawn_router(fixture_upstream()).await;
    LeagueApi::new(&base, timeouts()).unwrap()
}

async fn broken_client() -> LeagueApi {
    let base = spawn_router(broken_upstream()).await;
    LeagueApi::new(&base, timeouts()).unwrap()
}

// =============================================================================
// parse_envelope
// =============================================================================

#[test]
fn parse_envelope_unwraps_data() {
    let seasons: Vec<Season> = parse_envelope(r#"{"data":[{"id":3,"name":"Season 3"}]}"#).unwrap();
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0].name, "Season 3");
}

#[test]
fn parse_envelope_null_data_is_none() {
    let team: Option<Team> = parse_envelope(r#"{"data":null}"#).unwrap();
    assert!(team.is_none());
}

#[test]
fn parse_envelope_without_data_member_is_missing_envelope() {
    let result = parse_envelope::<Vec<Season>>(r#"[{"id":1}]"#);
    assert!(matches!(result, Err(ApiError::MissingEnvelope)));
    let result = parse_envelope::<Vec<Season>>(r#"{"items":[]}"#);
    assert!(matches!(result, Err(ApiError::MissingEnvelope)));
}

#[test]
fn parse_envelope_rejects_wrong_shape_and_non_json() {
    assert!(matches!(parse_envelope::<Vec<Season>>(r#"{"data":"x"}"#), Err(ApiError::Parse(_))));
    assert!(matches!(parse_envelope::<Vec<Season>>("<html>"), Err(ApiError::Parse(_))));
}

#[test]
fn path_segment_strips_separators() {
    assert_eq!(path_segment("patna-pirates"), "patna-pirates");
    assert_eq!(path_segment("../admin?x=1"), "adminx1");
}

// =============================================================================
// accessors against the fixture upstream
// =============================================================================

#[tokio::test]
async fn list_accessors_return_records() {
    let api = fixture_client().await;
    assert_eq!(api.seasons().await.len(), 2);
    assert_eq!(api.teams().await.len(), 3);
    assert_eq!(api.matches().await.len(), 3);
    assert_eq!(api.standings().await.len(), 3);
    assert_eq!(api.news(1, NEWS_FETCH_LIMIT).await.len(), 20);
    assert_eq!(api.partners().await[0].name, "Dream11");
}

#[tokio::test]
async fn single_record_accessors_resolve_and_miss() {
    let api = fixture_client().await;
    let team = api.team("patna-pirates").await.found().expect("team exists");
    assert_eq!(team.coach.as_deref(), Some("Narender Redhu"));
    assert!(api.team("no-such-team").await.is_missing());

    let m = api.match_by_id(12).await.found().expect("match exists");
    assert_eq!(m.match_type.as_deref(), Some("Final"));
    assert!(api.match_by_id(999).await.is_missing());

    let player = api.player("devank-dalal").await.found().expect("player exists");
    assert_eq!(player.team.map(|t| t.slug), Some("patna-pirates".to_owned()));
    assert!(api.player_stats("nobody").await.is_none());
}

#[tokio::test]
async fn match_and_lineup_can_be_fetched_together() {
    let api = fixture_client().await;
    let (m, lineup) = tokio::join!(api.match_by_id(10), api.lineup_stats(10));
    assert_eq!(m.found().map(|m| m.home_score), Some(Some(41)));
    assert_eq!(lineup.len(), 2);
    assert_eq!(lineup[0].total_points, 16);
}

#[tokio::test]
async fn squad_accepts_wrapped_payload_and_empty_list() {
    let api = fixture_client().await;
    let squad = api.squad("patna-pirates", 11).await;
    assert_eq!(squad.len(), 2);
    assert!(api.squad("patna-pirates", 10).await.is_empty());
}

#[tokio::test]
async fn team_stats_present_for_known_team() {
    let api = fixture_client().await;
    let stats = api.team_stats("patna-pirates").await.expect("stats exist");
    assert_eq!(stats.successful_raids, 22);
    assert!(api.team_stats("u-mumba").await.is_none());
}

// =============================================================================
// failures collapse to empty
// =============================================================================

#[tokio::test]
async fn failed_responses_are_empty() {
    let api = broken_client().await;
    assert!(api.seasons().await.is_empty(), "500 status");
    assert!(api.teams().await.is_empty(), "non-JSON body");
    assert!(api.matches().await.is_empty(), "missing envelope");
    assert!(api.standings().await.is_empty(), "wrong data shape");
    assert!(api.news(1, 9).await.is_empty(), "503 status");
    assert!(api.partners().await.is_empty(), "null data");
    assert!(api.team("anything").await.is_failed(), "500 on an entity");
    assert!(api.match_by_id(1).await.is_failed(), "502 on an entity");
    assert!(api.player("anyone").await.is_failed(), "entity without envelope");
}

#[tokio::test]
async fn get_data_reports_status() {
    let api = broken_client().await;
    let err = api.get_data::<Vec<Season>>("/seasons", &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
}

#[tokio::test]
async fn unrouted_entity_is_missing_not_failed() {
    let base = spawn_router(axum::Router::new()).await;
    let api = LeagueApi::new(&base, timeouts()).unwrap();
    assert!(api.team("patna-pirates").await.is_missing());
}

#[tokio::test]
async fn unreachable_upstream_is_a_request_error() {
    // Bind then drop to obtain a port with nothing listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = LeagueApi::new(&format!("http://{addr}"), timeouts()).unwrap();
    let err = api.get_data::<Vec<Season>>("/seasons", &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
    assert!(api.seasons().await.is_empty());
    assert!(api.team("patna-pirates").await.is_failed());
}
