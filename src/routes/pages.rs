//! HTML page handlers.
//!
//! Each handler fetches what its page needs (concurrently where there is more
//! than one read), shapes it with `crate::shape`, and renders it inside the
//! site shell. Upstream failures have already been collapsed to empty values
//! by `LeagueApi`; the only non-200 outcome is 404 for an unknown team,
//! player, match, or path. An entity lookup that failed for any other reason
//! renders an "unavailable" placeholder with 200.

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;
use serde::Deserialize;

use super::prefs::theme_from;
use crate::api::NEWS_FETCH_LIMIT;
use crate::api::types::Lookup;
use crate::content;
use crate::pagination::{paginate, parse_page};
use crate::services::scoreboard;
use crate::shape::latest_season;
use crate::shape::matches::{ScheduleFilter, sort_matches, team_form, upcoming};
use crate::shape::news::sort_news;
use crate::shape::standings::sort_standings;
use crate::state::AppState;
use crate::views::pages::about::{AboutPage, VideosPage};
use crate::views::pages::home::{HomeData, HomePage};
use crate::views::pages::match_detail::{MatchDetailData, MatchDetailPage};
use crate::views::pages::news::NewsPage;
use crate::views::pages::not_found::{NotFoundPage, UnavailablePage};
use crate::views::pages::player::{PlayerData, PlayerPage};
use crate::views::pages::schedule::{ScheduleData, SchedulePage};
use crate::views::pages::standings::StandingsPage;
use crate::views::pages::teams::{TeamDetailData, TeamDetailPage, TeamsPage};
use crate::views::{Chrome, Nav, render_page};

const HOME_STANDINGS_ROWS: usize = 5;
const HOME_UPCOMING: usize = 4;
const HOME_NEWS: usize = 3;
const FORM_LENGTH: usize = 5;

// =============================================================================
// SHARED
// =============================================================================

/// Per-request page context: theme from the cookie, partners for the footer.
struct PageContext<'a> {
    state: &'a AppState,
    jar: &'a CookieJar,
    uri: &'a Uri,
}

impl PageContext<'_> {
    async fn chrome(&self, active: Nav) -> Chrome {
        Chrome {
            site_name: self.state.config.site_name.clone(),
            theme: theme_from(self.jar),
            active,
            path: self.uri.path_and_query().map_or_else(|| "/".to_owned(), |pq| pq.as_str().to_owned()),
            partners: self.state.api.partners().await,
        }
    }
}

fn page<V: IntoView + 'static>(chrome: Chrome, title: &str, body: V) -> Response {
    Html(render_page(chrome, title, body)).into_response()
}

fn not_found(chrome: Chrome, what: &str) -> Response {
    let what = what.to_owned();
    let title = format!("{what} not found");
    let html = render_page(chrome, &title, view! { <NotFoundPage what=what/> });
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

fn unavailable(chrome: Chrome, what: &str) -> Response {
    let what = what.to_owned();
    let title = format!("{what} unavailable");
    page(chrome, &title, view! { <UnavailablePage what=what/> })
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /`
pub async fn home(State(state): State<AppState>, jar: CookieJar, uri: Uri) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let (chrome, seasons, mut standings, matches, mut news, board) = tokio::join!(
        ctx.chrome(Nav::Home),
        state.api.seasons(),
        state.api.standings(),
        state.api.matches(),
        state.api.news(1, NEWS_FETCH_LIMIT),
        scoreboard::snapshot(&state.live),
    );

    sort_standings(&mut standings);
    standings.truncate(HOME_STANDINGS_ROWS);
    sort_news(&mut news);
    news.truncate(HOME_NEWS);
    let data = HomeData {
        season: latest_season(&seasons).cloned(),
        board,
        standings,
        upcoming: upcoming(&matches, HOME_UPCOMING),
        news,
    };
    page(chrome, "Home", view! { <HomePage data=data/> })
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    pub team: Option<String>,
    pub status: Option<String>,
}

/// `GET /schedule?team=&status=`
pub async fn schedule(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    Query(q): Query<ScheduleQuery>,
) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let (chrome, matches, teams) = tokio::join!(ctx.chrome(Nav::Schedule), state.api.matches(), state.api.teams());

    let filter = ScheduleFilter::new(q.team.as_deref(), q.status.as_deref());
    let mut matches = filter.apply(matches);
    sort_matches(&mut matches);
    let data = ScheduleData { matches, teams, filter };
    page(chrome, "Schedule", view! { <SchedulePage data=data/> })
}

/// `GET /matches/{id}` — the match and its lineup are fetched together.
pub async fn match_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    Path(id): Path<String>,
) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let Ok(id) = id.parse::<i64>() else {
        return not_found(ctx.chrome(Nav::Schedule).await, "Match");
    };
    let (chrome, found, lineup) =
        tokio::join!(ctx.chrome(Nav::Schedule), state.api.match_by_id(id), state.api.lineup_stats(id));

    let m = match found {
        Lookup::Found(m) => m,
        Lookup::Missing => return not_found(chrome, "Match"),
        Lookup::Failed => return unavailable(chrome, "Match"),
    };
    let title = format!("{} vs {}", m.home_team.label(), m.away_team.label());
    let data = MatchDetailData { m, lineup };
    page(chrome, &title, view! { <MatchDetailPage data=data/> })
}

/// `GET /teams`
pub async fn teams(State(state): State<AppState>, jar: CookieJar, uri: Uri) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let (chrome, mut teams) = tokio::join!(ctx.chrome(Nav::Teams), state.api.teams());
    teams.sort_by(|a, b| a.name.cmp(&b.name));
    page(chrome, "Teams", view! { <TeamsPage teams=teams/> })
}

/// `GET /teams/{slug}` — profile, stats, form, and the latest season's squad.
pub async fn team_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    Path(slug): Path<String>,
) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let (chrome, team, stats, seasons, matches) = tokio::join!(
        ctx.chrome(Nav::Teams),
        state.api.team(&slug),
        state.api.team_stats(&slug),
        state.api.seasons(),
        state.api.matches(),
    );
    let team = match team {
        Lookup::Found(team) => team,
        Lookup::Missing => return not_found(chrome, "Team"),
        Lookup::Failed => return unavailable(chrome, "Team"),
    };

    let season = latest_season(&seasons).cloned();
    let squad = match &season {
        Some(s) => state.api.squad(&team.slug, s.id).await,
        None => Vec::new(),
    };
    let form = team_form(&matches, team.id, FORM_LENGTH);
    let mut fixtures: Vec<_> = matches.into_iter().filter(|m| m.involves(&team.slug)).collect();
    sort_matches(&mut fixtures);

    let title = team.name.clone();
    let data = TeamDetailData { team, stats, season, squad, form, fixtures };
    page(chrome, &title, view! { <TeamDetailPage data=data/> })
}

/// `GET /players/{slug}`
pub async fn player(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    Path(slug): Path<String>,
) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let (chrome, player, stats) =
        tokio::join!(ctx.chrome(Nav::Detail), state.api.player(&slug), state.api.player_stats(&slug));
    let player = match player {
        Lookup::Found(player) => player,
        Lookup::Missing => return not_found(chrome, "Player"),
        Lookup::Failed => return unavailable(chrome, "Player"),
    };
    let title = player.name.clone();
    let data = PlayerData { player, stats };
    page(chrome, &title, view! { <PlayerPage data=data/> })
}

/// `GET /standings`
pub async fn standings(State(state): State<AppState>, jar: CookieJar, uri: Uri) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let (chrome, mut rows, seasons) =
        tokio::join!(ctx.chrome(Nav::Standings), state.api.standings(), state.api.seasons());
    sort_standings(&mut rows);
    let season = latest_season(&seasons).cloned();
    page(chrome, "Standings", view! { <StandingsPage rows=rows season=season/> })
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub page: Option<String>,
}

/// `GET /news?page=` — fetched in one batch, paginated locally.
pub async fn news(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    Query(q): Query<NewsQuery>,
) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let (chrome, mut items) = tokio::join!(ctx.chrome(Nav::News), state.api.news(1, NEWS_FETCH_LIMIT));
    sort_news(&mut items);
    let slice = paginate(items, parse_page(q.page.as_deref()), state.config.news_page_size);
    page(chrome, "News", view! { <NewsPage slice=slice/> })
}

/// `GET /about`
pub async fn about(State(state): State<AppState>, jar: CookieJar, uri: Uri) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let chrome = ctx.chrome(Nav::About).await;
    let site_name = state.config.site_name.clone();
    page(chrome, "About", view! { <AboutPage site_name=site_name/> })
}

#[derive(Debug, Default, Deserialize)]
pub struct VideosQuery {
    pub category: Option<String>,
}

/// `GET /videos?category=`
pub async fn videos(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    Query(q): Query<VideosQuery>,
) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    let chrome = ctx.chrome(Nav::Videos).await;
    let selected = q.category.filter(|c| !c.trim().is_empty());
    let videos = content::videos_in(selected.as_deref());
    let categories = content::video_categories();
    page(chrome, "Videos", view! { <VideosPage videos=videos categories=categories selected=selected/> })
}

/// Unknown paths.
pub async fn fallback(State(state): State<AppState>, jar: CookieJar, uri: Uri) -> Response {
    let ctx = PageContext { state: &state, jar: &jar, uri: &uri };
    not_found(ctx.chrome(Nav::Detail).await, "Page")
}
