//! League API client — read-only accessors over the upstream REST API.
//!
//! DESIGN
//! ======
//! One `reqwest::Client` shared by every page handler. Each accessor issues a
//! single GET, unwraps the `{"data": ...}` envelope, and returns display
//! records. Envelope parsing lives in `parse_envelope` for testability.
//!
//! ERROR HANDLING
//! ==============
//! `get_data` returns a typed [`ApiError`]. The public accessors log it and
//! collapse it to an empty result (`Vec::new()` / `None`) so a failed section
//! renders its placeholder while the rest of the page renders normally.
//! Entity lookups (`team`, `match_by_id`, `player`) return a [`Lookup`]
//! instead, keeping an upstream 404 apart from every other failure so the
//! page can answer 404 only for records that really do not exist.
//! Nothing is retried.

pub mod types;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::ApiTimeouts;
use types::{
    ApiError, LineupEntry, Lookup, Match, NewsItem, Partner, Player, PlayerStats, Season, SquadPayload, StandingRow, Team,
    TeamStats,
};

/// Upper bound on news items pulled per request; paging happens locally.
pub const NEWS_FETCH_LIMIT: usize = 100;

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct LeagueApi {
    http: reqwest::Client,
    base_url: String,
}

impl LeagueApi {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: &str, timeouts: ApiTimeouts) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Issue one GET and unwrap the envelope.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or a
    /// body that is not an envelope around `T`.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        parse_envelope(&text)
    }

    async fn list<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Vec<T> {
        match self.get_data::<Option<Vec<T>>>(path, query).await {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                log_failure(path, &e);
                Vec::new()
            }
        }
    }

    async fn one<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.get_data::<Option<T>>(path, &[]).await {
            Ok(item) => item,
            Err(e) => {
                log_failure(path, &e);
                None
            }
        }
    }

    async fn lookup<T: DeserializeOwned>(&self, path: &str) -> Lookup<T> {
        let result = self.get_data::<Option<T>>(path, &[]).await;
        if let Err(e) = &result {
            log_failure(path, e);
        }
        Lookup::from(result)
    }

    // -------------------------------------------------------------------------
    // accessors
    // -------------------------------------------------------------------------

    pub async fn seasons(&self) -> Vec<Season> {
        self.list("/seasons", &[]).await
    }

    pub async fn teams(&self) -> Vec<Team> {
        self.list("/teams", &[]).await
    }

    pub async fn team(&self, slug: &str) -> Lookup<Team> {
        self.lookup(&format!("/teams/{}", path_segment(slug))).await
    }

    pub async fn matches(&self) -> Vec<Match> {
        self.list("/matches", &[]).await
    }

    pub async fn match_by_id(&self, id: i64) -> Lookup<Match> {
        self.lookup(&format!("/matches/{id}")).await
    }

    pub async fn lineup_stats(&self, match_id: i64) -> Vec<LineupEntry> {
        self.list(&format!("/matches/{match_id}/lineup-stats"), &[]).await
    }

    pub async fn standings(&self) -> Vec<StandingRow> {
        self.list("/standings", &[]).await
    }

    pub async fn squad(&self, team_slug: &str, season_id: i64) -> Vec<Player> {
        let path = format!("/teams/{}/squads/{season_id}", path_segment(team_slug));
        self.one::<SquadPayload>(&path)
            .await
            .map(SquadPayload::into_players)
            .unwrap_or_default()
    }

    pub async fn team_stats(&self, team_slug: &str) -> Option<TeamStats> {
        self.one(&format!("/teams/{}/stats", path_segment(team_slug))).await
    }

    pub async fn player(&self, slug: &str) -> Lookup<Player> {
        self.lookup(&format!("/players/{}", path_segment(slug))).await
    }

    pub async fn player_stats(&self, slug: &str) -> Option<PlayerStats> {
        self.one(&format!("/players/{}/stats", path_segment(slug))).await
    }

    pub async fn news(&self, page: usize, per_page: usize) -> Vec<NewsItem> {
        self.list("/news", &[("page", page.to_string()), ("per_page", per_page.to_string())])
            .await
    }

    pub async fn partners(&self) -> Vec<Partner> {
        self.list("/partners", &[]).await
    }
}

fn log_failure(path: &str, e: &ApiError) {
    if e.is_not_found() {
        tracing::debug!(path, "league API resource not found");
    } else {
        tracing::warn!(path, code = e.error_code(), error = %e, "league API request failed");
    }
}

/// Slugs come from browser paths; keep them to a single path segment.
fn path_segment(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}

// =============================================================================
// PARSING
// =============================================================================

/// Unwrap a `{"data": ...}` body.
///
/// A `null` data member is passed through to `T` (so `Option<T>` callers see
/// `None`); a body without a `data` member is [`ApiError::MissingEnvelope`].
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body is not JSON or `data` does not have
/// the shape of `T`.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let mut value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    let data = value
        .as_object_mut()
        .and_then(|o| o.remove("data"))
        .ok_or(ApiError::MissingEnvelope)?;
    serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
