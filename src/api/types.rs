//! League API records and errors.
//!
//! Records mirror the shapes the upstream API returns. Every struct is
//! `#[serde(default)]` so partially populated payloads still deserialize and
//! render; the site never writes these back.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by upstream API requests. Only used for logging: callers
/// collapse every variant to an empty result.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("API request failed: {0}")]
    Request(String),

    /// The API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16 },

    /// The body was not JSON of the expected shape.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// The body was JSON but carried no `data` member.
    #[error("API response missing data envelope")]
    MissingEnvelope,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_API_REQUEST",
            Self::Status { .. } => "E_API_STATUS",
            Self::Parse(_) => "E_API_PARSE",
            Self::MissingEnvelope => "E_API_ENVELOPE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether the upstream reported the resource as absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404 })
    }
}

/// Outcome of fetching one entity by key. Separates "the league has no such
/// record" from "the league could not be asked", which pages render
/// differently (404 versus an unavailable placeholder).
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    /// Upstream 404, or a `null` data member.
    Missing,
    /// Transport failure, non-404 error status, or an unreadable body.
    Failed,
}

impl<T> Lookup<T> {
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(item) => Some(item),
            Self::Missing | Self::Failed => None,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl<T> From<Result<Option<T>, ApiError>> for Lookup<T> {
    fn from(result: Result<Option<T>, ApiError>) -> Self {
        match result {
            Ok(Some(item)) => Self::Found(item),
            Ok(None) => Self::Missing,
            Err(e) if e.is_not_found() => Self::Missing,
            Err(_) => Self::Failed,
        }
    }
}

// =============================================================================
// SEASONS & TEAMS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Season {
    pub id: i64,
    pub name: String,
    pub year: Option<i32>,
}

/// Compact team reference embedded in matches, standings, and players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
}

impl TeamRef {
    /// Short label for tight table cells, falling back to the full name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.short_name.as_deref().filter(|s| !s.is_empty()).unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
    pub city: Option<String>,
    #[serde(alias = "venue")]
    pub home_ground: Option<String>,
    pub captain: Option<String>,
    pub coach: Option<String>,
    pub founded: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_scored: u32,
    pub points_conceded: u32,
    pub raid_points: u32,
    pub tackle_points: u32,
    pub all_outs_inflicted: u32,
    pub all_outs_conceded: u32,
    pub total_raids: u32,
    pub successful_raids: u32,
    pub total_tackles: u32,
    pub successful_tackles: u32,
}

// =============================================================================
// MATCHES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    pub id: i64,
    pub match_number: Option<u32>,
    #[serde(alias = "stage")]
    pub match_type: Option<String>,
    #[serde(alias = "match_date")]
    pub date: Option<String>,
    pub venue: Option<String>,
    pub season_id: Option<i64>,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    #[serde(alias = "finished")]
    pub is_finished: bool,
    pub summary: Option<String>,
}

impl Match {
    /// Whether `slug` names either side of this match.
    #[must_use]
    pub fn involves(&self, slug: &str) -> bool {
        self.home_team.slug == slug || self.away_team.slug == slug
    }
}

/// One player's line in a match's lineup statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupEntry {
    pub player_name: String,
    pub player_slug: Option<String>,
    pub team_id: i64,
    #[serde(alias = "position")]
    pub role: Option<String>,
    pub is_starter: bool,
    pub raid_points: u32,
    pub tackle_points: u32,
    pub bonus_points: u32,
    pub total_points: u32,
}

// =============================================================================
// STANDINGS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingRow {
    pub position: Option<u32>,
    pub team: TeamRef,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    #[serde(alias = "tied")]
    pub drawn: u32,
    pub score_difference: i32,
    pub points: u32,
}

// =============================================================================
// PLAYERS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(alias = "role")]
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
    pub date_of_birth: Option<String>,
    pub team: Option<TeamRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub matches_played: u32,
    pub total_points: u32,
    pub raid_points: u32,
    pub tackle_points: u32,
    pub total_raids: u32,
    pub successful_raids: u32,
    pub total_tackles: u32,
    pub successful_tackles: u32,
    pub super_raids: u32,
    pub super_tackles: u32,
    pub super_tens: u32,
    pub high_fives: u32,
    pub do_or_die_points: u32,
}

/// Squad payloads arrive either as a bare player list or wrapped with the
/// season they belong to.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SquadPayload {
    Players(Vec<Player>),
    Wrapped { players: Vec<Player> },
}

impl SquadPayload {
    #[must_use]
    pub fn into_players(self) -> Vec<Player> {
        match self {
            Self::Players(players) | Self::Wrapped { players } => players,
        }
    }
}

// =============================================================================
// NEWS & PARTNERS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "created_at")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub logo_url: Option<String>,
    #[serde(alias = "website")]
    pub website_url: Option<String>,
    pub tier: Option<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
