//! Match ordering, status labels, results, and schedule filtering.

use std::cmp::Reverse;

use crate::api::types::Match;

use super::parse_timestamp;

// =============================================================================
// TIERS
// =============================================================================

/// Competition stage, in display priority order: Final first, unrecognized
/// stages last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Final,
    SemiFinal,
    Eliminator,
    Qualifier,
    League,
    Other,
}

impl MatchTier {
    /// Classify a raw stage label. Case, spaces, hyphens, and a trailing
    /// number are ignored, so "Semi Final", "semi-final 2", and "SemiFinal"
    /// agree.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Other;
        };
        let key: String = raw
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.trim_end_matches(|c: char| c.is_ascii_digit()) {
            "final" | "grandfinal" => Self::Final,
            "semifinal" | "semifinals" | "semis" => Self::SemiFinal,
            k if k.starts_with("eliminator") => Self::Eliminator,
            k if k.starts_with("qualifier") => Self::Qualifier,
            "league" | "leaguestage" | "leaguematch" => Self::League,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn of(m: &Match) -> Self {
        Self::parse(m.match_type.as_deref())
    }
}

/// Order matches by tier (Final first), then by date, newest first. Matches
/// without a usable date sort after dated ones in the same tier.
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by_cached_key(|m| (MatchTier::of(m), Reverse(m.date.as_deref().and_then(parse_timestamp))));
}

/// Upcoming fixtures first-to-last by date, for "next up" widgets.
#[must_use]
pub fn upcoming(matches: &[Match], limit: usize) -> Vec<Match> {
    let mut pending: Vec<Match> = matches
        .iter()
        .filter(|m| MatchStatus::of(m) == MatchStatus::Upcoming)
        .cloned()
        .collect();
    pending.sort_by_cached_key(|m| {
        let ts = m.date.as_deref().and_then(parse_timestamp);
        (ts.is_none(), ts)
    });
    pending.truncate(limit);
    pending
}

// =============================================================================
// STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Upcoming,
    Live,
    Draw,
    Finished,
}

impl MatchStatus {
    /// Status label rules: a finished flag wins over scores; otherwise equal
    /// scores read as a draw and unequal scores as a live match. Without both
    /// scores the match has not started.
    #[must_use]
    pub fn of(m: &Match) -> Self {
        if m.is_finished {
            return Self::Finished;
        }
        match (m.home_score, m.away_score) {
            (Some(h), Some(a)) if h == a => Self::Draw,
            (Some(_), Some(_)) => Self::Live,
            _ => Self::Upcoming,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Live => "Live",
            Self::Draw => "Draw",
            Self::Finished => "Finished",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Upcoming => "status status--upcoming",
            Self::Live => "status status--live",
            Self::Draw => "status status--draw",
            Self::Finished => "status status--finished",
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLetter {
    Win,
    Loss,
    Draw,
}

impl ResultLetter {
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Self::Win => "W",
            Self::Loss => "L",
            Self::Draw => "D",
        }
    }
}

/// Result of a finished match from `team_id`'s side. `None` if the match is
/// unfinished, unscored, or the team did not play in it.
#[must_use]
pub fn result_letter(m: &Match, team_id: i64) -> Option<ResultLetter> {
    if !m.is_finished {
        return None;
    }
    let (home, away) = (m.home_score?, m.away_score?);
    let (ours, theirs) = if m.home_team.id == team_id {
        (home, away)
    } else if m.away_team.id == team_id {
        (away, home)
    } else {
        return None;
    };
    Some(match ours.cmp(&theirs) {
        std::cmp::Ordering::Greater => ResultLetter::Win,
        std::cmp::Ordering::Less => ResultLetter::Loss,
        std::cmp::Ordering::Equal => ResultLetter::Draw,
    })
}

/// The team's last `n` results, most recent first.
#[must_use]
pub fn team_form(matches: &[Match], team_id: i64, n: usize) -> Vec<ResultLetter> {
    let mut played: Vec<&Match> = matches.iter().filter(|m| result_letter(m, team_id).is_some()).collect();
    played.sort_by_cached_key(|m| Reverse(m.date.as_deref().and_then(parse_timestamp)));
    played
        .into_iter()
        .filter_map(|m| result_letter(m, team_id))
        .take(n)
        .collect()
}

// =============================================================================
// FILTERING
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Upcoming,
    /// In progress: live or level on scores.
    Live,
    Finished,
}

impl StatusFilter {
    /// Unknown or `all` values mean no status filter.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("upcoming") => Some(Self::Upcoming),
            Some("live") => Some(Self::Live),
            Some("finished" | "completed" | "results") => Some(Self::Finished),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Live => "live",
            Self::Finished => "finished",
        }
    }

    fn accepts(self, status: MatchStatus) -> bool {
        match self {
            Self::Upcoming => status == MatchStatus::Upcoming,
            Self::Live => matches!(status, MatchStatus::Live | MatchStatus::Draw),
            Self::Finished => status == MatchStatus::Finished,
        }
    }
}

/// Schedule dropdown selections. Empty selections filter nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub team: Option<String>,
    pub status: Option<StatusFilter>,
}

impl ScheduleFilter {
    #[must_use]
    pub fn new(team: Option<&str>, status: Option<&str>) -> Self {
        Self {
            team: team.map(str::trim).filter(|t| !t.is_empty() && *t != "all").map(str::to_owned),
            status: StatusFilter::parse(status),
        }
    }

    #[must_use]
    pub fn matches(&self, m: &Match) -> bool {
        let team_ok = self.team.as_deref().is_none_or(|slug| m.involves(slug));
        let status_ok = self.status.is_none_or(|s| s.accepts(MatchStatus::of(m)));
        team_ok && status_ok
    }

    #[must_use]
    pub fn apply(&self, matches: Vec<Match>) -> Vec<Match> {
        matches.into_iter().filter(|m| self.matches(m)).collect()
    }
}

#[cfg(test)]
#[path = "matches_test.rs"]
mod tests;
