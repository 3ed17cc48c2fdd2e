//! Standings ordering and chart scaling.

use crate::api::types::{LineupEntry, StandingRow};

use super::percentage;

/// Order rows by total points, highest first. The sort is stable, so rows
/// level on points keep the order the API gave them and re-sorting is a
/// no-op.
pub fn sort_standings(rows: &mut [StandingRow]) {
    rows.sort_by(|a, b| b.points.cmp(&a.points));
}

/// Bar width (percent of the leader's points) for the standings chart.
#[must_use]
pub fn points_bar_width(row: &StandingRow, rows: &[StandingRow]) -> f64 {
    let max = rows.iter().map(|r| r.points).max().unwrap_or(0);
    percentage(row.points, max)
}

/// Display position: the API's when present, otherwise the 1-based index.
#[must_use]
pub fn display_position(row: &StandingRow, index: usize) -> u32 {
    row.position
        .unwrap_or_else(|| u32::try_from(index + 1).unwrap_or(u32::MAX))
}

/// One side's lineup, top scorers first.
#[must_use]
pub fn lineup_for_team(entries: &[LineupEntry], team_id: i64) -> Vec<LineupEntry> {
    let mut side: Vec<LineupEntry> = entries.iter().filter(|e| e.team_id == team_id).cloned().collect();
    side.sort_by(|a, b| b.total_points.cmp(&a.total_points).then_with(|| b.is_starter.cmp(&a.is_starter)));
    side
}

#[cfg(test)]
#[path = "standings_test.rs"]
mod tests;
