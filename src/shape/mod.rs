//! Data-shaping helpers between API records and page markup.
//!
//! DESIGN
//! ======
//! Pure functions only: selection, ordering, and derived display values. Page
//! handlers call these after fetching and before rendering, so every rule the
//! pages depend on can be tested without HTTP.

pub mod matches;
pub mod news;
pub mod standings;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::api::types::Season;

/// The season with the highest id, or `None` when there are no seasons.
#[must_use]
pub fn latest_season(seasons: &[Season]) -> Option<&Season> {
    seasons.iter().max_by_key(|s| s.id)
}

/// `part` as a percentage of `whole`, clamped to `[0, 100]`. Zero when
/// `whole` is zero.
#[must_use]
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).clamp(0.0, 100.0)
}

/// One-decimal percentage label, e.g. `"55.0%"`.
#[must_use]
pub fn percentage_label(part: u32, whole: u32) -> String {
    format!("{:.1}%", percentage(part, whole))
}

/// Parse the timestamp formats the API emits: RFC 3339, naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` (taken as UTC), or a bare
/// date (midnight UTC).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    let naive_space = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let naive_t = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, naive_space).or_else(|_| PrimitiveDateTime::parse(raw, naive_t)) {
        return Some(dt.assume_utc());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}

/// Human date for cards and tables, e.g. `"18 Oct 2024"`. Unparseable input
/// is shown as-is; absent input as `"TBD"`.
#[must_use]
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return "TBD".to_owned();
    };
    parse_timestamp(raw)
        .and_then(|ts| ts.format(format_description!("[day] [month repr:short] [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Kick-off time when the timestamp carries one, e.g. `"19:30 UTC"`.
#[must_use]
pub fn display_time(raw: Option<&str>) -> Option<String> {
    let ts = parse_timestamp(raw?)?;
    if ts.hour() == 0 && ts.minute() == 0 {
        return None;
    }
    ts.format(format_description!("[hour]:[minute]"))
        .ok()
        .map(|t| format!("{t} UTC"))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
