//! Match detail: scoreline and both sides' lineup statistics.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::api::types::{LineupEntry, Match, TeamRef};
use crate::shape::matches::MatchStatus;
use crate::shape::standings::lineup_for_team;
use crate::shape::{display_date, display_time};
use crate::views::components::{EmptyState, SplitBar, StatusBadge};

pub struct MatchDetailData {
    pub m: Match,
    pub lineup: Vec<LineupEntry>,
}

#[component]
pub fn MatchDetailPage(data: MatchDetailData) -> impl IntoView {
    let MatchDetailData { m, lineup } = data;
    let status = MatchStatus::of(&m);
    let home = lineup_for_team(&lineup, m.home_team.id);
    let away = lineup_for_team(&lineup, m.away_team.id);
    let raid = |side: &[LineupEntry]| side.iter().map(|e| e.raid_points).sum::<u32>();
    let tackle = |side: &[LineupEntry]| side.iter().map(|e| e.tackle_points).sum::<u32>();
    let comparison = (!lineup.is_empty()).then(|| {
        view! {
            <section class="comparison">
                <h2>"Points breakdown"</h2>
                <SplitBar left_label="Raid" left=raid(&home) right_label="Raid" right=raid(&away)/>
                <SplitBar left_label="Tackle" left=tackle(&home) right_label="Tackle" right=tackle(&away)/>
            </section>
        }
    });
    let when = match display_time(m.date.as_deref()) {
        Some(t) => format!("{} · {t}", display_date(m.date.as_deref())),
        None => display_date(m.date.as_deref()),
    };
    let score = |s: Option<u32>| s.map_or_else(|| "-".to_owned(), |s| s.to_string());

    view! {
        <section class="match-hero">
            <div class="match-hero__meta">
                {m.match_type.clone().map(|t| view! { <span class="match-card__stage">{t}</span> })}
                <StatusBadge status=status/>
                <span>{when}</span>
                {m.venue.clone().map(|v| view! { <span>{v}</span> })}
            </div>
            <div class="match-hero__score">
                <TeamLink team=m.home_team.clone()/>
                <span class="match-hero__numbers">
                    {format!("{} : {}", score(m.home_score), score(m.away_score))}
                </span>
                <TeamLink team=m.away_team.clone()/>
            </div>
            {m.summary.clone().map(|s| view! { <p class="match-hero__summary">{s}</p> })}
        </section>
        {comparison}
        <div class="lineups">
            <LineupTable team=m.home_team.clone() entries=home/>
            <LineupTable team=m.away_team entries=away/>
        </div>
    }
}

#[component]
fn TeamLink(team: TeamRef) -> impl IntoView {
    view! {
        <a class="match-hero__team" href=format!("/teams/{}", team.slug)>
            {team.logo_url.map(|src| view! { <img class="match-hero__logo" src=src alt=""/> })}
            {team.name}
        </a>
    }
}

#[component]
fn LineupTable(team: TeamRef, entries: Vec<LineupEntry>) -> impl IntoView {
    let heading = format!("{} lineup", team.name);
    if entries.is_empty() {
        return view! {
            <section class="lineup">
                <h2>{heading}</h2>
                <EmptyState message="Lineup statistics are not available for this match."/>
            </section>
        }
        .into_any();
    }
    let rows = entries
        .into_iter()
        .map(|e| {
            let name = match e.player_slug {
                Some(slug) => view! { <a href=format!("/players/{slug}")>{e.player_name}</a> }.into_any(),
                None => view! { <span>{e.player_name}</span> }.into_any(),
            };
            let starter = if e.is_starter { "Starting 7" } else { "Substitute" };
            view! {
                <tr>
                    <td>{name}</td>
                    <td>{e.role.unwrap_or_default()}</td>
                    <td>{starter}</td>
                    <td>{e.raid_points.to_string()}</td>
                    <td>{e.tackle_points.to_string()}</td>
                    <td>{e.bonus_points.to_string()}</td>
                    <td class="standings__points">{e.total_points.to_string()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="lineup">
            <h2>{heading}</h2>
            <table class="standings">
                <thead>
                    <tr>
                        <th>"Player"</th>
                        <th>"Role"</th>
                        <th></th>
                        <th>"Raid"</th>
                        <th>"Tackle"</th>
                        <th>"Bonus"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
    .into_any()
}
