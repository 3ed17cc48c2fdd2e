//! Player detail page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::api::types::{Player, PlayerStats};
use crate::views::components::{EmptyState, RateBar, SplitBar, StatTile};

pub struct PlayerData {
    pub player: Player,
    pub stats: Option<PlayerStats>,
}

#[component]
pub fn PlayerPage(data: PlayerData) -> impl IntoView {
    let PlayerData { player, stats } = data;
    let team = player.team.map(|t| {
        view! { <a class="player-hero__team" href=format!("/teams/{}", t.slug)>{t.name}</a> }
    });
    let facts = [
        ("Position", player.position),
        ("Jersey", player.jersey_number.map(|n| format!("#{n}"))),
        ("Nationality", player.nationality),
        ("Born", player.date_of_birth),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| view! { <dt>{label}</dt><dd>{v}</dd> }))
    .collect::<Vec<_>>();

    view! {
        <section class="player-hero">
            {player.photo_url.map(|src| view! { <img class="player-hero__photo" src=src alt=""/> })}
            <h1>{player.name}</h1>
            {team}
            <dl class="facts">{facts}</dl>
        </section>
        <section>
            <h2>"Career statistics"</h2>
            {match stats {
                Some(stats) => view! { <PlayerStatsPanel stats=stats/> }.into_any(),
                None => view! { <EmptyState message="Statistics are not available for this player."/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn PlayerStatsPanel(stats: PlayerStats) -> impl IntoView {
    view! {
        <div class="stat-tiles">
            <StatTile label="Matches" value=stats.matches_played/>
            <StatTile label="Total points" value=stats.total_points/>
            <StatTile label="Super Raids" value=stats.super_raids/>
            <StatTile label="Super Tackles" value=stats.super_tackles/>
            <StatTile label="Super 10s" value=stats.super_tens/>
            <StatTile label="High 5s" value=stats.high_fives/>
            <StatTile label="Do-or-Die points" value=stats.do_or_die_points/>
        </div>
        <SplitBar left_label="Raid points" left=stats.raid_points right_label="Tackle points" right=stats.tackle_points/>
        <RateBar label="Raid success" part=stats.successful_raids whole=stats.total_raids/>
        <RateBar label="Tackle success" part=stats.successful_tackles whole=stats.total_tackles/>
    }
}
