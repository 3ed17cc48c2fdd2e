//! Team list and team detail pages.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::api::types::{Match, Player, Season, Team, TeamStats};
use crate::shape::matches::ResultLetter;
use crate::views::components::{EmptyState, FormGuide, MatchList, RateBar, SplitBar, StatTile, TeamCard};

#[component]
pub fn TeamsPage(teams: Vec<Team>) -> impl IntoView {
    let body = if teams.is_empty() {
        view! { <EmptyState message="Teams are loading. Please check back shortly."/> }.into_any()
    } else {
        let cards = teams.into_iter().map(|team| view! { <TeamCard team=team/> }).collect::<Vec<_>>();
        view! { <div class="team-grid">{cards}</div> }.into_any()
    };
    view! {
        <h1>"Teams"</h1>
        {body}
    }
}

pub struct TeamDetailData {
    pub team: Team,
    pub stats: Option<TeamStats>,
    pub season: Option<Season>,
    pub squad: Vec<Player>,
    pub form: Vec<ResultLetter>,
    pub fixtures: Vec<Match>,
}

#[component]
pub fn TeamDetailPage(data: TeamDetailData) -> impl IntoView {
    let TeamDetailData { team, stats, season, squad, form, fixtures } = data;
    let facts = [
        ("City", team.city),
        ("Home ground", team.home_ground),
        ("Captain", team.captain),
        ("Head coach", team.coach),
        ("Founded", team.founded.map(|y| y.to_string())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| view! { <dt>{label}</dt><dd>{v}</dd> }))
    .collect::<Vec<_>>();
    let squad_heading = season.map_or_else(|| "Squad".to_owned(), |s| format!("Squad: {}", s.name));

    view! {
        <section class="team-hero">
            {team.logo_url.map(|src| view! { <img class="team-hero__logo" src=src alt=""/> })}
            <h1>{team.name}</h1>
            {team.description.map(|d| view! { <p>{d}</p> })}
            <dl class="facts">{facts}</dl>
        </section>
        <section>
            <h2>"Form"</h2>
            <FormGuide form=form/>
        </section>
        <section>
            <h2>"Season statistics"</h2>
            {match stats {
                Some(stats) => view! { <TeamStatsPanel stats=stats/> }.into_any(),
                None => view! { <EmptyState message="Statistics are not available for this team."/> }.into_any(),
            }}
        </section>
        <section>
            <h2>{squad_heading}</h2>
            <SquadGrid squad=squad/>
        </section>
        <section>
            <h2>"Matches"</h2>
            <MatchList matches=fixtures empty="No matches scheduled for this team."/>
        </section>
    }
}

#[component]
fn TeamStatsPanel(stats: TeamStats) -> impl IntoView {
    view! {
        <div class="stat-tiles">
            <StatTile label="Played" value=stats.matches_played/>
            <StatTile label="Won" value=stats.wins/>
            <StatTile label="Lost" value=stats.losses/>
            <StatTile label="Drawn" value=stats.draws/>
            <StatTile label="Points scored" value=stats.points_scored/>
            <StatTile label="Points conceded" value=stats.points_conceded/>
            <StatTile label="All outs inflicted" value=stats.all_outs_inflicted/>
            <StatTile label="All outs conceded" value=stats.all_outs_conceded/>
        </div>
        <SplitBar left_label="Raid points" left=stats.raid_points right_label="Tackle points" right=stats.tackle_points/>
        <RateBar label="Raid success" part=stats.successful_raids whole=stats.total_raids/>
        <RateBar label="Tackle success" part=stats.successful_tackles whole=stats.total_tackles/>
    }
}

#[component]
fn SquadGrid(squad: Vec<Player>) -> impl IntoView {
    if squad.is_empty() {
        return view! { <EmptyState message="Squad has not been announced."/> }.into_any();
    }
    let cards = squad
        .into_iter()
        .map(|p| {
            let number = p.jersey_number.map(|n| view! { <span class="player-card__number">{format!("#{n}")}</span> });
            let inner = view! {
                {number}
                <span class="player-card__name">{p.name}</span>
                {p.position.map(|pos| view! { <span class="player-card__role">{pos}</span> })}
            };
            if p.slug.is_empty() {
                view! { <div class="player-card">{inner}</div> }.into_any()
            } else {
                view! { <a class="player-card" href=format!("/players/{}", p.slug)>{inner}</a> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <div class="player-grid">{cards}</div> }.into_any()
}
