//! Schedule page with team and status dropdown filters.

use leptos::prelude::*;

use crate::api::types::{Match, Team};
use crate::shape::matches::{ScheduleFilter, StatusFilter};
use crate::views::components::MatchList;

pub struct ScheduleData {
    pub matches: Vec<Match>,
    pub teams: Vec<Team>,
    pub filter: ScheduleFilter,
}

const STATUS_OPTIONS: [(Option<StatusFilter>, &str); 4] = [
    (None, "All matches"),
    (Some(StatusFilter::Upcoming), "Upcoming"),
    (Some(StatusFilter::Live), "Live"),
    (Some(StatusFilter::Finished), "Results"),
];

#[component]
pub fn SchedulePage(data: ScheduleData) -> impl IntoView {
    let ScheduleData { matches, teams, filter } = data;
    let selected_team = filter.team.clone().unwrap_or_default();

    let team_options = teams
        .into_iter()
        .map(|t| {
            let selected = t.slug == selected_team;
            view! { <option value=t.slug selected=selected>{t.name}</option> }
        })
        .collect::<Vec<_>>();
    let status_options = STATUS_OPTIONS
        .iter()
        .map(|&(status, label)| {
            let value = status.map_or("all", StatusFilter::as_str);
            let selected = status == filter.status;
            view! { <option value=value selected=selected>{label}</option> }
        })
        .collect::<Vec<_>>();
    let count = format!("{} matches", matches.len());

    view! {
        <h1>"Schedule"</h1>
        <form class="filters" method="get" action="/schedule">
            <label>
                "Team "
                <select name="team">
                    <option value="all" selected=selected_team.is_empty()>"All teams"</option>
                    {team_options}
                </select>
            </label>
            <label>
                "Status "
                <select name="status">{status_options}</select>
            </label>
            <button type="submit">"Filter"</button>
        </form>
        <p class="filters__count">{count}</p>
        <MatchList matches=matches empty="No matches found for this selection."/>
    }
}
