//! Standings table with points chart.

use leptos::prelude::*;

use crate::api::types::{Season, StandingRow};
use crate::views::components::{PointsChart, StandingsTable};

#[component]
pub fn StandingsPage(rows: Vec<StandingRow>, season: Option<Season>) -> impl IntoView {
    let heading = season.map_or_else(|| "Standings".to_owned(), |s| format!("Standings: {}", s.name));
    let chart = (!rows.is_empty()).then(|| {
        let rows = rows.clone();
        view! {
            <section>
                <h2>"Points"</h2>
                <PointsChart rows=rows/>
            </section>
        }
    });
    view! {
        <h1>{heading}</h1>
        <StandingsTable rows=rows/>
        {chart}
    }
}
