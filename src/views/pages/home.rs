//! Landing page: season banner, live widget, table, fixtures, and news.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::api::types::{Match, NewsItem, Season, StandingRow};
use crate::live::Scoreboard;
use crate::views::components::{EmptyState, MatchList, NewsCard, ScoreboardWidget, StandingsTable};

pub struct HomeData {
    pub season: Option<Season>,
    pub board: Scoreboard,
    pub standings: Vec<StandingRow>,
    pub upcoming: Vec<Match>,
    pub news: Vec<NewsItem>,
}

#[component]
pub fn HomePage(data: HomeData) -> impl IntoView {
    let HomeData { season, board, standings, upcoming, news } = data;
    let banner = match season {
        Some(Season { name, year: Some(year), .. }) if !name.contains(&year.to_string()) => format!("{name} ({year})"),
        Some(s) => s.name,
        None => "The league is loading".to_owned(),
    };
    let news_cards = if news.is_empty() {
        vec![view! { <EmptyState message="No news yet."/> }.into_any()]
    } else {
        news.into_iter().map(|item| view! { <NewsCard item=item/> }.into_any()).collect()
    };

    view! {
        <section class="hero">
            <h1>{banner}</h1>
            <p>"Fixtures, results, standings, and stories from every raid and tackle."</p>
        </section>
        <div class="home-grid">
            <ScoreboardWidget board=board/>
            <section>
                <h2>"Standings"</h2>
                <StandingsTable rows=standings compact=true/>
                <a class="more" href="/standings">"Full table"</a>
            </section>
        </div>
        <section>
            <h2>"Upcoming matches"</h2>
            <MatchList matches=upcoming empty="No upcoming matches scheduled."/>
            <a class="more" href="/schedule">"Full schedule"</a>
        </section>
        <section>
            <h2>"Latest news"</h2>
            <div class="news-grid">{news_cards}</div>
            <a class="more" href="/news">"All news"</a>
        </section>
    }
}
