//! Presentational components shared across pages.
//!
//! DESIGN
//! ======
//! Components take owned display records and never fetch. Charts are plain
//! HTML bars sized with inline widths so pages render without client script.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::api::types::{Match, NewsItem, StandingRow, Team};
use crate::live::Scoreboard;
use crate::pagination::PageInfo;
use crate::shape::matches::{MatchStatus, MatchTier, ResultLetter};
use crate::shape::standings::{display_position, points_bar_width};
use crate::shape::{display_date, display_time, percentage, percentage_label};

fn score_text(score: Option<u32>) -> String {
    score.map_or_else(|| "-".to_owned(), |s| s.to_string())
}

fn bar_style(width: f64) -> String {
    format!("width: {width:.1}%")
}

/// Placeholder for a section with nothing to show.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="empty-state">{message}</p> }
}

#[component]
pub fn StatusBadge(status: MatchStatus) -> impl IntoView {
    view! { <span class=status.css_class()>{status.label()}</span> }
}

#[component]
pub fn MatchCard(m: Match) -> impl IntoView {
    let status = MatchStatus::of(&m);
    let stage = match MatchTier::of(&m) {
        MatchTier::League | MatchTier::Other => None,
        _ => m.match_type.clone(),
    };
    let number = m.match_number.map(|n| format!("Match {n}"));
    let when = display_date(m.date.as_deref());
    let kickoff = display_time(m.date.as_deref());
    let href = format!("/matches/{}", m.id);

    view! {
        <article class="match-card">
            <header class="match-card__meta">
                {number.map(|n| view! { <span class="match-card__number">{n}</span> })}
                {stage.map(|s| view! { <span class="match-card__stage">{s}</span> })}
                <StatusBadge status=status/>
            </header>
            <a class="match-card__body" href=href>
                <span class="match-card__team">{m.home_team.name}</span>
                <span class="match-card__score">
                    {format!("{} : {}", score_text(m.home_score), score_text(m.away_score))}
                </span>
                <span class="match-card__team">{m.away_team.name}</span>
            </a>
            <footer class="match-card__when">
                <span>{when}</span>
                {kickoff.map(|k| view! { <span>{k}</span> })}
                {m.venue.map(|v| view! { <span class="match-card__venue">{v}</span> })}
            </footer>
        </article>
    }
}

#[component]
pub fn MatchList(matches: Vec<Match>, #[prop(into)] empty: String) -> impl IntoView {
    if matches.is_empty() {
        return view! { <EmptyState message=empty/> }.into_any();
    }
    let cards = matches.into_iter().map(|m| view! { <MatchCard m=m/> }).collect::<Vec<_>>();
    view! { <div class="match-list">{cards}</div> }.into_any()
}

#[component]
pub fn TeamCard(team: Team) -> impl IntoView {
    let initials = team.short_name.clone().unwrap_or_else(|| team.name.chars().take(3).collect());
    let inner = view! {
        {match team.logo_url {
            Some(src) => view! { <img class="team-card__logo" src=src alt=team.name.clone()/> }.into_any(),
            None => view! { <span class="team-card__logo team-card__logo--text">{initials}</span> }.into_any(),
        }}
        <span class="team-card__name">{team.name.clone()}</span>
        {team.city.map(|c| view! { <span class="team-card__city">{c}</span> })}
    };
    // Records without a slug have no detail page to link to.
    if team.slug.is_empty() {
        view! { <div class="team-card">{inner}</div> }.into_any()
    } else {
        view! { <a class="team-card" href=format!("/teams/{}", team.slug)>{inner}</a> }.into_any()
    }
}

/// Standings table. `compact` drops the detail columns for the home page.
#[component]
pub fn StandingsTable(rows: Vec<StandingRow>, #[prop(optional)] compact: bool) -> impl IntoView {
    if rows.is_empty() {
        return view! { <EmptyState message="Standings are not available yet."/> }.into_any();
    }
    let body = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let href = format!("/teams/{}", row.team.slug);
            let detail = (!compact).then(|| {
                view! {
                    <td>{row.won.to_string()}</td>
                    <td>{row.lost.to_string()}</td>
                    <td>{row.drawn.to_string()}</td>
                    <td>{format!("{:+}", row.score_difference)}</td>
                }
            });
            view! {
                <tr>
                    <td>{display_position(row, i).to_string()}</td>
                    <td><a href=href>{row.team.label().to_owned()}</a></td>
                    <td>{row.played.to_string()}</td>
                    {detail}
                    <td class="standings__points">{row.points.to_string()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();
    let detail_head = (!compact).then(|| {
        view! {
            <th>"W"</th>
            <th>"L"</th>
            <th>"D"</th>
            <th>"+/-"</th>
        }
    });

    view! {
        <table class="standings">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Team"</th>
                    <th>"P"</th>
                    {detail_head}
                    <th>"Pts"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}

/// Horizontal bar chart of points, scaled to the leader.
#[component]
pub fn PointsChart(rows: Vec<StandingRow>) -> impl IntoView {
    let bars = rows
        .iter()
        .map(|row| {
            let width = points_bar_width(row, &rows);
            view! {
                <div class="chart__row">
                    <span class="chart__label">{row.team.label().to_owned()}</span>
                    <span class="chart__track">
                        <span class="chart__bar" style=bar_style(width)></span>
                    </span>
                    <span class="chart__value">{row.points.to_string()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();
    view! { <div class="chart" role="img" aria-label="Points by team">{bars}</div> }
}

/// Success-rate bar, e.g. successful raids out of attempted raids.
#[component]
pub fn RateBar(#[prop(into)] label: String, part: u32, whole: u32) -> impl IntoView {
    let width = percentage(part, whole);
    view! {
        <div class="rate">
            <div class="rate__head">
                <span>{label}</span>
                <span>{format!("{part}/{whole} ({})", percentage_label(part, whole))}</span>
            </div>
            <div class="chart__track">
                <span class="chart__bar" style=bar_style(width)></span>
            </div>
        </div>
    }
}

/// Two-way split bar, e.g. raid points against tackle points.
#[component]
pub fn SplitBar(
    #[prop(into)] left_label: String,
    left: u32,
    #[prop(into)] right_label: String,
    right: u32,
) -> impl IntoView {
    let width = percentage(left, left.saturating_add(right));
    view! {
        <div class="split">
            <div class="split__labels">
                <span>{format!("{left_label} {left}")}</span>
                <span>{format!("{right} {right_label}")}</span>
            </div>
            <div class="split__track">
                <span class="split__left" style=bar_style(width)></span>
            </div>
        </div>
    }
}

#[component]
pub fn StatTile(#[prop(into)] label: String, value: u32) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value.to_string()}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}

#[component]
pub fn FormGuide(form: Vec<ResultLetter>) -> impl IntoView {
    if form.is_empty() {
        return view! { <EmptyState message="No completed matches yet."/> }.into_any();
    }
    let pills = form
        .into_iter()
        .map(|r| {
            let class = match r {
                ResultLetter::Win => "form form--win",
                ResultLetter::Loss => "form form--loss",
                ResultLetter::Draw => "form form--draw",
            };
            view! { <span class=class>{r.letter()}</span> }
        })
        .collect::<Vec<_>>();
    view! { <div class="form-guide">{pills}</div> }.into_any()
}

#[component]
pub fn NewsCard(item: NewsItem) -> impl IntoView {
    view! {
        <article class="news-card">
            {item.image_url.map(|src| view! { <img class="news-card__image" src=src alt=""/> })}
            <div class="news-card__body">
                {item.category.map(|c| view! { <span class="news-card__category">{c}</span> })}
                <h3 class="news-card__title">{item.title}</h3>
                <time class="news-card__date">{display_date(item.published_at.as_deref())}</time>
                {item.summary.map(|s| view! { <p class="news-card__summary">{s}</p> })}
            </div>
        </article>
    }
}

/// Numbered pager; only pages `1..=total_pages` are ever linked.
#[component]
pub fn Pager(info: PageInfo) -> impl IntoView {
    if info.total_pages <= 1 {
        return ().into_any();
    }
    let link = |p: usize| format!("/news?page={p}");
    let page = info.page;
    let prev = info.has_prev().then(|| view! { <a class="pager__step" href=link(page - 1)>"Previous"</a> });
    let next = info.has_next().then(|| view! { <a class="pager__step" href=link(page + 1)>"Next"</a> });
    let numbers = info
        .page_numbers()
        .map(|p| {
            if p == page {
                view! { <span class="pager__current" aria-current="page">{p.to_string()}</span> }.into_any()
            } else {
                view! { <a class="pager__page" href=link(p)>{p.to_string()}</a> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <nav class="pager" aria-label="News pages">{prev}{numbers}{next}</nav> }.into_any()
}

#[component]
pub fn ScoreboardWidget(board: Scoreboard) -> impl IntoView {
    let clock = if board.finished { "Full time".to_owned() } else { format!("{}'", board.minute()) };
    let raiding = board.side(board.raiding).name.clone();
    let ticker = board
        .ticker
        .iter()
        .map(|t| view! { <li><span class="ticker__minute">{format!("{}'", t.minute)}</span>{t.text.clone()}</li> })
        .collect::<Vec<_>>();
    let mat = |on_mat: u8| format!("{on_mat} on mat");

    view! {
        <section class="scoreboard" aria-live="polite">
            <header class="scoreboard__head">
                <span class="status status--live">"Live demo"</span>
                <span class="scoreboard__clock">{clock}</span>
            </header>
            <div class="scoreboard__teams">
                <div class="scoreboard__side">
                    <span class="scoreboard__name">{board.home.name.clone()}</span>
                    <span class="scoreboard__score">{board.home.score.to_string()}</span>
                    <span class="scoreboard__mat">{mat(board.home.on_mat)}</span>
                </div>
                <div class="scoreboard__side">
                    <span class="scoreboard__name">{board.away.name.clone()}</span>
                    <span class="scoreboard__score">{board.away.score.to_string()}</span>
                    <span class="scoreboard__mat">{mat(board.away.on_mat)}</span>
                </div>
            </div>
            {(!board.finished).then(|| view! { <p class="scoreboard__raid">{format!("Raiding: {raiding}")}</p> })}
            <ul class="ticker">{ticker}</ul>
        </section>
    }
}
