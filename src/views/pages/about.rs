//! Static pages: league information and the video hub.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::{ABOUT_FACTS, ABOUT_INTRO, GLOSSARY, Video};
use crate::views::components::EmptyState;

#[component]
pub fn AboutPage(#[prop(into)] site_name: String) -> impl IntoView {
    let facts = ABOUT_FACTS
        .iter()
        .map(|f| view! { <dt>{f.label}</dt><dd>{f.value}</dd> })
        .collect::<Vec<_>>();
    let terms = GLOSSARY
        .iter()
        .map(|t| view! { <dt>{t.name}</dt><dd>{t.meaning}</dd> })
        .collect::<Vec<_>>();

    view! {
        <h1>{format!("About {site_name}")}</h1>
        <p>{ABOUT_INTRO}</p>
        <section>
            <h2>"The game"</h2>
            <dl class="facts">{facts}</dl>
        </section>
        <section>
            <h2>"Glossary"</h2>
            <dl class="facts">{terms}</dl>
        </section>
    }
}

#[component]
pub fn VideosPage(
    videos: Vec<&'static Video>,
    categories: Vec<&'static str>,
    selected: Option<String>,
) -> impl IntoView {
    let chips = std::iter::once(("All", "/videos".to_owned(), selected.is_none()))
        .chain(categories.into_iter().map(|c| {
            let active = selected.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(c));
            (c, format!("/videos?category={}", c.replace(' ', "+")), active)
        }))
        .map(|(label, href, active)| {
            let class = if active { "chip chip--active" } else { "chip" };
            view! { <a class=class href=href>{label}</a> }
        })
        .collect::<Vec<_>>();
    let body = if videos.is_empty() {
        view! { <EmptyState message="No videos in this category."/> }.into_any()
    } else {
        let cards = videos
            .into_iter()
            .map(|v| {
                view! {
                    <a class="video-card" href=v.url rel="noopener">
                        <span class="video-card__category">{v.category}</span>
                        <span class="video-card__title">{v.title}</span>
                        <span class="video-card__duration">{v.duration}</span>
                    </a>
                }
            })
            .collect::<Vec<_>>();
        view! { <div class="video-grid">{cards}</div> }.into_any()
    };

    view! {
        <h1>"Videos"</h1>
        <nav class="chips">{chips}</nav>
        {body}
    }
}
