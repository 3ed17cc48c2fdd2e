//! Placeholders for unknown records and for records the league API could
//! not serve.

use leptos::prelude::*;

use crate::views::components::EmptyState;

#[component]
pub fn NotFoundPage(#[prop(into)] what: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>{format!("{what} not found")}</h1>
            <p>"It may have moved, or the league has not published it yet."</p>
            <a class="more" href="/">"Back to home"</a>
        </section>
    }
}

/// The record may exist but the league API failed to return it.
#[component]
pub fn UnavailablePage(#[prop(into)] what: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>{what.clone()}</h1>
            <EmptyState message=format!("{what} details are temporarily unavailable. Please try again shortly.")/>
            <a class="more" href="/">"Back to home"</a>
        </section>
    }
}
